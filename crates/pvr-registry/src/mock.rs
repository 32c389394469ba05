//! Seeded mock catalogs for demos and tests.

use pvr_core::rng::RngHandle;
use pvr_core::{Bump, Prompt, Schema, Status, Version};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::catalog::Catalog;

pub const MEMBERS: [&str; 5] = [
    "john.doe",
    "jane.smith",
    "mike.johnson",
    "sarah.williams",
    "alex.brown",
];

pub const AGENTS: [&str; 5] = [
    "customer-support",
    "content-moderator",
    "data-analyst",
    "recommendation-engine",
    "qa-assistant",
];

pub const PROMPT_TYPES: [&str; 5] = ["qa", "summary", "extraction", "classification", "generation"];

pub const SCHEMA_NAMES: [&str; 5] = [
    "customer-data",
    "product-info",
    "transaction-details",
    "user-feedback",
    "content-analysis",
];

const PROMPT_STREAM: u64 = 0;
const SCHEMA_STREAM: u64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockOptions {
    pub seed: u64,
    pub prompts: usize,
    pub schemas: usize,
}

impl Default for MockOptions {
    fn default() -> Self {
        Self {
            seed: 0,
            prompts: 50,
            schemas: 50,
        }
    }
}

/// Generator for deterministic demo catalogs.
///
/// Prompts and schemas draw from separate RNG substreams so changing one count
/// leaves the other collection unchanged.
pub struct MockCatalog;

impl MockCatalog {
    pub fn generate(opts: &MockOptions) -> Catalog {
        let mut rng = RngHandle::substream(opts.seed, PROMPT_STREAM);
        let prompts = (0..opts.prompts).map(|_| mock_prompt(&mut rng)).collect();
        let mut rng = RngHandle::substream(opts.seed, SCHEMA_STREAM);
        let schemas = (0..opts.schemas).map(|_| mock_schema(&mut rng)).collect();
        tracing::debug!(
            seed = opts.seed,
            prompts = opts.prompts,
            schemas = opts.schemas,
            "generated mock catalog"
        );
        Catalog::new(prompts, schemas)
    }
}

fn mock_version(rng: &mut RngHandle) -> Version {
    Version::new(rng.below(3), rng.below(10), rng.below(20))
}

fn mock_prompt(rng: &mut RngHandle) -> Prompt {
    let version = mock_version(rng);
    let bump = *rng.pick(&Bump::ALL);
    let status = *rng.pick(&Status::ALL);
    let member = rng.pick(&MEMBERS).to_string();
    let prompt_type = rng.pick(&PROMPT_TYPES).to_string();
    // Drawn independently of prompt_type.
    let template_type = rng.pick(&PROMPT_TYPES);
    let template = format!(
        "This is a sample template for {template_type} prompt.\n\
         It contains variables like {{{{input}}}} and {{{{context}}}} that will be replaced with actual values."
    );
    let agent = rng.pick(&AGENTS).to_string();
    Prompt {
        version,
        bump,
        status,
        member,
        owner: None,
        prompt_type,
        template,
        agent,
    }
}

fn mock_schema(rng: &mut RngHandle) -> Schema {
    Schema {
        version: mock_version(rng),
        bump: *rng.pick(&Bump::ALL),
        status: *rng.pick(&Status::ALL),
        member: rng.pick(&MEMBERS).to_string(),
        owner: None,
        name: rng.pick(&SCHEMA_NAMES).to_string(),
        definition: sample_definition(),
    }
}

fn sample_definition() -> Value {
    json!({
        "type": "object",
        "properties": {
            "id": { "type": "string" },
            "name": { "type": "string" },
            "value": { "type": "number" },
            "tags": {
                "type": "array",
                "items": { "type": "string" }
            }
        },
        "required": ["id", "name"]
    })
}
