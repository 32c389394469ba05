#![allow(dead_code)]

use pvr_core::{Bump, Prompt, Schema, Status, Version};
use pvr_registry::Catalog;
use serde_json::json;

pub fn prompt(prompt_type: &str, agent: &str, version: &str, status: Status, member: &str) -> Prompt {
    Prompt {
        version: Version::parse(version).unwrap(),
        bump: Bump::Patch,
        status,
        member: member.into(),
        owner: None,
        prompt_type: prompt_type.into(),
        template: format!("{prompt_type} template for {agent}: {{{{input}}}}"),
        agent: agent.into(),
    }
}

pub fn schema(name: &str, version: &str, status: Status, member: &str) -> Schema {
    Schema {
        version: Version::parse(version).unwrap(),
        bump: Bump::Minor,
        status,
        member: member.into(),
        owner: None,
        name: name.into(),
        definition: json!({"type": "object", "required": [name]}),
    }
}

pub fn catalog() -> Catalog {
    Catalog::new(
        vec![
            prompt("qa", "customer-support", "1.0.0", Status::Stable, "john.doe"),
            prompt("summary", "data-analyst", "0.3.1", Status::Unstable, "jane.smith"),
            prompt("qa", "qa-assistant", "1.10.0", Status::Draft, "mike.johnson"),
            prompt("qa", "customer-support", "1.2.0", Status::Unstable, "jane.smith"),
        ],
        vec![
            schema("customer-data", "1.0.0", Status::Stable, "alex.brown"),
            schema("customer-data", "1.1.0", Status::Deprecated, "john.doe"),
            schema("product-info", "2.0.0", Status::Unstable, "jane.smith"),
        ],
    )
}

pub const CATALOG_JSON: &str = r#"{
  "prompts": [
    {"version": "1.0.0", "bump": "major", "status": "stable", "member": "john.doe",
     "type": "qa", "template": "Answer {{input}}", "agent": "customer-support"},
    {"version": "1.1", "bump": "minor", "status": "draft", "member": "jane.smith",
     "type": "qa", "template": "Answer {{input}} nicely", "agent": "customer-support"}
  ],
  "schemas": [
    {"version": "2.0.0", "bump": "major", "status": "unstable", "member": "alex.brown",
     "owner": "data-team", "name": "user-feedback", "definition": {"type": "object"}}
  ]
}"#;
