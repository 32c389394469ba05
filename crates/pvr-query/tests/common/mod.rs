#![allow(dead_code)]

use pvr_core::{Bump, Prompt, Schema, Status, Version};
use serde_json::json;

pub fn prompt(prompt_type: &str, agent: &str, version: &str, status: Status, member: &str) -> Prompt {
    Prompt {
        version: Version::parse(version).unwrap(),
        bump: Bump::Patch,
        status,
        member: member.into(),
        owner: None,
        prompt_type: prompt_type.into(),
        template: format!("Handle {{{{input}}}} for {agent} using {{{{context}}}}."),
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
        definition: json!({
            "type": "object",
            "properties": {"id": {"type": "string"}, "email": {"type": "string"}},
            "required": ["id"]
        }),
    }
}

pub fn prompt_fixture() -> Vec<Prompt> {
    vec![
        prompt("qa", "customer-support", "1.0.0", Status::Stable, "john.doe"),
        prompt("summary", "data-analyst", "0.3.1", Status::Unstable, "jane.smith"),
        prompt("qa", "customer-support", "1.2.0", Status::Unstable, "jane.smith"),
        prompt("classification", "qa-assistant", "2.0.0", Status::Stable, "alex.brown"),
        prompt("generation", "content-moderator", "0.9.4", Status::Deprecated, "john.doe"),
        prompt("qa", "customer-support", "1.10.0", Status::Draft, "mike.johnson"),
        prompt("summary", "data-analyst", "0.3.1", Status::Stable, "sarah.williams"),
    ]
}
