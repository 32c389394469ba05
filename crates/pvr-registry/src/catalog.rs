use pvr_core::errors::PvrError;
use pvr_core::{ContentHash, Field, Prompt, Schema};
use pvr_query::{evaluate, unique_values, FilterSpec, QueryOutcome, SortSpec};
use serde::{Deserialize, Serialize};

/// Snapshot of every prompt and schema known to the registry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub prompts: Vec<Prompt>,
    #[serde(default)]
    pub schemas: Vec<Schema>,
}

/// Distinct values offered as filter choices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub members: Vec<String>,
    pub agents: Vec<String>,
    pub types: Vec<String>,
    pub names: Vec<String>,
}

impl Catalog {
    pub fn new(prompts: Vec<Prompt>, schemas: Vec<Schema>) -> Self {
        Self { prompts, schemas }
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty() && self.schemas.is_empty()
    }

    /// SHA256 over the canonical JSON form; identical snapshots hash identically.
    pub fn content_hash(&self) -> Result<ContentHash, PvrError> {
        ContentHash::of(self)
    }

    pub fn query_prompts(
        &self,
        filters: &FilterSpec,
        sort: Option<&SortSpec>,
    ) -> QueryOutcome<'_, Prompt> {
        evaluate(&self.prompts, filters, sort)
    }

    pub fn query_schemas(
        &self,
        filters: &FilterSpec,
        sort: Option<&SortSpec>,
    ) -> QueryOutcome<'_, Schema> {
        evaluate(&self.schemas, filters, sort)
    }

    /// Members are merged across prompts and schemas, prompts first.
    pub fn filter_options(&self) -> FilterOptions {
        let mut members = unique_values(&self.prompts, Field::Member);
        for member in unique_values(&self.schemas, Field::Member) {
            if !members.contains(&member) {
                members.push(member);
            }
        }
        FilterOptions {
            members,
            agents: unique_values(&self.prompts, Field::Agent),
            types: unique_values(&self.prompts, Field::Type),
            names: unique_values(&self.schemas, Field::Name),
        }
    }
}
