use std::fs;
use std::path::Path;

use pvr_core::errors::{ErrorInfo, PvrError};
use pvr_core::serde::from_yaml_slice;
use pvr_core::{Field, FieldValue, Resource, Status};
use serde::{Deserialize, Serialize};

/// Constraints applied to resource tables. Empty fields impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Case-insensitive substring searched across the record's text fields.
    #[serde(default)]
    pub search: String,
    /// Accepted statuses.
    #[serde(default)]
    pub status: Vec<Status>,
    /// Accepted members.
    #[serde(default)]
    pub member: Vec<String>,
    /// Accepted agents. Only prompts carry an agent.
    #[serde(default)]
    pub agent: Vec<String>,
    /// Accepted prompt types. Only prompts carry a type.
    #[serde(default, rename = "type")]
    pub prompt_type: Vec<String>,
    /// Reduce the result to the latest version of every group.
    #[serde(default)]
    pub latest_only: bool,
}

impl FilterSpec {
    /// Sets the free-text search term.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Sets the accepted statuses.
    pub fn with_status(mut self, status: impl IntoIterator<Item = Status>) -> Self {
        self.status = status.into_iter().collect();
        self
    }

    /// Sets the accepted members.
    pub fn with_members<S: Into<String>>(mut self, members: impl IntoIterator<Item = S>) -> Self {
        self.member = members.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the accepted agents.
    pub fn with_agents<S: Into<String>>(mut self, agents: impl IntoIterator<Item = S>) -> Self {
        self.agent = agents.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the accepted prompt types.
    pub fn with_types<S: Into<String>>(mut self, types: impl IntoIterator<Item = S>) -> Self {
        self.prompt_type = types.into_iter().map(Into::into).collect();
        self
    }

    /// Enables or disables latest-version reduction.
    pub fn latest_only(mut self, latest_only: bool) -> Self {
        self.latest_only = latest_only;
        self
    }

    /// Returns true when no field constrains the result.
    pub fn is_unconstrained(&self) -> bool {
        self.search.is_empty()
            && self.status.is_empty()
            && self.member.is_empty()
            && self.agent.is_empty()
            && self.prompt_type.is_empty()
            && !self.latest_only
    }

    /// Applies the record-level predicates to a single resource.
    ///
    /// `latest_only` is a collection-level reduction and is not part of the decision.
    pub fn evaluate<R: Resource>(&self, item: &R) -> FilterDecision {
        let search = if self.search.is_empty() {
            true
        } else {
            let needle = self.search.to_lowercase();
            item.search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        };
        let status = self.status.is_empty() || self.status.contains(&item.status());
        let member = self.member.is_empty() || self.member.iter().any(|m| m == item.member());
        FilterDecision {
            search,
            status,
            member,
            agent: accepts(&self.agent, item.field(Field::Agent)),
            prompt_type: accepts(&self.prompt_type, item.field(Field::Type)),
        }
    }

    /// Shorthand for `evaluate(item).passes()`.
    pub fn matches<R: Resource>(&self, item: &R) -> bool {
        self.evaluate(item).passes()
    }
}

fn accepts(allowed: &[String], value: Option<FieldValue<'_>>) -> bool {
    match value {
        _ if allowed.is_empty() => true,
        Some(FieldValue::Text(text)) => allowed.iter().any(|candidate| candidate == text),
        Some(_) => false,
        // Records without the field (schemas for agent/type) are not constrained by it.
        None => true,
    }
}

/// Outcome of the record-level predicates for one resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FilterDecision {
    /// Search predicate result.
    pub search: bool,
    /// Status membership result.
    pub status: bool,
    /// Member membership result.
    pub member: bool,
    /// Agent membership result.
    pub agent: bool,
    /// Prompt type membership result.
    pub prompt_type: bool,
}

impl FilterDecision {
    /// Returns true when all predicates succeed.
    pub fn passes(&self) -> bool {
        self.search && self.status && self.member && self.agent && self.prompt_type
    }
}

/// Loads a saved filter preset from the provided YAML path.
pub fn load_filters(path: &Path) -> Result<FilterSpec, PvrError> {
    let bytes = fs::read(path).map_err(|err| {
        PvrError::Query(
            ErrorInfo::new("pvr_query.filter_read", err.to_string())
                .with_context("path", path.display().to_string()),
        )
    })?;
    from_yaml_slice(&bytes).map_err(|err| err.with_context("path", path.display().to_string()))
}
