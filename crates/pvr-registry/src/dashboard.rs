use indexmap::IndexMap;
use pvr_core::{Resource, Status};
use pvr_query::FilterSpec;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;

/// Number of records in each lifecycle stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub unstable: usize,
    pub draft: usize,
    pub stable: usize,
    pub deprecated: usize,
}

impl StatusCounts {
    pub fn from_items<'a, T, I>(items: I) -> Self
    where
        T: Resource + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        let mut counts = Self::default();
        for item in items {
            *counts.slot_mut(item.status()) += 1;
        }
        counts
    }

    pub fn get(&self, status: Status) -> usize {
        match status {
            Status::Unstable => self.unstable,
            Status::Draft => self.draft,
            Status::Stable => self.stable,
            Status::Deprecated => self.deprecated,
        }
    }

    pub fn total(&self) -> usize {
        self.unstable + self.draft + self.stable + self.deprecated
    }

    pub fn merged(&self, other: &StatusCounts) -> Self {
        Self {
            unstable: self.unstable + other.unstable,
            draft: self.draft + other.draft,
            stable: self.stable + other.stable,
            deprecated: self.deprecated + other.deprecated,
        }
    }

    fn slot_mut(&mut self, status: Status) -> &mut usize {
        match status {
            Status::Unstable => &mut self.unstable,
            Status::Draft => &mut self.draft,
            Status::Stable => &mut self.stable,
            Status::Deprecated => &mut self.deprecated,
        }
    }
}

/// Count of one distinct value and its share of the total, rounded to a whole percent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountEntry {
    pub value: String,
    pub count: usize,
    pub percent: u32,
}

/// Figures shown on the dashboard for the current filters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_prompts: usize,
    pub total_schemas: usize,
    pub prompt_types: usize,
    pub agents: usize,
    pub by_type: Vec<CountEntry>,
    pub by_agent: Vec<CountEntry>,
    pub by_status: StatusCounts,
}

impl DashboardSummary {
    /// Builds the summary from the same query engine the resource tables use.
    pub fn build(catalog: &Catalog, filters: &FilterSpec) -> Self {
        let prompts = catalog.query_prompts(filters, None);
        let schemas = catalog.query_schemas(filters, None);
        let total_prompts = prompts.len();

        let by_type = tally(prompts.iter().map(|p| p.prompt_type.as_str()), total_prompts);
        let by_agent = tally(prompts.iter().map(|p| p.agent.as_str()), total_prompts);
        let by_status =
            StatusCounts::from_items(prompts.iter()).merged(&StatusCounts::from_items(schemas.iter()));

        tracing::debug!(
            prompts = total_prompts,
            schemas = schemas.len(),
            "built dashboard summary"
        );
        Self {
            total_prompts,
            total_schemas: schemas.len(),
            prompt_types: by_type.len(),
            agents: by_agent.len(),
            by_type,
            by_agent,
            by_status,
        }
    }
}

fn tally<'a>(values: impl Iterator<Item = &'a str>, total: usize) -> Vec<CountEntry> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .map(|(value, count)| CountEntry {
            value: value.to_string(),
            count,
            percent: rounded_percent(count, total),
        })
        .collect()
}

fn rounded_percent(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    // Half-up rounding of count / total * 100.
    ((200 * count + total) / (2 * total)) as u32
}
