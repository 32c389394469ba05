use std::path::PathBuf;

use clap::Args;
use pvr_core::errors::PvrError;
use pvr_core::{Resource, Status};
use pvr_query::{load_filters, FilterSpec, SortDirection, SortSpec, VersionSort};

use crate::config::PvrConfig;

/// Filters shared by prompt and schema listings.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// YAML filter preset; flags below are applied on top of it.
    #[arg(long = "filters", value_name = "PATH")]
    pub preset: Option<PathBuf>,
    /// Case-insensitive text search.
    #[arg(long)]
    pub search: Option<String>,
    /// Keep only these statuses (repeatable).
    #[arg(long = "status", value_parser = Status::parse)]
    pub statuses: Vec<Status>,
    /// Keep only these members (repeatable).
    #[arg(long = "member")]
    pub members: Vec<String>,
    /// Keep only the highest version of each prompt group or schema name.
    #[arg(long)]
    pub latest: bool,
}

/// Prompt-only filters.
#[derive(Args, Debug, Clone, Default)]
pub struct PromptFilterArgs {
    /// Keep only these agents (repeatable).
    #[arg(long = "agent")]
    pub agents: Vec<String>,
    /// Keep only these prompt types (repeatable).
    #[arg(long = "type")]
    pub types: Vec<String>,
}

/// Sort options for listings and exports.
#[derive(Args, Debug, Clone, Default)]
pub struct SortArgs {
    /// Field to sort by.
    #[arg(long)]
    pub sort: Option<String>,
    /// Sort descending.
    #[arg(long, requires = "sort")]
    pub desc: bool,
    /// Order versions numerically instead of as text.
    #[arg(long)]
    pub semantic_version_sort: bool,
}

impl FilterArgs {
    pub fn to_spec(&self, prompt: Option<&PromptFilterArgs>) -> Result<FilterSpec, PvrError> {
        let mut spec = match &self.preset {
            Some(path) => load_filters(path)?,
            None => FilterSpec::default(),
        };
        if let Some(search) = &self.search {
            spec = spec.with_search(search.clone());
        }
        if !self.statuses.is_empty() {
            spec = spec.with_status(self.statuses.iter().copied());
        }
        if !self.members.is_empty() {
            spec = spec.with_members(self.members.iter().cloned());
        }
        if let Some(prompt) = prompt {
            if !prompt.agents.is_empty() {
                spec = spec.with_agents(prompt.agents.iter().cloned());
            }
            if !prompt.types.is_empty() {
                spec = spec.with_types(prompt.types.iter().cloned());
            }
        }
        if self.latest {
            spec = spec.latest_only(true);
        }
        Ok(spec)
    }
}

impl SortArgs {
    /// Sort spec validated against the resource's sortable fields.
    pub fn sort_spec<R: Resource>(&self, config: &PvrConfig) -> Result<Option<SortSpec>, PvrError> {
        let Some(key) = &self.sort else {
            return Ok(None);
        };
        let direction = if self.desc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        let version_sort = if self.semantic_version_sort {
            VersionSort::Semantic
        } else {
            config.version_sort()
        };
        let spec = SortSpec::parse_for::<R>(key, direction)?.with_version_sort(version_sort);
        Ok(Some(spec))
    }
}
