use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::{Args, ValueEnum};
use pvr_core::{Resource, Status, Version};
use pvr_query::latest_per_group;
use pvr_registry::{Catalog, PromptDraft, SchemaDraft};

use crate::config::PvrConfig;
use crate::output::print_json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DraftTarget {
    Prompt,
    Schema,
}

#[derive(Args, Debug)]
pub struct DraftArgs {
    #[arg(value_enum)]
    pub target: DraftTarget,
    /// Start a new version of GROUP (`type-agent` for prompts, the name for schemas).
    #[arg(
        long,
        value_name = "GROUP",
        group = "source",
        conflicts_with_all = ["edit", "from_existing"]
    )]
    pub new_version_of: Option<String>,
    /// Edit a record of GROUP in place.
    #[arg(long, value_name = "GROUP", group = "source", conflicts_with = "from_existing")]
    pub edit: Option<String>,
    /// Version to start from with --new-version-of or --edit; defaults to the latest.
    #[arg(long, value_name = "VERSION", requires = "source")]
    pub at: Option<String>,
    /// Seed a new record from the latest one with the same type (prompts) or name (schemas).
    #[arg(long)]
    pub from_existing: bool,
    #[arg(long = "type")]
    pub prompt_type: Option<String>,
    #[arg(long)]
    pub agent: Option<String>,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub template: Option<String>,
    /// File holding the schema definition JSON.
    #[arg(long, value_name = "PATH")]
    pub definition: Option<PathBuf>,
    #[arg(long)]
    pub version: Option<String>,
    #[arg(long)]
    pub owner: Option<String>,
    #[arg(long, value_parser = Status::parse)]
    pub status: Option<Status>,
    /// Member submitting the draft.
    #[arg(long)]
    pub member: String,
}

pub fn run(args: &DraftArgs, config: &PvrConfig) -> Result<(), Box<dyn Error>> {
    let catalog = config.open_catalog()?;
    match args.target {
        DraftTarget::Prompt => {
            let submission = prompt_draft(args, &catalog)?.submit(&args.member)?;
            tracing::info!(description = %submission.notice.description, "{}", submission.notice.title);
            print_json(&submission)
        }
        DraftTarget::Schema => {
            let submission = schema_draft(args, &catalog)?.submit(&args.member)?;
            tracing::info!(description = %submission.notice.description, "{}", submission.notice.title);
            print_json(&submission)
        }
    }
}

fn prompt_draft(args: &DraftArgs, catalog: &Catalog) -> Result<PromptDraft, Box<dyn Error>> {
    let mut draft = if let Some(group) = &args.new_version_of {
        PromptDraft::new_version_of(locate(&catalog.prompts, group, args.at.as_deref())?)
    } else if let Some(group) = &args.edit {
        PromptDraft::edit_of(locate(&catalog.prompts, group, args.at.as_deref())?)
    } else if args.from_existing {
        let prompt_type = args
            .prompt_type
            .as_deref()
            .ok_or("--from-existing needs --type for prompts")?;
        PromptDraft::for_existing_type(catalog, prompt_type)
    } else {
        PromptDraft::blank()
    };
    if let Some(prompt_type) = &args.prompt_type {
        draft.prompt_type = prompt_type.clone();
    }
    if let Some(agent) = &args.agent {
        draft.agent = agent.clone();
    }
    if let Some(template) = &args.template {
        draft.template = template.clone();
    }
    if let Some(version) = &args.version {
        draft.version = version.clone();
    }
    if let Some(owner) = &args.owner {
        draft.owner = owner.clone();
    }
    if let Some(status) = args.status {
        draft.status = status;
    }
    Ok(draft)
}

fn schema_draft(args: &DraftArgs, catalog: &Catalog) -> Result<SchemaDraft, Box<dyn Error>> {
    let mut draft = if let Some(group) = &args.new_version_of {
        SchemaDraft::new_version_of(locate(&catalog.schemas, group, args.at.as_deref())?)
    } else if let Some(group) = &args.edit {
        SchemaDraft::edit_of(locate(&catalog.schemas, group, args.at.as_deref())?)
    } else if args.from_existing {
        let name = args
            .name
            .as_deref()
            .ok_or("--from-existing needs --name for schemas")?;
        SchemaDraft::for_existing_name(catalog, name)
    } else {
        SchemaDraft::blank()
    };
    if let Some(name) = &args.name {
        draft.name = name.clone();
    }
    if let Some(path) = &args.definition {
        draft.definition = fs::read_to_string(path)?;
    }
    if let Some(version) = &args.version {
        draft.version = version.clone();
    }
    if let Some(owner) = &args.owner {
        draft.owner = owner.clone();
    }
    if let Some(status) = args.status {
        draft.status = status;
    }
    Ok(draft)
}

/// Finds the record of `group` at `at`, or its latest version.
fn locate<'a, R: Resource>(
    items: &'a [R],
    group: &str,
    at: Option<&str>,
) -> Result<&'a R, Box<dyn Error>> {
    let found = match at {
        Some(raw) => {
            let version = Version::parse(raw)?;
            items
                .iter()
                .find(|item| item.group_key() == group && *item.version() == version)
        }
        None => latest_per_group(items.iter().filter(|item| item.group_key() == group))
            .into_iter()
            .next(),
    };
    found.ok_or_else(|| {
        let at = at.map(|v| format!(" at {v}")).unwrap_or_default();
        format!("no {} {group}{at} in the catalog", R::KIND.label()).into()
    })
}
