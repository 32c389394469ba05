use std::error::Error;
use std::path::PathBuf;

use clap::{Args, ValueEnum};
use pvr_core::{Prompt, Schema};
use pvr_registry::{export_csv, export_json};

use super::filters::{FilterArgs, PromptFilterArgs, SortArgs};
use crate::config::PvrConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportKind {
    Prompts,
    Schemas,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    #[arg(long, value_enum)]
    pub kind: ExportKind,
    /// Destination file.
    #[arg(long)]
    pub out: PathBuf,
    /// Write CSV rows instead of canonical JSON.
    #[arg(long)]
    pub csv: bool,
    #[command(flatten)]
    pub filters: FilterArgs,
    #[command(flatten)]
    pub prompt_filters: PromptFilterArgs,
    #[command(flatten)]
    pub sort: SortArgs,
}

pub fn run(args: &ExportArgs, config: &PvrConfig) -> Result<(), Box<dyn Error>> {
    let catalog = config.open_catalog()?;
    match args.kind {
        ExportKind::Prompts => {
            let filters = args.filters.to_spec(Some(&args.prompt_filters))?;
            let sort = args.sort.sort_spec::<Prompt>(config)?;
            let outcome = catalog.query_prompts(&filters, sort.as_ref());
            if args.csv {
                export_csv(outcome.iter(), &args.out)?;
            } else {
                export_json(&outcome, &args.out)?;
            }
        }
        ExportKind::Schemas => {
            let filters = args.filters.to_spec(None)?;
            let sort = args.sort.sort_spec::<Schema>(config)?;
            let outcome = catalog.query_schemas(&filters, sort.as_ref());
            if args.csv {
                export_csv(outcome.iter(), &args.out)?;
            } else {
                export_json(&outcome, &args.out)?;
            }
        }
    }
    Ok(())
}
