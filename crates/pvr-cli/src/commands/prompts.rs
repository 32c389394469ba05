use std::error::Error;

use clap::Args;
use pvr_core::Prompt;

use super::filters::{FilterArgs, PromptFilterArgs, SortArgs};
use crate::config::{OutputFormat, PvrConfig};
use crate::output::print_outcome;

#[derive(Args, Debug)]
pub struct PromptsArgs {
    #[command(flatten)]
    pub filters: FilterArgs,
    #[command(flatten)]
    pub prompt_filters: PromptFilterArgs,
    #[command(flatten)]
    pub sort: SortArgs,
    /// Output format; defaults to the configured format.
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

pub fn run(args: &PromptsArgs, config: &PvrConfig) -> Result<(), Box<dyn Error>> {
    let catalog = config.open_catalog()?;
    let filters = args.filters.to_spec(Some(&args.prompt_filters))?;
    let sort = args.sort.sort_spec::<Prompt>(config)?;
    let outcome = catalog.query_prompts(&filters, sort.as_ref());
    print_outcome(&outcome, args.format.unwrap_or(config.default_format), "prompts")
}
