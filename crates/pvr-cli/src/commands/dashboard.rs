use std::error::Error;

use clap::Args;
use pvr_registry::DashboardSummary;

use super::filters::{FilterArgs, PromptFilterArgs};
use crate::config::PvrConfig;
use crate::output::print_json;

#[derive(Args, Debug)]
pub struct DashboardArgs {
    #[command(flatten)]
    pub filters: FilterArgs,
    #[command(flatten)]
    pub prompt_filters: PromptFilterArgs,
}

pub fn run(args: &DashboardArgs, config: &PvrConfig) -> Result<(), Box<dyn Error>> {
    let catalog = config.open_catalog()?;
    let filters = args.filters.to_spec(Some(&args.prompt_filters))?;
    let summary = DashboardSummary::build(&catalog, &filters);
    print_json(&summary)
}
