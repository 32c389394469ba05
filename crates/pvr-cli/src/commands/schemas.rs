use std::error::Error;

use clap::Args;
use pvr_core::Schema;

use super::filters::{FilterArgs, SortArgs};
use crate::config::{OutputFormat, PvrConfig};
use crate::output::print_outcome;

#[derive(Args, Debug)]
pub struct SchemasArgs {
    #[command(flatten)]
    pub filters: FilterArgs,
    #[command(flatten)]
    pub sort: SortArgs,
    /// Output format; defaults to the configured format.
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

pub fn run(args: &SchemasArgs, config: &PvrConfig) -> Result<(), Box<dyn Error>> {
    let catalog = config.open_catalog()?;
    let filters = args.filters.to_spec(None)?;
    let sort = args.sort.sort_spec::<Schema>(config)?;
    let outcome = catalog.query_schemas(&filters, sort.as_ref());
    print_outcome(&outcome, args.format.unwrap_or(config.default_format), "schemas")
}
