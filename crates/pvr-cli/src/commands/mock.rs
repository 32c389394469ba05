use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Args;
use pvr_core::serde::to_yaml_string;
use pvr_registry::{CatalogFormat, MockCatalog};
use serde_json::json;

use crate::config::PvrConfig;
use crate::output::print_json;
use crate::write_json;

#[derive(Args, Debug)]
pub struct MockArgs {
    /// Catalog file to write; `.json`, `.yaml` or `.yml`.
    #[arg(long)]
    pub out: PathBuf,
    /// Number of prompts; defaults to the configured count.
    #[arg(long)]
    pub prompts: Option<usize>,
    /// Number of schemas; defaults to the configured count.
    #[arg(long)]
    pub schemas: Option<usize>,
}

pub fn run(args: &MockArgs, config: &PvrConfig) -> Result<(), Box<dyn Error>> {
    let format = CatalogFormat::from_path(&args.out)?;
    let mut opts = config.mock_options();
    if let Some(prompts) = args.prompts {
        opts.prompts = prompts;
    }
    if let Some(schemas) = args.schemas {
        opts.schemas = schemas;
    }
    let catalog = MockCatalog::generate(&opts);
    match format {
        CatalogFormat::Json => write_json(&args.out, &catalog)?,
        CatalogFormat::Yaml => {
            if let Some(parent) = args.out.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&args.out, to_yaml_string(&catalog)?)?;
        }
    }
    let content_hash = catalog.content_hash()?;
    tracing::info!(path = %args.out.display(), hash = %content_hash.short(), "wrote mock catalog");
    print_json(&json!({
        "path": args.out.display().to_string(),
        "seed": opts.seed,
        "prompts": catalog.prompts.len(),
        "schemas": catalog.schemas.len(),
        "content_hash": content_hash,
    }))
}
