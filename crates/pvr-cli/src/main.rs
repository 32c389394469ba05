use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args as ClapArgs, Parser, Subcommand};
use commands::{
    compare::{self, CompareArgs},
    dashboard::{self, DashboardArgs},
    draft::{self, DraftArgs},
    export::{self, ExportArgs},
    mock::{self, MockArgs},
    next_version::{self, NextVersionArgs},
    options,
    prompts::{self, PromptsArgs},
    schemas::{self, SchemasArgs},
};
use config::PvrConfig;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod output;

const DEFAULT_LOG_FILTER: &str = "pvr_cli=info,pvr_registry=info,pvr_query=info";

#[derive(Parser, Debug)]
#[command(name = "pvr", about = "Prompt and schema version registry CLI")]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,
    #[command(subcommand)]
    command: Command,
}

#[derive(ClapArgs, Debug)]
struct GlobalArgs {
    /// YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Catalog file (JSON or YAML); overrides the configured catalog.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    /// Seed for the mock catalog used when no catalog file is given.
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List prompts matching the filters.
    Prompts(PromptsArgs),
    /// List schemas matching the filters.
    Schemas(SchemasArgs),
    /// Summarise counts by type, agent and status.
    Dashboard(DashboardArgs),
    /// Compare two version strings, printing -1, 0 or 1.
    Compare(CompareArgs),
    /// Print the next patch version.
    NextVersion(NextVersionArgs),
    /// Validate a create, new-version or edit draft and print the submission.
    Draft(DraftArgs),
    /// Export filtered prompts or schemas to JSON or CSV.
    Export(ExportArgs),
    /// Write a generated mock catalog.
    Mock(MockArgs),
    /// List distinct member, agent, type and schema-name values.
    Options,
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();
    let cli = Cli::parse();
    let result = dispatch(&cli);
    if let Err(err) = &result {
        tracing::error!(error = %err, "command failed");
    }
    result
}

fn dispatch(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let config = resolve_config(&cli.global)?;
    match &cli.command {
        Command::Prompts(args) => prompts::run(args, &config),
        Command::Schemas(args) => schemas::run(args, &config),
        Command::Dashboard(args) => dashboard::run(args, &config),
        Command::Compare(args) => compare::run(args),
        Command::NextVersion(args) => next_version::run(args),
        Command::Draft(args) => draft::run(args, &config),
        Command::Export(args) => export::run(args, &config),
        Command::Mock(args) => mock::run(args, &config),
        Command::Options => options::run(&config),
    }
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_config(global: &GlobalArgs) -> Result<PvrConfig, Box<dyn Error>> {
    let mut config = match &global.config {
        Some(path) => PvrConfig::load(path)?,
        None => PvrConfig::default(),
    };
    if let Some(catalog) = &global.catalog {
        config.catalog = Some(catalog.clone());
    }
    if let Some(seed) = global.seed {
        config.seed = seed;
    }
    Ok(config)
}

pub(crate) fn write_json<P: AsRef<Path>, T: serde::Serialize>(
    path: P,
    value: &T,
) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.as_ref().parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}
