use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use pvr_core::errors::{ErrorInfo, PvrError};
use pvr_core::serde::from_yaml_slice;
use pvr_query::VersionSort;
use pvr_registry::{load_catalog, Catalog, MockCatalog, MockOptions};
use serde::{Deserialize, Serialize};

/// How listings are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

/// YAML-configurable defaults for every command. Flags override file values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PvrConfig {
    /// Catalog file (JSON or YAML). A mock catalog is generated when absent.
    #[serde(default)]
    pub catalog: Option<PathBuf>,
    /// Seed for the mock catalog.
    #[serde(default)]
    pub seed: u64,
    #[serde(default = "default_mock_size")]
    pub mock_prompts: usize,
    #[serde(default = "default_mock_size")]
    pub mock_schemas: usize,
    /// Order versions numerically instead of by their rendered text.
    #[serde(default)]
    pub semantic_version_sort: bool,
    #[serde(default)]
    pub default_format: OutputFormat,
}

fn default_mock_size() -> usize {
    50
}

impl Default for PvrConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            seed: 0,
            mock_prompts: default_mock_size(),
            mock_schemas: default_mock_size(),
            semantic_version_sort: false,
            default_format: OutputFormat::Table,
        }
    }
}

impl PvrConfig {
    pub fn load(path: &Path) -> Result<Self, PvrError> {
        let bytes = fs::read(path).map_err(|err| {
            PvrError::Catalog(
                ErrorInfo::new("pvr_cli.config_read", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        from_yaml_slice(&bytes).map_err(|err| err.with_context("path", path.display().to_string()))
    }

    pub fn version_sort(&self) -> VersionSort {
        if self.semantic_version_sort {
            VersionSort::Semantic
        } else {
            VersionSort::Lexical
        }
    }

    pub fn mock_options(&self) -> MockOptions {
        MockOptions {
            seed: self.seed,
            prompts: self.mock_prompts,
            schemas: self.mock_schemas,
        }
    }

    /// Loads the configured catalog file, or generates the mock catalog.
    pub fn open_catalog(&self) -> Result<Catalog, PvrError> {
        match &self.catalog {
            Some(path) => load_catalog(path),
            None => {
                tracing::info!(seed = self.seed, "no catalog configured, using mock data");
                Ok(MockCatalog::generate(&self.mock_options()))
            }
        }
    }
}
