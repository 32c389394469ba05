use std::fs;
use std::path::Path;

use pvr_core::errors::{ErrorInfo, PvrError};
use pvr_core::serde::{from_json_slice, from_yaml_slice};
use pvr_core::{Bump, Prompt, Schema, Status, Version};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::Catalog;

/// On-disk encodings accepted for catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogFormat {
    Json,
    Yaml,
}

impl CatalogFormat {
    /// Picks the format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self, PvrError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            other => Err(catalog_error(
                "pvr_registry.catalog_format",
                format!("unsupported catalog extension {:?}", other.unwrap_or("")),
            )
            .with_context("path", path.display().to_string())),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct IngestOptions {
    /// Drop records with malformed versions instead of failing the whole load.
    pub skip_invalid: bool,
}

/// Validated catalog plus the records rejected in lenient mode.
#[derive(Debug, Clone, PartialEq)]
pub struct IngestReport {
    pub catalog: Catalog,
    pub rejected: Vec<ErrorInfo>,
}

#[derive(Debug, Deserialize)]
struct RawPrompt {
    version: String,
    bump: Bump,
    status: Status,
    member: String,
    #[serde(default)]
    owner: Option<String>,
    #[serde(rename = "type")]
    prompt_type: String,
    template: String,
    agent: String,
}

#[derive(Debug, Deserialize)]
struct RawSchema {
    version: String,
    bump: Bump,
    status: Status,
    member: String,
    #[serde(default)]
    owner: Option<String>,
    name: String,
    definition: Value,
}

#[derive(Debug, Deserialize)]
struct RawCatalog {
    #[serde(default)]
    prompts: Vec<RawPrompt>,
    #[serde(default)]
    schemas: Vec<RawSchema>,
}

fn catalog_error(code: &str, err: impl ToString) -> PvrError {
    PvrError::Catalog(ErrorInfo::new(code, err.to_string()))
}

/// Reads and validates a catalog file, failing on the first malformed version.
pub fn load_catalog(path: &Path) -> Result<Catalog, PvrError> {
    load_catalog_with(path, &IngestOptions::default()).map(|report| report.catalog)
}

/// Reads and validates a catalog file.
pub fn load_catalog_with(path: &Path, opts: &IngestOptions) -> Result<IngestReport, PvrError> {
    let format = CatalogFormat::from_path(path)?;
    let bytes = fs::read(path).map_err(|err| {
        catalog_error(
            "pvr_registry.catalog_read",
            format!("failed to read {}: {err}", path.display()),
        )
    })?;
    let report = ingest_bytes(&bytes, format, opts)
        .map_err(|err| err.with_context("path", path.display().to_string()))?;
    tracing::info!(
        path = %path.display(),
        prompts = report.catalog.prompts.len(),
        schemas = report.catalog.schemas.len(),
        rejected = report.rejected.len(),
        "loaded catalog"
    );
    Ok(report)
}

/// Parses and validates catalog bytes in the given format.
pub fn ingest_bytes(
    bytes: &[u8],
    format: CatalogFormat,
    opts: &IngestOptions,
) -> Result<IngestReport, PvrError> {
    let RawCatalog {
        prompts: raw_prompts,
        schemas: raw_schemas,
    } = match format {
        CatalogFormat::Json => from_json_slice::<RawCatalog>(bytes)?,
        CatalogFormat::Yaml => from_yaml_slice::<RawCatalog>(bytes)?,
    };
    let mut rejected = Vec::new();

    let mut prompts = Vec::with_capacity(raw_prompts.len());
    for (idx, raw) in raw_prompts.into_iter().enumerate() {
        let identity = format!("{}-{}", raw.prompt_type, raw.agent);
        match validate_version(&raw.version, &format!("prompts[{idx}]"), &identity) {
            Ok(version) => prompts.push(Prompt {
                version,
                bump: raw.bump,
                status: raw.status,
                member: raw.member,
                owner: raw.owner,
                prompt_type: raw.prompt_type,
                template: raw.template,
                agent: raw.agent,
            }),
            Err(err) => reject(err, opts, &mut rejected)?,
        }
    }

    let mut schemas = Vec::with_capacity(raw_schemas.len());
    for (idx, raw) in raw_schemas.into_iter().enumerate() {
        match validate_version(&raw.version, &format!("schemas[{idx}]"), &raw.name) {
            Ok(version) => schemas.push(Schema {
                version,
                bump: raw.bump,
                status: raw.status,
                member: raw.member,
                owner: raw.owner,
                name: raw.name,
                definition: raw.definition,
            }),
            Err(err) => reject(err, opts, &mut rejected)?,
        }
    }

    Ok(IngestReport {
        catalog: Catalog::new(prompts, schemas),
        rejected,
    })
}

fn validate_version(raw: &str, record: &str, identity: &str) -> Result<Version, PvrError> {
    Version::parse(raw).map_err(|err| {
        err.with_context("record", record)
            .with_context("identity", identity)
    })
}

fn reject(
    err: PvrError,
    opts: &IngestOptions,
    rejected: &mut Vec<ErrorInfo>,
) -> Result<(), PvrError> {
    if !opts.skip_invalid {
        return Err(err);
    }
    tracing::warn!(error = %err, "skipping catalog record");
    rejected.push(err.info().clone());
    Ok(())
}
