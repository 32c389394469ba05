use std::fs;
use std::path::Path;

use pvr_core::errors::{ErrorInfo, PvrError};
use pvr_core::serde::to_canonical_json_bytes;
use pvr_core::{Prompt, Schema};
use serde::Serialize;

/// Row layout used by [`export_csv`].
pub trait CsvRecord {
    const HEADER: &'static [&'static str];

    fn csv_row(&self) -> Vec<String>;
}

impl CsvRecord for Prompt {
    const HEADER: &'static [&'static str] =
        &["type", "agent", "version", "bump", "status", "member", "owner"];

    fn csv_row(&self) -> Vec<String> {
        vec![
            self.prompt_type.clone(),
            self.agent.clone(),
            self.version.to_string(),
            self.bump.to_string(),
            self.status.to_string(),
            self.member.clone(),
            self.owner.clone().unwrap_or_default(),
        ]
    }
}

impl CsvRecord for Schema {
    const HEADER: &'static [&'static str] =
        &["name", "version", "bump", "status", "member", "owner"];

    fn csv_row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.version.to_string(),
            self.bump.to_string(),
            self.status.to_string(),
            self.member.clone(),
            self.owner.clone().unwrap_or_default(),
        ]
    }
}

fn export_error(err: impl ToString, out_path: &Path) -> PvrError {
    PvrError::Serde(
        ErrorInfo::new("pvr_registry.export", err.to_string())
            .with_context("path", out_path.display().to_string()),
    )
}

/// Writes any serializable value (usually a query outcome) as canonical JSON.
pub fn export_json<T: Serialize>(value: &T, out_path: &Path) -> Result<(), PvrError> {
    let bytes = to_canonical_json_bytes(value)?;
    fs::write(out_path, bytes).map_err(|err| export_error(err, out_path))?;
    tracing::info!(path = %out_path.display(), "exported json");
    Ok(())
}

/// Writes one row per record after a header row.
pub fn export_csv<'a, R, I>(records: I, out_path: &Path) -> Result<usize, PvrError>
where
    R: CsvRecord + 'a,
    I: IntoIterator<Item = &'a R>,
{
    let mut wtr = csv::Writer::from_path(out_path).map_err(|err| export_error(err, out_path))?;
    wtr.write_record(R::HEADER)
        .map_err(|err| export_error(err, out_path))?;
    let mut rows = 0;
    for record in records {
        wtr.write_record(record.csv_row())
            .map_err(|err| export_error(err, out_path))?;
        rows += 1;
    }
    wtr.flush().map_err(|err| export_error(err, out_path))?;
    tracing::info!(path = %out_path.display(), rows, "exported csv");
    Ok(rows)
}
