mod common;

use std::fs;

use pvr_core::PvrError;
use pvr_registry::{ingest_bytes, load_catalog, load_catalog_with, CatalogFormat, IngestOptions};
use tempfile::tempdir;

#[test]
fn malformed_version_fails_with_record_context() {
    let err = ingest_bytes(
        common::CATALOG_JSON.as_bytes(),
        CatalogFormat::Json,
        &IngestOptions::default(),
    )
    .expect_err("1.1 is not a full version");
    assert!(matches!(err, PvrError::Version(_)));
    let info = err.info();
    assert_eq!(info.code, "pvr_core.malformed_version");
    assert_eq!(info.context.get("record").map(String::as_str), Some("prompts[1]"));
    assert_eq!(
        info.context.get("identity").map(String::as_str),
        Some("qa-customer-support")
    );
    assert_eq!(info.context.get("input").map(String::as_str), Some("1.1"));
}

#[test]
fn lenient_ingest_collects_rejections() {
    let opts = IngestOptions { skip_invalid: true };
    let report = ingest_bytes(common::CATALOG_JSON.as_bytes(), CatalogFormat::Json, &opts)
        .expect("lenient ingest");
    assert_eq!(report.catalog.prompts.len(), 1);
    assert_eq!(report.catalog.schemas.len(), 1);
    assert_eq!(report.rejected.len(), 1);
    assert_eq!(
        report.catalog.schemas[0].owner.as_deref(),
        Some("data-team")
    );
}

#[test]
fn yaml_catalog_loads_from_disk() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("catalog.yaml");
    fs::write(
        &path,
        "prompts:\n  - version: 1.2.3\n    bump: patch\n    status: stable\n    member: jane.smith\n    type: summary\n    template: Summarize {{input}}\n    agent: data-analyst\n",
    )
    .expect("write catalog");
    let catalog = load_catalog(&path).expect("load");
    assert_eq!(catalog.prompts.len(), 1);
    assert!(catalog.schemas.is_empty());
    assert_eq!(catalog.prompts[0].version.to_string(), "1.2.3");
}

#[test]
fn unknown_extension_is_rejected() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("catalog.toml");
    fs::write(&path, "").expect("write");
    let err = load_catalog_with(&path, &IngestOptions::default()).expect_err("toml");
    assert_eq!(err.info().code, "pvr_registry.catalog_format");
}

#[test]
fn missing_file_reports_read_error() {
    let dir = tempdir().expect("tempdir");
    let err = load_catalog(&dir.path().join("absent.json")).expect_err("missing");
    assert!(matches!(err, PvrError::Catalog(_)));
    assert_eq!(err.info().code, "pvr_registry.catalog_read");
}

#[test]
fn content_hash_tracks_catalog_content() {
    let a = common::catalog();
    let mut b = common::catalog();
    assert_eq!(a.content_hash().unwrap(), b.content_hash().unwrap());
    b.prompts.pop();
    assert_ne!(a.content_hash().unwrap(), b.content_hash().unwrap());
}
