//! In-memory registry of versioned prompts and schemas.

pub mod catalog;
pub mod dashboard;
pub mod drafts;
pub mod export;
pub mod ingest;
pub mod mock;

pub use catalog::{Catalog, FilterOptions};
pub use dashboard::{CountEntry, DashboardSummary, StatusCounts};
pub use drafts::{DraftBase, DraftKind, Notice, PromptDraft, SchemaDraft, Submission};
pub use export::{export_csv, export_json, CsvRecord};
pub use ingest::{
    ingest_bytes, load_catalog, load_catalog_with, CatalogFormat, IngestOptions, IngestReport,
};
pub use mock::{MockCatalog, MockOptions};
