#![deny(missing_docs)]
#![doc = "Query engine over versioned prompts and schemas: version ordering, latest-version reduction and filter/sort evaluation."]

/// Combined filter and sort evaluation.
pub mod engine;
/// Filter specifications and per-record decisions.
pub mod filter;
/// Latest-version-per-group reduction.
pub mod latest;
/// Distinct field values for filter choices.
pub mod options;
/// Sort specifications and header toggle state.
pub mod sort;
/// Lenient helpers over raw version strings.
pub mod version;

pub use engine::{evaluate, QueryOutcome};
pub use filter::{load_filters, FilterDecision, FilterSpec};
pub use latest::{filter_latest_versions, find_latest_version, latest_per_group};
pub use options::unique_values;
pub use sort::{SortDirection, SortSpec, SortState, VersionSort};
pub use version::{compare_version_strings, next_patch_version};
