use std::cmp::Ordering;

use pvr_core::errors::{ErrorInfo, PvrError};
use pvr_core::{Field, FieldValue, Resource};
use serde::{Deserialize, Serialize};

/// Direction of a table sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Asc,
    /// Largest first.
    Desc,
}

/// How the `version` column is ordered when it is the sort key.
///
/// Tables historically compared versions as plain strings (`"1.10.0" < "1.9.0"`),
/// which disagrees with the numeric ordering used for latest-version selection.
/// `Lexical` keeps the table behaviour; `Semantic` opts into numeric ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionSort {
    /// Compare the rendered `MAJOR.MINOR.PATCH` strings.
    #[default]
    Lexical,
    /// Compare numeric components.
    Semantic,
}

/// A sort request over one record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    /// Field to order by.
    pub key: Field,
    /// Ordering direction.
    #[serde(default)]
    pub direction: SortDirection,
    /// Ordering used when `key` is the version.
    #[serde(default)]
    pub version_sort: VersionSort,
}

impl SortSpec {
    /// Ascending sort on `key`.
    pub fn ascending(key: Field) -> Self {
        Self {
            key,
            direction: SortDirection::Asc,
            version_sort: VersionSort::default(),
        }
    }

    /// Descending sort on `key`.
    pub fn descending(key: Field) -> Self {
        Self {
            key,
            direction: SortDirection::Desc,
            version_sort: VersionSort::default(),
        }
    }

    /// Replaces the version ordering.
    pub fn with_version_sort(mut self, version_sort: VersionSort) -> Self {
        self.version_sort = version_sort;
        self
    }

    /// Builds a spec from a field name, rejecting fields `R` does not expose.
    pub fn parse_for<R: Resource>(key: &str, direction: SortDirection) -> Result<Self, PvrError> {
        let field = Field::parse(key).ok_or_else(|| unknown_key::<R>(key))?;
        let spec = Self {
            key: field,
            direction,
            version_sort: VersionSort::default(),
        };
        spec.validate_for::<R>()?;
        Ok(spec)
    }

    /// Checks that `R` exposes the sort key.
    pub fn validate_for<R: Resource>(&self) -> Result<(), PvrError> {
        if R::FIELDS.contains(&self.key) {
            Ok(())
        } else {
            Err(unknown_key::<R>(self.key.as_str()))
        }
    }

    /// Compares two records under this spec, direction included.
    pub fn compare<R: Resource>(&self, a: &R, b: &R) -> Ordering {
        let ordering = match (a.field(self.key), b.field(self.key)) {
            (Some(left), Some(right)) => self.compare_values(left, right),
            _ => Ordering::Equal,
        };
        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }

    fn compare_values(&self, left: FieldValue<'_>, right: FieldValue<'_>) -> Ordering {
        match (left, right) {
            (FieldValue::Version(l), FieldValue::Version(r)) => match self.version_sort {
                VersionSort::Semantic => l.cmp(&r),
                VersionSort::Lexical => l.to_string().cmp(&r.to_string()),
            },
            (FieldValue::Absent, FieldValue::Absent) => Ordering::Equal,
            (FieldValue::Absent, _) => Ordering::Less,
            (_, FieldValue::Absent) => Ordering::Greater,
            (l, r) => l.render().cmp(&r.render()),
        }
    }

    /// Stable in-place sort; records with equal keys keep their relative order.
    pub fn apply<R: Resource>(&self, items: &mut [&R]) {
        items.sort_by(|a, b| self.compare(*a, *b));
    }
}

fn unknown_key<R: Resource>(key: &str) -> PvrError {
    let allowed = R::FIELDS
        .iter()
        .map(Field::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    PvrError::Query(
        ErrorInfo::new(
            "pvr_query.unknown_sort_key",
            format!("cannot sort {} records by '{key}'", R::KIND.label().to_lowercase()),
        )
        .with_context("key", key)
        .with_hint(format!("sortable fields: {allowed}")),
    )
}

/// Column-header sort state of a resource table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortState {
    current: Option<SortSpec>,
}

impl SortState {
    /// Creates an unsorted state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Active sort, if any.
    pub fn current(&self) -> Option<&SortSpec> {
        self.current.as_ref()
    }

    /// Registers a header click on `key`.
    ///
    /// Clicking the active key while ascending flips to descending; any other
    /// click sorts ascending on `key`.
    pub fn request(&mut self, key: Field) -> &SortSpec {
        let version_sort = self
            .current
            .map(|spec| spec.version_sort)
            .unwrap_or_default();
        let direction = match self.current {
            Some(spec) if spec.key == key && spec.direction == SortDirection::Asc => {
                SortDirection::Desc
            }
            _ => SortDirection::Asc,
        };
        self.current.insert(SortSpec {
            key,
            direction,
            version_sort,
        })
    }

    /// Clears the active sort.
    pub fn clear(&mut self) {
        self.current = None;
    }
}
