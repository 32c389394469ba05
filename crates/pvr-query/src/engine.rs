use pvr_core::Resource;
use serde::Serialize;

use crate::filter::FilterSpec;
use crate::latest::latest_per_group;
use crate::sort::SortSpec;

/// Result of a table query. Items borrow from the evaluated collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryOutcome<'a, T> {
    /// Matching records in output order.
    pub items: Vec<&'a T>,
    /// Number of records examined.
    pub scanned: usize,
    /// Whether any filter constrained the result.
    pub constrained: bool,
}

impl<'a, T> QueryOutcome<'a, T> {
    /// Number of matching records.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when no record matched.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True when filters were applied and excluded every record.
    pub fn matched_nothing(&self) -> bool {
        self.constrained && self.items.is_empty()
    }

    /// Iterates over the matching records.
    pub fn iter(&self) -> impl Iterator<Item = &'a T> + '_ {
        self.items.iter().copied()
    }
}

impl<T: Clone> QueryOutcome<'_, T> {
    /// Clones the matching records out of the source collection.
    pub fn to_owned_items(&self) -> Vec<T> {
        self.items.iter().map(|item| (*item).clone()).collect()
    }
}

/// Filters, reduces and sorts `items`.
///
/// Record predicates run first, then the latest-version reduction when
/// `filters.latest_only` is set, then the optional stable sort. `items` is
/// never modified.
pub fn evaluate<'a, T: Resource>(
    items: &'a [T],
    filters: &FilterSpec,
    sort: Option<&SortSpec>,
) -> QueryOutcome<'a, T> {
    let matched = items.iter().filter(|item| filters.matches(*item));
    let mut selected: Vec<&'a T> = if filters.latest_only {
        latest_per_group(matched)
    } else {
        matched.collect()
    };
    if let Some(spec) = sort {
        spec.apply(&mut selected);
    }
    tracing::debug!(
        kind = T::KIND.label(),
        scanned = items.len(),
        matched = selected.len(),
        latest_only = filters.latest_only,
        sort = sort.map(|spec| spec.key.as_str()),
        "evaluated resource query"
    );
    QueryOutcome {
        items: selected,
        scanned: items.len(),
        constrained: !filters.is_unconstrained(),
    }
}
