use std::hash::Hash;

use indexmap::map::Entry;
use indexmap::IndexMap;
use pvr_core::{Resource, Version, Versioned};

/// Keeps the highest-versioned item of every group.
///
/// Groups are emitted in the order their key was first seen. Within a group a
/// later item only replaces the current one when its version is strictly
/// greater, so on an exact tie the first item encountered wins. The returned
/// references point into `items`.
pub fn filter_latest_versions<'a, T, I, K, F>(items: I, mut group_key: F) -> Vec<&'a T>
where
    T: Versioned + 'a,
    I: IntoIterator<Item = &'a T>,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut latest: IndexMap<K, &'a T> = IndexMap::new();
    for item in items {
        match latest.entry(group_key(item)) {
            Entry::Occupied(mut current) => {
                if item.version() > current.get().version() {
                    current.insert(item);
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(item);
            }
        }
    }
    latest.into_values().collect()
}

/// [`filter_latest_versions`] keyed by each resource's own group key.
pub fn latest_per_group<'a, T, I>(items: I) -> Vec<&'a T>
where
    T: Resource + 'a,
    I: IntoIterator<Item = &'a T>,
{
    filter_latest_versions(items, T::group_key)
}

/// Highest version among the items accepted by `predicate`, or `1.0.0` when none are.
pub fn find_latest_version<'a, T, I, P>(items: I, mut predicate: P) -> Version
where
    T: Versioned + 'a,
    I: IntoIterator<Item = &'a T>,
    P: FnMut(&T) -> bool,
{
    items
        .into_iter()
        .filter(|item| predicate(item))
        .map(|item| *item.version())
        .max()
        .unwrap_or(Version::INITIAL)
}
