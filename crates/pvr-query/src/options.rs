use indexmap::IndexSet;
use pvr_core::{Field, FieldValue, Resource};

/// Distinct values of `field` in first-seen order.
///
/// Unset optional values and fields the resource does not carry are skipped.
pub fn unique_values<T: Resource>(items: &[T], field: Field) -> Vec<String> {
    let mut seen = IndexSet::new();
    for item in items {
        match item.field(field) {
            Some(FieldValue::Absent) | None => {}
            Some(value) => {
                seen.insert(value.render().into_owned());
            }
        }
    }
    seen.into_iter().collect()
}
