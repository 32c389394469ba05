use std::cmp::Ordering;

/// Compares two raw version strings component by component.
///
/// Unlike [`pvr_core::Version::parse`] this never fails. An empty component
/// (`"1..5"`) counts as 0. A component that is missing or non-numeric on
/// either side is treated as incomparable and the comparison falls through to
/// the next component, so `"2.0"` and `"2.0.7"` compare equal.
pub fn compare_version_strings(a: &str, b: &str) -> Ordering {
    let left = lenient_components(a);
    let right = lenient_components(b);
    for (l, r) in left.iter().zip(right.iter()) {
        if let (Some(l), Some(r)) = (l, r) {
            match l.cmp(r) {
                Ordering::Equal => continue,
                other => return other,
            }
        }
    }
    Ordering::Equal
}

/// Suggests the next patch version for a raw version string.
///
/// The patch component is parsed from its leading digits and incremented; a
/// missing or unparseable patch counts as 0, and one too large for `u64`
/// saturates. Major and minor text is kept
/// verbatim, and a missing major or minor is rendered as `0`.
pub fn next_patch_version(version: &str) -> String {
    let mut parts = version.split('.');
    let major = parts.next().filter(|part| !part.is_empty()).unwrap_or("0");
    let minor = parts.next().filter(|part| !part.is_empty()).unwrap_or("0");
    let patch = parts
        .next()
        .and_then(leading_integer)
        .unwrap_or(0)
        .saturating_add(1);
    format!("{major}.{minor}.{patch}")
}

fn lenient_components(input: &str) -> [Option<u64>; 3] {
    let mut components = [None; 3];
    for (slot, part) in components.iter_mut().zip(input.split('.')) {
        let part = part.trim();
        *slot = if part.is_empty() {
            Some(0)
        } else {
            part.parse().ok()
        };
    }
    components
}

fn leading_integer(part: &str) -> Option<u64> {
    let trimmed = part.trim_start();
    let digits = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .map_or(trimmed, |end| &trimmed[..end]);
    if digits.is_empty() {
        return None;
    }
    Some(digits.parse().unwrap_or(u64::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_component_order() {
        assert_eq!(compare_version_strings("1.9.0", "1.10.0"), Ordering::Less);
        assert_eq!(compare_version_strings("10.0.0", "9.0.0"), Ordering::Greater);
        assert_eq!(compare_version_strings("1.2.3", "1.2.3"), Ordering::Equal);
    }

    #[test]
    fn missing_components_fall_through() {
        assert_eq!(compare_version_strings("2.0", "2.0.7"), Ordering::Equal);
        assert_eq!(compare_version_strings("1.x.5", "1.3.4"), Ordering::Greater);
    }

    #[test]
    fn empty_component_counts_as_zero() {
        assert_eq!(compare_version_strings("1..5", "1.3.0"), Ordering::Less);
        assert_eq!(compare_version_strings("1..0", "1.0.0"), Ordering::Equal);
    }

    #[test]
    fn oversized_patch_saturates() {
        assert_eq!(
            next_patch_version("1.2.99999999999999999999999"),
            "1.2.18446744073709551615"
        );
        assert_eq!(next_patch_version("1.2.x"), "1.2.1");
    }

    #[test]
    fn next_patch_examples() {
        assert_eq!(next_patch_version("1.2.3"), "1.2.4");
        assert_eq!(next_patch_version("2.0"), "2.0.1");
        assert_eq!(next_patch_version("0.9.19"), "0.9.20");
        assert_eq!(next_patch_version("3.1.7-beta"), "3.1.8");
        assert_eq!(next_patch_version("4"), "4.0.1");
    }
}
