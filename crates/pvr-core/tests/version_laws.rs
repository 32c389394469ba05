use std::cmp::Ordering;

use proptest::prelude::*;
use pvr_core::Version;

fn version() -> impl Strategy<Value = Version> {
    (0u64..20, 0u64..20, 0u64..40).prop_map(|(major, minor, patch)| Version::new(major, minor, patch))
}

proptest! {
    #[test]
    fn compare_is_antisymmetric(a in version(), b in version()) {
        prop_assert_eq!(a.compare(&b), -b.compare(&a));
    }

    #[test]
    fn compare_is_reflexive(a in version()) {
        prop_assert_eq!(a.compare(&a), 0);
    }

    #[test]
    fn compare_is_transitive(a in version(), b in version(), c in version()) {
        if a.compare(&b) <= 0 && b.compare(&c) <= 0 {
            prop_assert!(a.compare(&c) <= 0);
        }
    }

    #[test]
    fn display_parses_back(a in version()) {
        prop_assert_eq!(Version::parse(&a.to_string()).unwrap(), a);
    }

    #[test]
    fn next_patch_is_strictly_greater(a in version()) {
        let next = a.next_patch();
        prop_assert_eq!(next.cmp(&a), Ordering::Greater);
        prop_assert_eq!((next.major, next.minor), (a.major, a.minor));
    }
}
