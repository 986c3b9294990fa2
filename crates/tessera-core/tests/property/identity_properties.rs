use proptest::prelude::*;
use tessera_core::derive_id;

proptest! {
    #[test]
    fn derive_id_is_deterministic(
        uri in "[a-z]{2,8}://[a-z0-9/._-]{1,40}",
        start in 0u64..1_000_000,
        len in 0u64..10_000,
    ) {
        prop_assert_eq!(derive_id(&uri, start, start + len), derive_id(&uri, start, start + len));
    }

    #[test]
    fn different_ranges_of_same_source_get_different_ids(
        uri in "[a-z]{2,8}://[a-z0-9/._-]{1,40}",
        start in 0u64..1_000_000,
        len in 1u64..10_000,
        shift in 1u64..10_000,
    ) {
        let a = derive_id(&uri, start, start + len);
        let b = derive_id(&uri, start + shift, start + shift + len);
        prop_assert_ne!(a, b);
    }

    #[test]
    fn different_sources_same_range_get_different_ids(
        a in "[a-z]{1,20}",
        b in "[a-z]{1,20}",
        start in 0u64..1_000,
    ) {
        prop_assume!(a != b);
        prop_assert_ne!(derive_id(&a, start, start + 1), derive_id(&b, start, start + 1));
    }
}
