//! Property tests for content checksums.

use std::collections::BTreeMap;

use proptest::prelude::*;

use cops::domain::value_objects::ContentHash;

fn files() -> impl Strategy<Value = BTreeMap<String, Vec<u8>>> {
    proptest::collection::btree_map(
        proptest::string::string_regex("[a-z]{1,6}(/[a-z]{1,6}){0,2}\\.md").unwrap(),
        proptest::collection::vec(any::<u8>(), 0..64),
        1..6,
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The aggregate ignores the order files are supplied in.
    #[test]
    fn property_aggregate_is_order_independent(files in files()) {
        let forward = ContentHash::aggregate(files.iter());
        let reversed = ContentHash::aggregate(files.iter().rev());
        prop_assert_eq!(forward, reversed);
    }

    /// PROPERTY: The aggregate equals the hash of contents concatenated in path order.
    #[test]
    fn property_aggregate_hashes_concatenation(files in files()) {
        let concatenated: Vec<u8> = files.values().flatten().copied().collect();
        prop_assert_eq!(
            ContentHash::aggregate(files.iter()),
            ContentHash::from_bytes(&concatenated)
        );
    }

    /// PROPERTY: Digests are 64 lowercase hex characters.
    #[test]
    fn property_digest_is_lowercase_hex(content in proptest::collection::vec(any::<u8>(), 0..256)) {
        let hash = ContentHash::from_bytes(&content);
        prop_assert_eq!(hash.as_str().len(), 64);
        prop_assert!(hash.as_str().chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }
}
