//! Property tests for directory listing path handling.

use proptest::prelude::*;

use cops::domain::value_objects::{is_under_root, relative_to_root, SafePath};

fn relative_path_string() -> impl Strategy<Value = String> {
    let segment = proptest::string::string_regex("[A-Za-z0-9_-][A-Za-z0-9._-]{0,15}").unwrap();
    proptest::collection::vec(segment, 1..=4).prop_map(|segments| segments.join("/"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Joining a root and a relative path and deriving it back is lossless.
    #[test]
    fn property_relative_to_root_inverts_join(
        root in relative_path_string(),
        rel in relative_path_string(),
    ) {
        let entry = format!("{root}/{rel}");
        prop_assert!(is_under_root(&entry, &root));
        prop_assert_eq!(relative_to_root(&entry, &root), rel);
    }

    /// PROPERTY: A sibling that merely shares a name prefix is never under the root.
    #[test]
    fn property_sibling_prefix_is_not_under_root(
        root in relative_path_string(),
        suffix in "[a-z]{1,6}",
        rel in relative_path_string(),
    ) {
        let entry = format!("{root}{suffix}/{rel}");
        prop_assert!(!is_under_root(&entry, &root));
    }

    /// PROPERTY: Paths with a `..` segment are rejected.
    #[test]
    fn property_traversal_rejected(
        before in relative_path_string(),
        after in relative_path_string(),
    ) {
        let path = format!("{before}/../{after}");
        prop_assert!(SafePath::new(&path).is_err());
    }

    /// PROPERTY: Plain relative paths are accepted.
    #[test]
    fn property_plain_relative_paths_accepted(path in relative_path_string()) {
        prop_assert!(SafePath::new(&path).is_ok());
    }
}
