//! Property tests for reference parsing.

use proptest::prelude::*;

use cops::domain::value_objects::AssetRef;

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9._-]{1,12}").unwrap()
}

fn repo_path() -> impl Strategy<Value = String> {
    proptest::collection::vec(segment(), 1..=4).prop_map(|segments| segments.join("/"))
}

fn git_ref() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9._/-]{1,20}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: `parse(raw(r)) == r` for every well-formed reference.
    #[test]
    fn property_parse_and_raw_are_inverses(
        org in segment(),
        repo in segment(),
        path in repo_path(),
        reference in git_ref(),
    ) {
        let raw = format!("{org}/{repo}/{path}@{reference}");
        let parsed = AssetRef::parse(&raw).unwrap();

        prop_assert_eq!(parsed.org(), org.as_str());
        prop_assert_eq!(parsed.repo(), repo.as_str());
        prop_assert_eq!(parsed.path(), path.as_str());
        prop_assert_eq!(parsed.git_ref(), reference.as_str());
        prop_assert_eq!(parsed.raw(), raw);
    }

    /// PROPERTY: Parsing arbitrary input never panics.
    #[test]
    fn property_parse_never_panics(raw in ".{0,64}") {
        let _ = AssetRef::parse(&raw);
    }

    /// PROPERTY: A second `@` is always rejected.
    #[test]
    fn property_two_at_signs_rejected(
        path in repo_path(),
        a in git_ref(),
        b in git_ref(),
    ) {
        let raw = format!("org/repo/{path}@{a}@{b}");
        prop_assert!(AssetRef::parse(&raw).is_err());
    }

    /// PROPERTY: Fewer than three location segments are rejected.
    #[test]
    fn property_short_locations_rejected(org in segment(), repo in segment(), reference in git_ref()) {
        let one = format!("{org}@{reference}");
        let two = format!("{org}/{repo}@{reference}");
        prop_assert!(AssetRef::parse(&one).is_err());
        prop_assert!(AssetRef::parse(&two).is_err());
    }
}
