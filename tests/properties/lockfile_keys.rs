//! Property tests for lockfile key formatting/parsing.

use proptest::prelude::*;

use cops::domain::entities::Lockfile;
use cops::domain::value_objects::AssetType;

fn asset_type() -> impl Strategy<Value = AssetType> {
    prop_oneof![
        Just(AssetType::Instructions),
        Just(AssetType::Agents),
        Just(AssetType::Prompts),
        Just(AssetType::Skills),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: `parse_key(make_key(t, n))` always returns `(t, n)`.
    #[test]
    fn property_lockfile_key_round_trips(
        asset_type in asset_type(),
        name in "[A-Za-z0-9._-]{1,24}",
    ) {
        let key = Lockfile::make_key(asset_type, &name);
        prop_assert_eq!(Lockfile::parse_key(&key), Some((asset_type, name.as_str())));
    }

    /// PROPERTY: Keys are prefixed by the asset type's section name.
    #[test]
    fn property_key_starts_with_type(asset_type in asset_type(), name in "[a-z]{1,8}") {
        let key = Lockfile::make_key(asset_type, &name);
        let prefix = format!("{}/", asset_type.as_str());
        prop_assert!(key.starts_with(&prefix));
    }
}
