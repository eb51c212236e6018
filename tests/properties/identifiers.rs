//! Property tests for stem derivation and identifier construction.

use proptest::prelude::*;

use embedgen::domain::value_objects::{sanitize, stem, Identifier};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the stem is everything before the last dot.
    #[test]
    fn property_stem_drops_last_extension(
        base in "[A-Za-z0-9_.]{0,12}",
        ext in "[A-Za-z0-9_]{0,6}"
    ) {
        let name = format!("{}.{}", base, ext);
        prop_assert_eq!(stem(&name), base.as_str());
    }

    /// PROPERTY: names without a dot are their own stem.
    #[test]
    fn property_stem_without_dot_is_identity(name in "[A-Za-z0-9_-]{0,16}") {
        prop_assert_eq!(stem(&name), name.as_str());
    }

    /// PROPERTY: a group name plus any sanitized stem is a valid identifier.
    #[test]
    fn property_resource_identifier_is_valid(
        group in "[A-Z][A-Z0-9_]{0,10}",
        file in "\\PC{0,16}"
    ) {
        let ident = Identifier::resource(&Identifier::new(&group).unwrap(), stem(&file));
        prop_assert!(Identifier::new(ident.as_str()).is_ok());
        let prefix = format!("{}_", group);
        prop_assert!(ident.as_str().starts_with(&prefix));
    }

    /// PROPERTY: identifier-safe stems pass through sanitization untouched.
    #[test]
    fn property_sanitize_keeps_safe_names(name in "[A-Za-z0-9_]{0,16}") {
        prop_assert_eq!(sanitize(&name), name);
    }
}
