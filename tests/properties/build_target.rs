//! Property tests for build target validation.

use proptest::prelude::*;

use wasm_bundle::domain::value_objects::BuildTarget;

fn plain_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_-]{1,16}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Validation never panics on arbitrary names.
    #[test]
    fn property_validation_never_panics(
        script in "(?s).{0,64}",
        binary in "(?s).{0,64}"
    ) {
        let _ = BuildTarget::new("/project/entry.js", "/project/dist", script, binary);
    }

    /// PROPERTY: Names containing a path separator are rejected.
    #[test]
    fn property_separator_in_name_is_rejected(
        dir in plain_name(),
        stem in plain_name()
    ) {
        let name = format!("{dir}/{stem}.js");
        prop_assert!(BuildTarget::new("/project/entry.js", "/project/dist", name, "app.wasm").is_err());
    }

    /// PROPERTY: Distinct plain names are accepted and the stem drops the extension.
    #[test]
    fn property_plain_names_are_accepted(stem in plain_name()) {
        let target = BuildTarget::new(
            "/project/entry.js",
            "/project/dist",
            format!("{stem}.js"),
            format!("{stem}.wasm"),
        )
        .unwrap();
        prop_assert_eq!(target.binary_stem(), stem);
    }
}
