//! Property tests for mode parsing and the mode-derived switches.

use proptest::prelude::*;

use wasm_bundle::application::{AppPipeline, Pipeline, WorkerPipeline};
use wasm_bundle::config::{AppConfig, WorkerConfig};
use wasm_bundle::{BuildContext, Mode};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Any flag other than exactly "production" selects development.
    #[test]
    fn property_only_exact_production_flag_selects_production(
        flag in "(?s).{0,32}"
    ) {
        prop_assume!(flag != "production");
        let mode = Mode::from_flag(Some(flag.as_str()));

        prop_assert_eq!(mode, Mode::Development);
        prop_assert!(mode.watch_enabled());
        prop_assert!(!mode.compression_enabled());
    }

    /// PROPERTY: Compression and watch are always opposite.
    #[test]
    fn property_compression_and_watch_are_exclusive(
        flag in proptest::option::of("(production|development|[a-z]{0,12})")
    ) {
        let mode = Mode::from_flag(flag.as_deref());
        prop_assert_ne!(mode.compression_enabled(), mode.watch_enabled());
    }

    /// PROPERTY: Emitted filenames are the same in every mode.
    #[test]
    fn property_filenames_do_not_depend_on_mode(
        flag in proptest::option::of("[A-Za-z]{0,12}")
    ) {
        let ctx = BuildContext::new(Mode::from_flag(flag.as_deref()), "/project");

        let app = AppPipeline::new(&ctx, &AppConfig::default()).describe().unwrap();
        prop_assert_eq!(app.target().output_filename(), "ffxii_tza_rng.js");
        prop_assert_eq!(app.target().binary_output_filename(), "ffxii_tza_rng.wasm");
        prop_assert_eq!(app.copy_rules().len(), 1);

        let worker = WorkerPipeline::new(&ctx, &WorkerConfig::default()).describe().unwrap();
        prop_assert_eq!(worker.target().output_filename(), "webworker.js");
        prop_assert!(worker.copy_rules().is_empty());
        prop_assert!(worker.server().is_none());
        prop_assert_eq!(app.watch(), worker.watch());
    }
}
