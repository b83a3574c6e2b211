use kbase_core::config::{RetrievalSettings, SettingsPatch};
use kbase_core::DocumentType;
use proptest::prelude::*;

proptest! {
    #[test]
    fn empty_patch_is_identity(
        threshold in -1.0f64..=1.0,
        max_results in 1usize..50,
        max_excerpts in 0usize..20,
    ) {
        let settings = RetrievalSettings {
            threshold,
            max_results,
            max_excerpts,
            ..RetrievalSettings::default()
        };
        prop_assert_eq!(settings.merged(&SettingsPatch::default()), settings);
    }

    #[test]
    fn ordered_thresholds_in_range_validate(a in -1.0f64..=1.0, b in -1.0f64..=1.0) {
        let settings = RetrievalSettings {
            threshold: a.max(b),
            min_threshold: a.min(b),
            ..RetrievalSettings::default()
        };
        prop_assert!(settings.validate().is_ok());
    }

    #[test]
    fn inverted_thresholds_are_rejected(a in -1.0f64..=1.0, gap in 0.001f64..=1.0) {
        prop_assume!(a + gap <= 1.0);
        let settings = RetrievalSettings {
            threshold: a,
            min_threshold: a + gap,
            ..RetrievalSettings::default()
        };
        prop_assert!(settings.validate().is_err());
    }

    #[test]
    fn document_type_parses_any_case(index in 0usize..4, upper in any::<bool>()) {
        let t = DocumentType::ALL[index];
        let text = if upper { t.as_str().to_uppercase() } else { t.as_str().to_string() };
        prop_assert_eq!(text.parse::<DocumentType>().unwrap(), t);
    }
}
