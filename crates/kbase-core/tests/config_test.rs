use kbase_core::config::*;
use kbase_core::traits::ISettingsStore;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = KbaseConfig::from_toml("").unwrap();

    assert_eq!(config.settings.threshold, 0.6);
    assert_eq!(config.settings.min_threshold, 0.35);
    assert_eq!(config.settings.max_results, 5);
    assert_eq!(config.settings.max_excerpts, 3);
    assert_eq!(config.settings.temperature, 0.7);

    assert_eq!(config.retrieval.ranker, RankerKind::Lexical);
    assert_eq!(config.retrieval.fallback_threshold, 0.45);
    assert_eq!(config.retrieval.min_merged_results, 2);
    assert_eq!(config.retrieval.excerpt_ceiling, 8);
    assert_eq!(config.retrieval.summary_max_chars, 150);
    assert_eq!(config.retrieval.basic_threshold, 0.65);
    assert_eq!(config.retrieval.tool_threshold, 0.6);
    assert_eq!(config.retrieval.tool_max_results, 5);

    assert_eq!(config.embedding.model, "text-embedding-3-small");
    assert_eq!(config.embedding.dimensions, 1536);

    assert_eq!(config.observability.log_level, "info");
    assert!(!config.observability.json);

    assert!(!config.expansion.normalizations.is_empty());
    assert!(!config.expansion.translations.is_empty());
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[retrieval]
ranker = "semantic"

[settings]
threshold = 0.5
max_excerpts = 6

[[expansion.normalizations]]
trigger = "tax"
expansion = "income tax filing rules"
"#;
    let config = KbaseConfig::from_toml(toml).unwrap();
    assert_eq!(config.retrieval.ranker, RankerKind::Semantic);
    assert_eq!(config.settings.threshold, 0.5);
    assert_eq!(config.settings.max_excerpts, 6);
    // Non-overridden fields keep defaults.
    assert_eq!(config.settings.min_threshold, 0.35);
    assert_eq!(
        config.expansion.normalizations,
        vec![PhraseRule::new("tax", "income tax filing rules")]
    );
    // The untouched table keeps its default rules.
    assert!(!config.expansion.translations.is_empty());
}

#[test]
fn config_rejects_min_threshold_above_threshold() {
    let toml = r#"
[settings]
threshold = 0.3
min_threshold = 0.5
"#;
    assert!(KbaseConfig::from_toml(toml).is_err());
}

#[test]
fn config_rejects_excerpt_ceiling_above_hard_limit() {
    let toml = r#"
[retrieval]
excerpt_ceiling = 20
"#;
    assert!(KbaseConfig::from_toml(toml).is_err());
}

#[test]
fn config_rejects_tool_limits_out_of_range() {
    assert!(KbaseConfig::from_toml("[retrieval]\ntool_threshold = 1.5\n").is_err());
    assert!(KbaseConfig::from_toml("[retrieval]\ntool_max_results = 0\n").is_err());
}

#[test]
fn config_rejects_malformed_toml() {
    assert!(KbaseConfig::from_toml("[settings\nthreshold = ").is_err());
}

#[test]
fn config_round_trips_through_toml() {
    let config = KbaseConfig::default();
    let text = config.to_toml().unwrap();
    let parsed = KbaseConfig::from_toml(&text).unwrap();
    assert_eq!(parsed.settings, config.settings);
    assert_eq!(parsed.expansion.normalizations, config.expansion.normalizations);
}

#[test]
fn env_overrides_apply_and_skip_garbage() {
    let settings = RetrievalSettings::default().with_overrides_from(|key| match key {
        "KBASE_THRESHOLD" => Some("0.7".into()),
        "KBASE_MAX_RESULTS" => Some("not-a-number".into()),
        "KBASE_MAX_EXCERPTS" => Some(" 4 ".into()),
        _ => None,
    });
    assert_eq!(settings.threshold, 0.7);
    assert_eq!(settings.max_results, 5);
    assert_eq!(settings.max_excerpts, 4);
}

#[test]
fn settings_store_merges_partial_updates() {
    let store = InMemorySettingsStore::new(RetrievalSettings::default());
    let updated = store
        .update(&SettingsPatch {
            threshold: Some(0.8),
            max_results: Some(10),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(updated.threshold, 0.8);
    assert_eq!(updated.max_results, 10);
    assert_eq!(updated.min_threshold, 0.35);
    assert_eq!(store.get_settings(), updated);
}

#[test]
fn settings_store_rejects_invalid_update_and_keeps_previous() {
    let store = InMemorySettingsStore::new(RetrievalSettings::default());
    let result = store.update(&SettingsPatch {
        max_results: Some(0),
        ..Default::default()
    });
    assert!(result.is_err());
    assert_eq!(store.get_settings(), RetrievalSettings::default());
}

#[test]
fn settings_store_reset_restores_initial() {
    let initial = RetrievalSettings {
        threshold: 0.5,
        ..Default::default()
    };
    let store = InMemorySettingsStore::new(initial.clone());
    store
        .update(&SettingsPatch {
            threshold: Some(0.9),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(store.reset(), initial);
    assert_eq!(store.get_settings(), initial);
}
