use serde::{Deserialize, Serialize};
use tracing::warn;

use super::defaults;
use crate::errors::{ConfigError, KbaseResult};

/// Operator-tunable retrieval settings. Read once per retrieval call;
/// may change between calls but never within one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalSettings {
    /// Primary similarity cutoff.
    pub threshold: f64,
    /// Floor of threshold relaxation.
    pub min_threshold: f64,
    pub max_results: usize,
    pub max_excerpts: usize,
    /// Sampling temperature for the downstream model call. Not used by ranking.
    pub temperature: f64,
}

impl Default for RetrievalSettings {
    fn default() -> Self {
        Self {
            threshold: defaults::DEFAULT_THRESHOLD,
            min_threshold: defaults::DEFAULT_MIN_THRESHOLD,
            max_results: defaults::DEFAULT_MAX_RESULTS,
            max_excerpts: defaults::DEFAULT_MAX_EXCERPTS,
            temperature: defaults::DEFAULT_TEMPERATURE,
        }
    }
}

impl RetrievalSettings {
    /// Check ranges. Thresholds are similarities and live in [-1, 1].
    pub fn validate(&self) -> KbaseResult<()> {
        for (field, value) in [
            ("threshold", self.threshold),
            ("min_threshold", self.min_threshold),
        ] {
            if !(-1.0..=1.0).contains(&value) {
                return Err(invalid(field, format!("{value} is outside [-1, 1]")));
            }
        }
        if self.min_threshold > self.threshold {
            return Err(invalid(
                "min_threshold",
                format!(
                    "{} is greater than threshold {}",
                    self.min_threshold, self.threshold
                ),
            ));
        }
        if self.max_results == 0 {
            return Err(invalid("max_results", "must be at least 1".to_string()));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(invalid(
                "temperature",
                format!("{} is outside [0, 2]", self.temperature),
            ));
        }
        Ok(())
    }

    /// Apply `KBASE_*` environment overrides. Unparsable values are ignored.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    pub fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(v) = parse_var(&lookup, defaults::ENV_THRESHOLD) {
            self.threshold = v;
        }
        if let Some(v) = parse_var(&lookup, defaults::ENV_MIN_THRESHOLD) {
            self.min_threshold = v;
        }
        if let Some(v) = parse_var(&lookup, defaults::ENV_MAX_RESULTS) {
            self.max_results = v;
        }
        if let Some(v) = parse_var(&lookup, defaults::ENV_MAX_EXCERPTS) {
            self.max_excerpts = v;
        }
        if let Some(v) = parse_var(&lookup, defaults::ENV_TEMPERATURE) {
            self.temperature = v;
        }
        self
    }

    /// Merge a partial update, returning the new settings without validating.
    pub fn merged(&self, patch: &SettingsPatch) -> Self {
        Self {
            threshold: patch.threshold.unwrap_or(self.threshold),
            min_threshold: patch.min_threshold.unwrap_or(self.min_threshold),
            max_results: patch.max_results.unwrap_or(self.max_results),
            max_excerpts: patch.max_excerpts.unwrap_or(self.max_excerpts),
            temperature: patch.temperature.unwrap_or(self.temperature),
        }
    }
}

/// Partial settings update. `None` fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsPatch {
    pub threshold: Option<f64>,
    pub min_threshold: Option<f64>,
    pub max_results: Option<usize>,
    pub max_excerpts: Option<usize>,
    pub temperature: Option<f64>,
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!(key, value = %raw, "ignoring unparsable settings override");
            None
        }
    }
}

fn invalid(field: &str, reason: String) -> crate::errors::KbaseError {
    ConfigError::InvalidValue {
        field: format!("settings.{field}"),
        reason,
    }
    .into()
}
