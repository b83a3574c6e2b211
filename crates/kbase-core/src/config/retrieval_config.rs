use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::MAX_EXCERPTS_CEILING;
use crate::errors::{ConfigError, KbaseResult};

/// Which ranker the engine uses. The two are never combined within one call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankerKind {
    /// BM25 over title-weighted token streams.
    #[default]
    Lexical,
    /// Cosine similarity over precomputed document embeddings.
    Semantic,
}

/// Static retrieval engine configuration. Unlike `RetrievalSettings`,
/// these values are fixed for the lifetime of the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    pub ranker: RankerKind,
    /// Middle step of the threshold ladder.
    pub fallback_threshold: f64,
    /// Merged result count at which the ladder stops relaxing.
    pub min_merged_results: usize,
    /// Upper bound on excerpts per source, independent of live settings.
    pub excerpt_ceiling: usize,
    /// Maximum characters of the per-document summary line.
    pub summary_max_chars: usize,
    /// Threshold of the single-pass retrieval path.
    pub basic_threshold: f64,
    /// Result limit of the single-pass retrieval path.
    pub basic_max_results: usize,
    /// Initial threshold of the knowledge-search tool. Fixed, not live.
    pub tool_threshold: f64,
    /// Result limit of the knowledge-search tool. Fixed, not live.
    pub tool_max_results: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            ranker: RankerKind::default(),
            fallback_threshold: defaults::DEFAULT_FALLBACK_THRESHOLD,
            min_merged_results: defaults::DEFAULT_MIN_MERGED_RESULTS,
            excerpt_ceiling: MAX_EXCERPTS_CEILING,
            summary_max_chars: defaults::DEFAULT_SUMMARY_MAX_CHARS,
            basic_threshold: defaults::DEFAULT_BASIC_THRESHOLD,
            basic_max_results: defaults::DEFAULT_BASIC_MAX_RESULTS,
            tool_threshold: defaults::DEFAULT_TOOL_THRESHOLD,
            tool_max_results: defaults::DEFAULT_TOOL_MAX_RESULTS,
        }
    }
}

impl RetrievalConfig {
    pub fn validate(&self) -> KbaseResult<()> {
        if self.excerpt_ceiling > MAX_EXCERPTS_CEILING {
            return Err(ConfigError::InvalidValue {
                field: "retrieval.excerpt_ceiling".into(),
                reason: format!("must not exceed {MAX_EXCERPTS_CEILING}"),
            }
            .into());
        }
        if self.summary_max_chars < 4 {
            return Err(ConfigError::InvalidValue {
                field: "retrieval.summary_max_chars".into(),
                reason: "must leave room for the ellipsis".into(),
            }
            .into());
        }
        for (field, value) in [
            ("retrieval.fallback_threshold", self.fallback_threshold),
            ("retrieval.tool_threshold", self.tool_threshold),
        ] {
            if !(-1.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidValue {
                    field: field.into(),
                    reason: format!("{value} is outside [-1, 1]"),
                }
                .into());
            }
        }
        if self.tool_max_results == 0 {
            return Err(ConfigError::InvalidValue {
                field: "retrieval.tool_max_results".into(),
                reason: "must be at least 1".into(),
            }
            .into());
        }
        Ok(())
    }
}
