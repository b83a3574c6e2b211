pub mod defaults;
mod embedding_config;
mod expansion_config;
mod observability_config;
mod retrieval_config;
mod settings;
mod settings_store;

pub use embedding_config::EmbeddingConfig;
pub use expansion_config::{ExpansionConfig, PhraseRule};
pub use observability_config::ObservabilityConfig;
pub use retrieval_config::{RankerKind, RetrievalConfig};
pub use settings::{RetrievalSettings, SettingsPatch};
pub use settings_store::InMemorySettingsStore;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, KbaseResult};

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KbaseConfig {
    pub retrieval: RetrievalConfig,
    /// Initial value of the live retrieval settings.
    pub settings: RetrievalSettings,
    pub expansion: ExpansionConfig,
    pub embedding: EmbeddingConfig,
    pub observability: ObservabilityConfig,
}

impl KbaseConfig {
    /// Parse a TOML string. Missing sections and fields fall back to defaults.
    pub fn from_toml(input: &str) -> KbaseResult<Self> {
        let config: Self = toml::from_str(input).map_err(|e| ConfigError::ParseFailed {
            reason: e.to_string(),
        })?;
        config.settings.validate()?;
        config.retrieval.validate()?;
        Ok(config)
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> KbaseResult<String> {
        toml::to_string_pretty(self).map_err(|e| {
            ConfigError::ParseFailed {
                reason: e.to_string(),
            }
            .into()
        })
    }
}
