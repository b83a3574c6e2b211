use serde::{Deserialize, Serialize};

use super::defaults;

/// Embedding provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Model name sent to the provider.
    pub model: String,
    /// Base URL of an OpenAI-compatible API (without the `/embeddings` path).
    pub endpoint: String,
    /// Environment variable holding the API key.
    pub api_key_env: String,
    /// Expected vector length.
    pub dimensions: usize,
    /// Retries after the first failed request.
    pub max_retries: u32,
    /// Base backoff between retries, doubled on every attempt.
    pub retry_backoff_ms: u64,
    pub timeout_secs: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            model: defaults::DEFAULT_EMBEDDING_MODEL.to_string(),
            endpoint: defaults::DEFAULT_EMBEDDING_ENDPOINT.to_string(),
            api_key_env: defaults::DEFAULT_EMBEDDING_API_KEY_ENV.to_string(),
            dimensions: defaults::DEFAULT_EMBEDDING_DIMENSIONS,
            max_retries: defaults::DEFAULT_EMBEDDING_MAX_RETRIES,
            retry_backoff_ms: defaults::DEFAULT_EMBEDDING_RETRY_BACKOFF_MS,
            timeout_secs: defaults::DEFAULT_EMBEDDING_TIMEOUT_SECS,
        }
    }
}
