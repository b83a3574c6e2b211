//! OpenAI-compatible embedding provider.
//!
//! Sends `POST {endpoint}/embeddings` with `{ model, input: [...] }` and
//! reads `data[].embedding` ordered by `data[].index`. Transport errors,
//! 429 and 5xx responses are retried with exponential backoff; other 4xx
//! responses fail immediately.

use std::time::Duration;

use kbase_core::config::EmbeddingConfig;
use kbase_core::errors::{EmbeddingError, KbaseError, KbaseResult};
use kbase_core::traits::IEmbeddingProvider;
use kbase_observability::embedding_span;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn, Instrument};

pub struct OpenAiEmbeddingProvider {
    client: reqwest::Client,
    url: String,
    api_key: String,
    model: String,
    dimensions: usize,
    max_retries: u32,
    retry_backoff: Duration,
}

#[derive(Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: &'a [String],
}

#[derive(Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingDatum>,
}

#[derive(Deserialize)]
struct EmbeddingDatum {
    embedding: Vec<f32>,
    index: usize,
}

/// Outcome of one HTTP attempt.
enum Attempt {
    Done(Vec<Vec<f32>>),
    Retry(String),
    Fatal(String),
}

impl OpenAiEmbeddingProvider {
    /// Build from config, reading the API key from `config.api_key_env`.
    ///
    /// # Errors
    /// `ProviderUnavailable` if the key is not set or the client cannot be built.
    pub fn from_config(config: &EmbeddingConfig) -> KbaseResult<Self> {
        let api_key = std::env::var(&config.api_key_env).map_err(|_| {
            EmbeddingError::ProviderUnavailable {
                provider: format!("openai ({} is not set)", config.api_key_env),
            }
        })?;
        Self::with_api_key(config, api_key)
    }

    /// Build from config with an explicit API key.
    pub fn with_api_key(config: &EmbeddingConfig, api_key: impl Into<String>) -> KbaseResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| EmbeddingError::ProviderUnavailable {
                provider: format!("openai (client build failed: {e})"),
            })?;

        Ok(Self {
            client,
            url: format!("{}/embeddings", config.endpoint.trim_end_matches('/')),
            api_key: api_key.into(),
            model: config.model.clone(),
            dimensions: config.dimensions,
            max_retries: config.max_retries,
            retry_backoff: Duration::from_millis(config.retry_backoff_ms),
        })
    }

    async fn attempt(&self, texts: &[String]) -> Attempt {
        let mut request = self.client.post(&self.url).json(&EmbeddingRequest {
            model: &self.model,
            input: texts,
        });
        if !self.api_key.is_empty() {
            request = request.bearer_auth(&self.api_key);
        }

        let response = match request.send().await {
            Ok(r) => r,
            Err(e) => return Attempt::Retry(e.to_string()),
        };

        let status = response.status();
        if status.as_u16() == 429 || status.is_server_error() {
            return Attempt::Retry(format!("HTTP {status}"));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Attempt::Fatal(format!("HTTP {status}: {body}"));
        }

        match response.json::<EmbeddingResponse>().await {
            Ok(mut parsed) => {
                parsed.data.sort_by_key(|d| d.index);
                Attempt::Done(parsed.data.into_iter().map(|d| d.embedding).collect())
            }
            Err(e) => Attempt::Fatal(format!("invalid response body: {e}")),
        }
    }

    async fn request_with_retries(&self, texts: &[String]) -> KbaseResult<Vec<Vec<f32>>> {
        let mut backoff = self.retry_backoff;
        let mut attempts = 0;
        loop {
            attempts += 1;
            let reason = match self.attempt(texts).await {
                Attempt::Done(vectors) => return Ok(vectors),
                Attempt::Fatal(reason) => {
                    return Err(EmbeddingError::RequestFailed { attempts, reason }.into())
                }
                Attempt::Retry(reason) => reason,
            };
            if attempts > self.max_retries {
                return Err(EmbeddingError::RequestFailed { attempts, reason }.into());
            }
            warn!(attempt = attempts, %reason, "embedding request failed, retrying");
            tokio::time::sleep(backoff).await;
            backoff *= 2;
        }
    }

    fn check(&self, texts: &[String], vectors: &[Vec<f32>]) -> KbaseResult<()> {
        if vectors.len() != texts.len() {
            return Err(EmbeddingError::RequestFailed {
                attempts: 1,
                reason: format!("expected {} embeddings, got {}", texts.len(), vectors.len()),
            }
            .into());
        }
        if let Some(v) = vectors.iter().find(|v| v.len() != self.dimensions) {
            return Err(EmbeddingError::DimensionMismatch {
                expected: self.dimensions,
                actual: v.len(),
            }
            .into());
        }
        Ok(())
    }
}

impl IEmbeddingProvider for OpenAiEmbeddingProvider {
    async fn embed(&self, text: &str) -> KbaseResult<Vec<f32>> {
        let mut vectors = self.embed_many(&[text.to_string()]).await?;
        vectors.pop().ok_or_else(|| {
            EmbeddingError::RequestFailed {
                attempts: 1,
                reason: "empty response".to_string(),
            }
            .into()
        })
    }

    async fn embed_many(&self, texts: &[String]) -> KbaseResult<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        if texts.iter().any(|t| t.trim().is_empty()) {
            return Err(EmbeddingError::EmptyInput.into());
        }

        let span = embedding_span!(self.model, self.dimensions);
        async {
            let vectors = self.request_with_retries(texts).await?;
            self.check(texts, &vectors)?;
            debug!(count = vectors.len(), "embeddings generated");
            Ok::<_, KbaseError>(vectors)
        }
        .instrument(span)
        .await
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "openai"
    }
}
