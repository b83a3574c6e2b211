mod config_error;
mod embedding_error;
mod retrieval_error;
mod storage_error;

pub use config_error::ConfigError;
pub use embedding_error::EmbeddingError;
pub use retrieval_error::RetrievalError;
pub use storage_error::StorageError;

/// Top-level error type for the kbase workspace.
#[derive(Debug, thiserror::Error)]
pub enum KbaseError {
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("retrieval error: {0}")]
    Retrieval(#[from] RetrievalError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl KbaseError {
    /// Whether this error signals a systemic precondition violation
    /// (embedding model mismatch across the corpus) rather than a fault
    /// scoped to one request or one document.
    pub fn is_precondition_violation(&self) -> bool {
        matches!(
            self,
            KbaseError::Embedding(EmbeddingError::DimensionMismatch { .. })
        )
    }

    /// Short name of the failing subsystem, used as a structured log field.
    pub fn subsystem(&self) -> &'static str {
        match self {
            KbaseError::Storage(_) => "storage",
            KbaseError::Embedding(_) => "embedding",
            KbaseError::Retrieval(_) => "retrieval",
            KbaseError::Config(_) => "config",
            KbaseError::Serialization(_) => "serialization",
        }
    }
}

/// Convenience alias used across the workspace.
pub type KbaseResult<T> = Result<T, KbaseError>;
