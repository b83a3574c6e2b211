/// Embedding provider and vector errors.
#[derive(Debug, thiserror::Error)]
pub enum EmbeddingError {
    #[error("embedding provider unavailable: {provider}")]
    ProviderUnavailable { provider: String },

    #[error("embedding request failed after {attempts} attempt(s): {reason}")]
    RequestFailed { attempts: u32, reason: String },

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("stored vector for document {document_id} is malformed: {reason}")]
    MalformedVector { document_id: String, reason: String },

    #[error("cannot embed empty input")]
    EmptyInput,
}
