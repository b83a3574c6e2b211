//! Persisted embedding codec.
//!
//! The document store keeps vectors as JSON arrays of floats. A vector that
//! fails to decode is a per-document problem, reported as
//! `EmbeddingError::MalformedVector` so callers can skip that document.

use kbase_core::errors::{EmbeddingError, KbaseResult};

/// Decode a stored vector.
///
/// # Errors
/// `MalformedVector` if the text is not a non-empty array of finite numbers.
pub fn decode_vector(document_id: &str, encoded: &str) -> KbaseResult<Vec<f32>> {
    let malformed = |reason: String| EmbeddingError::MalformedVector {
        document_id: document_id.to_string(),
        reason,
    };

    let vector: Vec<f32> =
        serde_json::from_str(encoded).map_err(|e| malformed(e.to_string()))?;
    if vector.is_empty() {
        return Err(malformed("empty vector".to_string()).into());
    }
    if let Some(pos) = vector.iter().position(|v| !v.is_finite()) {
        return Err(malformed(format!("non-finite component at index {pos}")).into());
    }
    Ok(vector)
}

/// Encode a vector for storage.
pub fn encode_vector(vector: &[f32]) -> String {
    // Serializing a slice of f32 cannot fail; non-finite values become null
    // and are rejected again on decode.
    serde_json::to_string(vector).unwrap_or_else(|_| "[]".to_string())
}
