//! Embedding ranking: cosine similarity against stored document vectors.

use tracing::debug;

use kbase_core::errors::EmbeddingError;
use kbase_core::traits::IEmbeddingProvider;
use kbase_core::KbaseResult;

use super::Ranker;
use crate::corpus::Corpus;

/// Cosine similarity in [-1, 1]. A zero-norm vector has similarity 0.
///
/// # Errors
/// `DimensionMismatch` when the lengths differ.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> KbaseResult<f64> {
    if a.len() != b.len() {
        return Err(EmbeddingError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        }
        .into());
    }
    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;
    for (x, y) in a.iter().zip(b) {
        let (x, y) = (f64::from(*x), f64::from(*y));
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }
    Ok((dot / (norm_a.sqrt() * norm_b.sqrt())).clamp(-1.0, 1.0))
}

/// Embeds the query once and compares it with every document that has a
/// stored vector. Documents without one are not candidates.
pub struct SemanticRanker<'a, E: IEmbeddingProvider> {
    embedder: &'a E,
}

impl<'a, E: IEmbeddingProvider> SemanticRanker<'a, E> {
    pub fn new(embedder: &'a E) -> Self {
        Self { embedder }
    }
}

impl<E: IEmbeddingProvider> Ranker for SemanticRanker<'_, E> {
    fn name(&self) -> &'static str {
        "semantic"
    }

    async fn score(&self, query: &str, corpus: &Corpus) -> KbaseResult<Vec<Option<f64>>> {
        if !corpus.has_vectors() {
            debug!("no stored vectors, skipping query embedding");
            return Ok(vec![None; corpus.len()]);
        }
        let query_vector = self.embedder.embed(query).await?;
        corpus
            .documents()
            .iter()
            .map(|doc| {
                doc.vector
                    .as_deref()
                    .map(|v| cosine_similarity(&query_vector, v))
                    .transpose()
            })
            .collect()
    }
}
