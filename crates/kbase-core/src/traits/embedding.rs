use crate::errors::KbaseResult;

/// Embedding generation provider. Both calls are fallible I/O.
#[allow(async_fn_in_trait)]
pub trait IEmbeddingProvider {
    /// Embed a single text.
    async fn embed(&self, text: &str) -> KbaseResult<Vec<f32>>;

    /// Embed a batch of texts. The result is aligned with `texts`.
    async fn embed_many(&self, texts: &[String]) -> KbaseResult<Vec<Vec<f32>>>;

    /// The dimensionality of embeddings produced by this provider.
    fn dimensions(&self) -> usize;

    /// Human-readable provider name.
    fn name(&self) -> &str;
}
