use crate::errors::KbaseResult;

/// Write access to the persisted embedding of a document.
#[allow(async_fn_in_trait)]
pub trait IEmbeddingStore {
    /// Replace the stored vector of `document_id`. `encoded` is a JSON
    /// float array.
    async fn store_embedding(
        &self,
        owner_id: &str,
        document_id: &str,
        encoded: String,
    ) -> KbaseResult<()>;
}
