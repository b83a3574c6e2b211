use crate::errors::KbaseResult;
use crate::models::StoredDocument;

/// Source of the documents an owner may search.
///
/// Implementations enforce entitlement: only documents the owner is
/// allowed to see, and only active ones, are returned. The engine performs
/// no authorization of its own.
#[allow(async_fn_in_trait)]
pub trait IDocumentStore {
    async fn list_active_documents(&self, owner_id: &str) -> KbaseResult<Vec<StoredDocument>>;
}
