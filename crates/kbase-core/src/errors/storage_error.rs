/// Document store errors.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("document store unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("document query failed for owner {owner_id}: {reason}")]
    QueryFailed { owner_id: String, reason: String },

    #[error("document not found: {id}")]
    DocumentNotFound { id: String },
}
