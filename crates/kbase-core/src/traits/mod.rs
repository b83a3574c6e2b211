//! Collaborator interfaces. Store and provider calls are network I/O in
//! production, so they are `async fn` and consumed through generics.

mod document_store;
mod embedding;
mod embedding_store;
mod settings;

pub use document_store::IDocumentStore;
pub use embedding::IEmbeddingProvider;
pub use embedding_store::IEmbeddingStore;
pub use settings::ISettingsStore;
