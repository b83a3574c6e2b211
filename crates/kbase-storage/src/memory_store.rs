use std::collections::HashMap;
use std::sync::RwLock;

use kbase_core::errors::{KbaseResult, StorageError};
use kbase_core::models::StoredDocument;
use kbase_core::traits::{IDocumentStore, IEmbeddingStore};
use tracing::debug;

#[derive(Debug, Clone)]
struct Record {
    document: StoredDocument,
    active: bool,
}

/// Thread-safe in-memory document store keyed by owner.
///
/// Insertion order per owner is preserved, so listings (and therefore
/// ranking tie-breaks) are deterministic.
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    owners: RwLock<HashMap<String, Vec<Record>>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a document for `owner_id`. An empty id gets a
    /// fresh UUID. Returns the stored id.
    pub fn upsert(&self, owner_id: &str, mut document: StoredDocument) -> String {
        if document.id.is_empty() {
            document.id = uuid::Uuid::new_v4().to_string();
        }
        let id = document.id.clone();
        let mut owners = self.owners.write().unwrap_or_else(|e| e.into_inner());
        let records = owners.entry(owner_id.to_string()).or_default();
        match records.iter_mut().find(|r| r.document.id == id) {
            Some(existing) => existing.document = document,
            None => records.push(Record {
                document,
                active: true,
            }),
        }
        debug!(owner = owner_id, id = %id, "document stored");
        id
    }

    /// Toggle whether a document is visible to retrieval.
    pub fn set_active(&self, owner_id: &str, id: &str, active: bool) -> KbaseResult<()> {
        let mut owners = self.owners.write().unwrap_or_else(|e| e.into_inner());
        let record = owners
            .get_mut(owner_id)
            .and_then(|records| records.iter_mut().find(|r| r.document.id == id))
            .ok_or_else(|| StorageError::DocumentNotFound { id: id.to_string() })?;
        record.active = active;
        Ok(())
    }

    /// Store the encoded embedding of a document.
    pub fn set_embedding(&self, owner_id: &str, id: &str, encoded: String) -> KbaseResult<()> {
        let mut owners = self.owners.write().unwrap_or_else(|e| e.into_inner());
        let record = owners
            .get_mut(owner_id)
            .and_then(|records| records.iter_mut().find(|r| r.document.id == id))
            .ok_or_else(|| StorageError::DocumentNotFound { id: id.to_string() })?;
        record.document.embedding = Some(encoded);
        Ok(())
    }

    pub fn remove(&self, owner_id: &str, id: &str) -> Option<StoredDocument> {
        let mut owners = self.owners.write().unwrap_or_else(|e| e.into_inner());
        let records = owners.get_mut(owner_id)?;
        let pos = records.iter().position(|r| r.document.id == id)?;
        Some(records.remove(pos).document)
    }

    /// Number of documents (active or not) held for an owner.
    pub fn count(&self, owner_id: &str) -> usize {
        self.owners
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(owner_id)
            .map_or(0, Vec::len)
    }
}

impl IDocumentStore for InMemoryDocumentStore {
    async fn list_active_documents(&self, owner_id: &str) -> KbaseResult<Vec<StoredDocument>> {
        let owners = self.owners.read().unwrap_or_else(|e| e.into_inner());
        Ok(owners
            .get(owner_id)
            .map(|records| {
                records
                    .iter()
                    .filter(|r| r.active)
                    .map(|r| r.document.clone())
                    .collect()
            })
            .unwrap_or_default())
    }
}

impl IEmbeddingStore for InMemoryDocumentStore {
    async fn store_embedding(
        &self,
        owner_id: &str,
        document_id: &str,
        encoded: String,
    ) -> KbaseResult<()> {
        self.set_embedding(owner_id, document_id, encoded)
    }
}
