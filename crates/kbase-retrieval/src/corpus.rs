//! Per-call document corpus.
//!
//! Built from the store's documents at the start of every retrieval call
//! and dropped at its end. Nothing here outlives a call.

use tracing::warn;

use kbase_core::models::{DocumentType, ScoredResult, StoredDocument};
use kbase_embeddings::decode_vector;

use crate::ranking::bm25::Bm25Index;
use crate::tokenizer::prepare_for_index;

/// One retrievable unit with its derived token stream and optional vector.
#[derive(Debug, Clone)]
pub struct IndexedDocument {
    pub id: String,
    pub title: String,
    pub body: String,
    pub doc_type: DocumentType,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub tokens: Vec<String>,
    /// Present only when the stored embedding decoded cleanly.
    pub vector: Option<Vec<f32>>,
}

impl IndexedDocument {
    pub fn to_scored(&self, score: f64) -> ScoredResult {
        ScoredResult {
            id: self.id.clone(),
            title: self.title.clone(),
            body: self.body.clone(),
            doc_type: self.doc_type,
            category: self.category.clone(),
            tags: self.tags.clone(),
            score,
        }
    }
}

/// Documents in store order plus the lexical index over them.
#[derive(Debug)]
pub struct Corpus {
    documents: Vec<IndexedDocument>,
    index: Bm25Index,
    skipped_vectors: usize,
}

impl Corpus {
    /// Index `stored`. With `with_vectors`, persisted embeddings are decoded;
    /// a document whose vector is malformed stays in the corpus without one.
    pub fn build(stored: Vec<StoredDocument>, with_vectors: bool) -> Self {
        let mut skipped_vectors = 0;
        let documents: Vec<IndexedDocument> = stored
            .into_iter()
            .map(|doc| {
                let vector = match (with_vectors, doc.embedding.as_deref()) {
                    (true, Some(encoded)) => match decode_vector(&doc.id, encoded) {
                        Ok(v) => Some(v),
                        Err(e) => {
                            warn!(document_id = %doc.id, error = %e, "skipping malformed stored vector");
                            skipped_vectors += 1;
                            None
                        }
                    },
                    _ => None,
                };
                let category = doc.category().map(str::to_string);
                IndexedDocument {
                    tokens: prepare_for_index(&doc.title, &doc.body),
                    id: doc.id,
                    title: doc.title,
                    body: doc.body,
                    doc_type: doc.doc_type,
                    category,
                    tags: doc.tags,
                    vector,
                }
            })
            .collect();

        let index = Bm25Index::new(documents.iter().map(|d| d.tokens.as_slice()));
        Self {
            documents,
            index,
            skipped_vectors,
        }
    }

    pub fn documents(&self) -> &[IndexedDocument] {
        &self.documents
    }

    pub fn get(&self, position: usize) -> Option<&IndexedDocument> {
        self.documents.get(position)
    }

    pub fn index(&self) -> &Bm25Index {
        &self.index
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Documents whose stored vector failed to decode.
    pub fn skipped_vectors(&self) -> usize {
        self.skipped_vectors
    }

    pub fn has_vectors(&self) -> bool {
        self.documents.iter().any(|d| d.vector.is_some())
    }
}
