//! Embedding backfill.
//!
//! Embeds an owner's active documents that have no stored vector yet and
//! writes the result back through the store. The whole set goes to the
//! provider as one batch; if the batch fails, each document is retried on
//! its own so one bad text does not block the rest.

use kbase_core::errors::KbaseResult;
use kbase_core::models::StoredDocument;
use kbase_core::traits::{IDocumentStore, IEmbeddingProvider, IEmbeddingStore};
use kbase_observability::embedding_span;
use serde::Serialize;
use tracing::{info, warn, Instrument};

use crate::codec::encode_vector;
use crate::enrichment::prepare_text_for_embedding;

/// Result of backfilling one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BackfillOutcome {
    pub id: String,
    pub title: String,
    pub success: bool,
}

/// Embed and store every active document of `owner_id` lacking a vector.
///
/// Returns one outcome per pending document, in store order. Documents
/// that already carry a vector are left untouched and not reported.
///
/// # Errors
/// Only if the pending documents cannot be listed. Per-document embedding
/// or write failures are reported as `success: false`.
pub async fn backfill_embeddings<S, E>(
    store: &S,
    provider: &E,
    owner_id: &str,
) -> KbaseResult<Vec<BackfillOutcome>>
where
    S: IDocumentStore + IEmbeddingStore,
    E: IEmbeddingProvider,
{
    let span = embedding_span!(provider.name(), provider.dimensions());
    backfill(store, provider, owner_id).instrument(span).await
}

async fn backfill<S, E>(
    store: &S,
    provider: &E,
    owner_id: &str,
) -> KbaseResult<Vec<BackfillOutcome>>
where
    S: IDocumentStore + IEmbeddingStore,
    E: IEmbeddingProvider,
{
    let pending: Vec<StoredDocument> = store
        .list_active_documents(owner_id)
        .await?
        .into_iter()
        .filter(|doc| doc.embedding.is_none())
        .collect();
    if pending.is_empty() {
        return Ok(Vec::new());
    }

    let texts: Vec<String> = pending
        .iter()
        .map(|doc| prepare_text_for_embedding(&doc.title, &doc.body, Some(doc.doc_type)))
        .collect();
    let vectors = embed_all(provider, &pending, &texts).await;

    let mut outcomes = Vec::with_capacity(pending.len());
    for (doc, vector) in pending.into_iter().zip(vectors) {
        let success = match vector {
            Some(vector) => match store
                .store_embedding(owner_id, &doc.id, encode_vector(&vector))
                .await
            {
                Ok(()) => true,
                Err(e) => {
                    warn!(document_id = %doc.id, error = %e, "embedding write failed");
                    false
                }
            },
            None => false,
        };
        outcomes.push(BackfillOutcome {
            id: doc.id,
            title: doc.title,
            success,
        });
    }

    let succeeded = outcomes.iter().filter(|o| o.success).count();
    info!(
        owner = owner_id,
        succeeded,
        total = outcomes.len(),
        "embedding backfill complete"
    );
    Ok(outcomes)
}

/// One vector per text, `None` where embedding failed.
async fn embed_all<E: IEmbeddingProvider>(
    provider: &E,
    docs: &[StoredDocument],
    texts: &[String],
) -> Vec<Option<Vec<f32>>> {
    match provider.embed_many(texts).await {
        Ok(vectors) if vectors.len() == texts.len() => {
            return vectors.into_iter().map(Some).collect();
        }
        Ok(vectors) => warn!(
            expected = texts.len(),
            actual = vectors.len(),
            "batch embedding returned a misaligned result, falling back to individual"
        ),
        Err(e) => warn!(error = %e, "batch embedding failed, falling back to individual"),
    }

    let mut vectors = Vec::with_capacity(texts.len());
    for (doc, text) in docs.iter().zip(texts) {
        match provider.embed(text).await {
            Ok(vector) => vectors.push(Some(vector)),
            Err(e) => {
                warn!(document_id = %doc.id, error = %e, "individual embedding failed");
                vectors.push(None);
            }
        }
    }
    vectors
}
