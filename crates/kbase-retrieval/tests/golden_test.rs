//! Golden title queries against the sample immigration corpus.

use kbase_core::config::{ExpansionConfig, RetrievalConfig};
use kbase_core::RetrievalSettings;
use kbase_embeddings::HashingProvider;
use kbase_retrieval::RetrievalEngine;
use kbase_storage::InMemoryDocumentStore;
use test_fixtures::{immigration_corpus, title_queries, FIXTURE_OWNER};

fn seeded_store() -> InMemoryDocumentStore {
    let store = InMemoryDocumentStore::new();
    for doc in immigration_corpus() {
        store.upsert(FIXTURE_OWNER, doc);
    }
    store
}

#[tokio::test]
async fn title_queries_rank_expected_document_first() {
    let store = seeded_store();
    let embedder = HashingProvider::new(32);
    let settings = RetrievalSettings::default();
    let engine = RetrievalEngine::new(
        &store,
        &embedder,
        &settings,
        RetrievalConfig::default(),
        ExpansionConfig::empty(),
    );

    for case in title_queries() {
        let ctx = engine
            .retrieve(&case.query, FIXTURE_OWNER, case.threshold, None)
            .await;
        match &case.expected_first {
            Some(expected) => {
                assert!(ctx.has_relevant_content, "no content for {:?}", case.query);
                assert_eq!(&ctx.sources[0].id, expected, "query {:?}", case.query);
                assert!(ctx.sources[0].similarity > 0.0);
            }
            None => {
                assert!(!ctx.has_relevant_content, "unexpected content for {:?}", case.query);
                assert_eq!(ctx.total_sources, 0);
            }
        }
    }
}

#[tokio::test]
async fn default_phrase_tables_keep_title_match_first() {
    let store = seeded_store();
    let embedder = HashingProvider::new(32);
    let settings = RetrievalSettings::default();
    let engine = RetrievalEngine::new(
        &store,
        &embedder,
        &settings,
        RetrievalConfig::default(),
        ExpansionConfig::default(),
    );

    let ctx = engine.retrieve("Express Entry", FIXTURE_OWNER, None, None).await;
    assert!(ctx.has_relevant_content);
    assert_eq!(ctx.sources[0].id, "ee-system");
    assert_eq!(ctx.sources[0].similarity, 1.0);
}
