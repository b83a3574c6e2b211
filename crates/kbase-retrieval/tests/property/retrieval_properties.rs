use kbase_core::config::{ExpansionConfig, RetrievalConfig};
use kbase_core::constants::MAX_EXCERPTS_CEILING;
use kbase_core::models::{DocumentType, StoredDocument};
use kbase_core::RetrievalSettings;
use kbase_embeddings::HashingProvider;
use kbase_retrieval::excerpt::extract_excerpts;
use kbase_retrieval::expansion::QueryExpander;
use kbase_retrieval::search::{merge_at_threshold, ThresholdSearch};
use kbase_retrieval::tokenizer::tokenize;
use kbase_retrieval::RetrievalEngine;
use kbase_storage::InMemoryDocumentStore;
use proptest::prelude::*;

const VOCAB: &[&str] = &[
    "express", "entry", "permit", "study", "work", "canada", "skilled", "worker", "points",
    "language", "province", "nominee", "visa", "family", "sponsor", "job", "offer", "the", "of",
];

fn sentence() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(VOCAB), 1..12).prop_map(|w| w.join(" "))
}

fn score_matrix() -> impl Strategy<Value = Vec<Vec<Option<f64>>>> {
    (1usize..8).prop_flat_map(|docs| {
        prop::collection::vec(
            prop::collection::vec(prop::option::of(0.0f64..=1.0), docs),
            1..6,
        )
    })
}

proptest! {
    #[test]
    fn tokens_are_words_longer_than_two(s in ".{0,200}") {
        for token in tokenize(&s) {
            prop_assert!(token.chars().count() > 2);
            prop_assert!(!token.chars().any(char::is_whitespace));
        }
    }

    #[test]
    fn excerpts_never_exceed_bound(
        body in prop::collection::vec(sentence(), 0..20).prop_map(|s| s.join(". ")),
        query in sentence(),
        limit in 0usize..20,
    ) {
        let excerpts = extract_excerpts(&body, &query, limit);
        prop_assert!(excerpts.len() <= limit.min(MAX_EXCERPTS_CEILING));
        for e in &excerpts {
            prop_assert!(e.chars().count() > 20);
        }
    }

    #[test]
    fn looser_threshold_admits_at_least_as_many(
        scored in score_matrix(),
        high in 0.0f64..=1.0,
        drop in 0.0f64..=1.0,
        max_results in 1usize..10,
    ) {
        let low = high - drop;
        let strict = merge_at_threshold(&scored, high, max_results);
        let loose = merge_at_threshold(&scored, low, max_results);
        prop_assert!(loose.len() >= strict.len());
    }

    #[test]
    fn merged_hits_are_unique_sorted_and_maximal(scored in score_matrix(), t in 0.0f64..=1.0) {
        let merged = merge_at_threshold(&scored, t, usize::MAX);
        for pair in merged.windows(2) {
            prop_assert!(pair[0].1 >= pair[1].1);
        }
        let mut positions: Vec<usize> = merged.iter().map(|(p, _)| *p).collect();
        positions.sort_unstable();
        positions.dedup();
        prop_assert_eq!(positions.len(), merged.len());
        for (pos, score) in &merged {
            prop_assert!(*score >= t);
            let best = scored
                .iter()
                .filter_map(|q| q[*pos])
                .fold(f64::NEG_INFINITY, f64::max);
            prop_assert_eq!(*score, best);
        }
    }

    #[test]
    fn ladder_is_strictly_descending(initial in -1.0f64..=1.0, min in -1.0f64..=1.0) {
        let ladder = ThresholdSearch::new(&RetrievalConfig::default()).ladder(initial, min);
        prop_assert_eq!(ladder[0], initial);
        for pair in ladder.windows(2) {
            prop_assert!(pair[0] > pair[1]);
        }
    }

    #[test]
    fn expansion_starts_with_query_and_has_no_duplicates(query in sentence()) {
        let variants = QueryExpander::new(ExpansionConfig::default()).expand(&query);
        prop_assert_eq!(&variants[0], &query);
        for (i, v) in variants.iter().enumerate() {
            prop_assert!(!variants[i + 1..].contains(v));
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn engine_sources_obey_laws(
        docs in prop::collection::vec((sentence(), prop::collection::vec(sentence(), 1..6)), 1..12),
        query in sentence(),
        threshold in 0.0f64..=1.0,
    ) {
        let store = InMemoryDocumentStore::new();
        for (i, (title, body)) in docs.iter().enumerate() {
            store.upsert(
                "owner",
                StoredDocument::new(format!("d{i}"), title.clone(), body.join(". "), DocumentType::Document),
            );
        }
        let embedder = HashingProvider::new(16);
        let settings = RetrievalSettings::default();
        let engine = RetrievalEngine::new(
            &store,
            &embedder,
            &settings,
            RetrievalConfig::default(),
            ExpansionConfig::empty(),
        );

        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        let first = runtime.block_on(engine.retrieve(&query, "owner", Some(threshold), None));
        let second = runtime.block_on(engine.retrieve(&query, "owner", Some(threshold), None));

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.total_sources, first.sources.len());
        prop_assert!(first.total_sources <= settings.max_results);
        for pair in first.sources.windows(2) {
            prop_assert!(pair[0].similarity >= pair[1].similarity);
        }
        for s in &first.sources {
            prop_assert!(s.excerpts.len() <= settings.max_excerpts.min(MAX_EXCERPTS_CEILING));
        }
        if first.total_sources == 0 {
            prop_assert_eq!(first.average_similarity, 0.0);
        }
    }
}
