//! Ranking capability and its two implementations.
//!
//! A ranker scores a query against every document of a corpus. `None`
//! means the document is not a candidate for this ranker at all (zero
//! lexical overlap, or no stored vector).
//!
//! `score` is async because the semantic ranker embeds the query through
//! the provider.

pub mod bm25;
pub mod lexical;
pub mod semantic;

use kbase_core::KbaseResult;

use crate::corpus::Corpus;

pub use lexical::LexicalRanker;
pub use semantic::{cosine_similarity, SemanticRanker};

#[allow(async_fn_in_trait)]
pub trait Ranker {
    fn name(&self) -> &'static str;

    /// Scores aligned with `corpus.documents()`.
    async fn score(&self, query: &str, corpus: &Corpus) -> KbaseResult<Vec<Option<f64>>>;
}
