//! BM25 ranking with per-query normalization.

use kbase_core::KbaseResult;

use super::Ranker;
use crate::corpus::Corpus;
use crate::tokenizer::tokenize;

/// Scores documents with the corpus BM25 index and divides each positive
/// raw score by the best raw score of the query, giving a pseudo-similarity
/// in (0, 1]. Documents with a raw score of zero or below are not candidates.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexicalRanker;

impl LexicalRanker {
    pub fn new() -> Self {
        Self
    }

    pub fn score_tokens(&self, tokens: &[String], corpus: &Corpus) -> Vec<Option<f64>> {
        if tokens.is_empty() {
            return vec![None; corpus.len()];
        }
        let raw = corpus.index().score(tokens);
        let best = raw.iter().copied().filter(|s| *s > 0.0).fold(0.0, f64::max);
        raw.into_iter()
            .map(|s| (s > 0.0 && best > 0.0).then(|| s / best))
            .collect()
    }
}

impl Ranker for LexicalRanker {
    fn name(&self) -> &'static str {
        "lexical"
    }

    async fn score(&self, query: &str, corpus: &Corpus) -> KbaseResult<Vec<Option<f64>>> {
        Ok(self.score_tokens(&tokenize(query), corpus))
    }
}
