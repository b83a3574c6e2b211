//! Okapi BM25 over pre-tokenized documents.

use std::collections::HashMap;

pub const DEFAULT_K1: f64 = 1.2;
pub const DEFAULT_B: f64 = 0.75;

/// In-memory BM25 statistics for one corpus.
#[derive(Debug, Clone)]
pub struct Bm25Index {
    k1: f64,
    b: f64,
    term_freqs: Vec<HashMap<String, usize>>,
    doc_lengths: Vec<usize>,
    avg_doc_length: f64,
    idf: HashMap<String, f64>,
}

impl Bm25Index {
    pub fn new<'a, I>(documents: I) -> Self
    where
        I: IntoIterator<Item = &'a [String]>,
    {
        Self::with_params(documents, DEFAULT_K1, DEFAULT_B)
    }

    pub fn with_params<'a, I>(documents: I, k1: f64, b: f64) -> Self
    where
        I: IntoIterator<Item = &'a [String]>,
    {
        let mut term_freqs = Vec::new();
        let mut doc_lengths = Vec::new();
        let mut doc_freqs: HashMap<String, usize> = HashMap::new();

        for tokens in documents {
            let mut tf: HashMap<String, usize> = HashMap::new();
            for token in tokens {
                *tf.entry(token.clone()).or_insert(0) += 1;
            }
            for term in tf.keys() {
                *doc_freqs.entry(term.clone()).or_insert(0) += 1;
            }
            doc_lengths.push(tokens.len());
            term_freqs.push(tf);
        }

        let n = doc_lengths.len() as f64;
        let avg_doc_length = if doc_lengths.is_empty() {
            0.0
        } else {
            doc_lengths.iter().sum::<usize>() as f64 / n
        };

        // Unclamped: terms in more than half the corpus get a negative weight.
        let idf = doc_freqs
            .into_iter()
            .map(|(term, df)| {
                let df = df as f64;
                (term, ((n - df + 0.5) / (df + 0.5)).ln())
            })
            .collect();

        Self {
            k1,
            b,
            term_freqs,
            doc_lengths,
            avg_doc_length,
            idf,
        }
    }

    pub fn len(&self) -> usize {
        self.doc_lengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doc_lengths.is_empty()
    }

    pub fn avg_doc_length(&self) -> f64 {
        self.avg_doc_length
    }

    pub fn idf(&self, term: &str) -> Option<f64> {
        self.idf.get(term).copied()
    }

    /// Raw scores aligned with the indexed documents. Repeated query terms
    /// contribute once per occurrence.
    pub fn score(&self, query_tokens: &[String]) -> Vec<f64> {
        (0..self.len())
            .map(|doc| self.score_document(doc, query_tokens))
            .collect()
    }

    fn score_document(&self, doc: usize, query_tokens: &[String]) -> f64 {
        if self.avg_doc_length == 0.0 {
            return 0.0;
        }
        let tf_map = &self.term_freqs[doc];
        let length_ratio = self.doc_lengths[doc] as f64 / self.avg_doc_length;
        let norm = self.k1 * (1.0 - self.b + self.b * length_ratio);

        query_tokens
            .iter()
            .filter_map(|term| {
                let tf = *tf_map.get(term)? as f64;
                let idf = self.idf.get(term)?;
                Some(idf * (tf * (self.k1 + 1.0)) / (tf + norm))
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokenize;

    fn index(docs: &[&str]) -> Bm25Index {
        let tokenized: Vec<Vec<String>> = docs.iter().map(|d| tokenize(d)).collect();
        Bm25Index::new(tokenized.iter().map(Vec::as_slice))
    }

    #[test]
    fn empty_corpus_scores_nothing() {
        let idx = index(&[]);
        assert!(idx.is_empty());
        assert!(idx.score(&tokenize("anything")).is_empty());
    }

    #[test]
    fn rare_term_scores_positive() {
        let idx = index(&[
            "express entry draws for skilled workers",
            "provincial nominee streams",
            "study permit requirements",
        ]);
        let scores = idx.score(&tokenize("express"));
        assert!(scores[0] > 0.0);
        assert_eq!(scores[1], 0.0);
        assert_eq!(scores[2], 0.0);
    }

    #[test]
    fn common_term_has_negative_idf() {
        let idx = index(&["canada visa", "canada permit", "canada study", "ontario"]);
        assert!(idx.idf("canada").unwrap() < 0.0);
        let scores = idx.score(&tokenize("canada"));
        assert!(scores[0] < 0.0);
        assert_eq!(scores[3], 0.0);
    }

    #[test]
    fn single_document_corpus_idf_is_negative() {
        let idx = index(&["express entry system"]);
        assert!(idx.idf("express").unwrap() < 0.0);
    }

    #[test]
    fn shorter_document_wins_on_equal_tf() {
        let idx = index(&[
            "permit",
            "permit with a great many other unrelated words padding this body out",
            "nothing",
            "else",
            "other",
        ]);
        let scores = idx.score(&tokenize("permit"));
        assert!(scores[0] > scores[1]);
    }

    #[test]
    fn repeated_query_terms_accumulate() {
        let idx = index(&["job offer", "study permit", "family sponsorship"]);
        let once = idx.score(&tokenize("job"))[0];
        let twice = idx.score(&tokenize("job job"))[0];
        assert!((twice - 2.0 * once).abs() < 1e-12);
    }
}
