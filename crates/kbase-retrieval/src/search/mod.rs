//! Dynamic-threshold search.
//!
//! Every expanded query is scored once; the thresholds are then walked from
//! strictest to loosest, merging per-query hits by document with the best
//! score kept. The walk stops at the first threshold whose merged set is
//! large enough, otherwise the loosest threshold's set is returned.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use kbase_core::config::RetrievalConfig;
use kbase_core::errors::RetrievalError;
use kbase_core::models::ScoredResult;
use kbase_core::{KbaseError, KbaseResult};

use crate::corpus::Corpus;
use crate::ranking::Ranker;

/// Merged results plus the threshold that produced them.
#[derive(Debug, Clone, Default)]
pub struct SearchOutcome {
    /// Descending by score, at most `max_results` long.
    pub results: Vec<ScoredResult>,
    /// `None` when no threshold was tried.
    pub threshold: Option<f64>,
    /// Queries skipped because the ranker failed on them.
    pub failed_queries: usize,
}

#[derive(Debug, Clone)]
pub struct ThresholdSearch {
    fallback_threshold: f64,
    min_merged_results: usize,
}

impl ThresholdSearch {
    pub fn new(config: &RetrievalConfig) -> Self {
        Self {
            fallback_threshold: config.fallback_threshold,
            min_merged_results: config.min_merged_results,
        }
    }

    /// `[initial, fallback, min]`, keeping only values strictly below the
    /// previous step.
    pub fn ladder(&self, initial: f64, min: f64) -> Vec<f64> {
        let mut steps = vec![initial];
        for candidate in [self.fallback_threshold, min] {
            if steps.last().is_some_and(|last| candidate < *last) {
                steps.push(candidate);
            }
        }
        steps
    }

    pub async fn search<R: Ranker>(
        &self,
        ranker: &R,
        queries: &[String],
        corpus: &Corpus,
        max_results: usize,
        initial_threshold: f64,
        min_threshold: f64,
    ) -> KbaseResult<SearchOutcome> {
        let ladder = self.ladder(initial_threshold, min_threshold);
        self.search_at(ranker, queries, corpus, max_results, &ladder)
            .await
    }

    /// Walk an explicit threshold sequence.
    ///
    /// # Errors
    /// Precondition violations and misaligned ranker output abort the
    /// search. Any other ranker failure skips that query; only when every
    /// query failed is the last failure returned.
    pub async fn search_at<R: Ranker>(
        &self,
        ranker: &R,
        queries: &[String],
        corpus: &Corpus,
        max_results: usize,
        thresholds: &[f64],
    ) -> KbaseResult<SearchOutcome> {
        let (scored, failed_queries) = score_queries(ranker, queries, corpus).await?;

        let mut outcome = SearchOutcome {
            failed_queries,
            ..SearchOutcome::default()
        };
        let mut merged = Vec::new();
        for &threshold in thresholds {
            merged = merge_at_threshold(&scored, threshold, max_results);
            outcome.threshold = Some(threshold);
            debug!(
                ranker = ranker.name(),
                threshold,
                merged = merged.len(),
                "threshold step"
            );
            if merged.len() >= self.min_merged_results {
                break;
            }
        }

        merged.truncate(max_results);
        outcome.results = merged
            .into_iter()
            .filter_map(|(pos, score)| corpus.get(pos).map(|doc| doc.to_scored(score)))
            .collect();
        Ok(outcome)
    }
}

/// Hits of every query at `threshold`, each query limited to its own best
/// `max_results`, merged by corpus position with the maximum score kept.
/// Returned descending by score; ties keep corpus order.
pub fn merge_at_threshold(
    scored: &[Vec<Option<f64>>],
    threshold: f64,
    max_results: usize,
) -> Vec<(usize, f64)> {
    let mut merged: BTreeMap<usize, f64> = BTreeMap::new();
    for scores in scored {
        let mut hits: Vec<(usize, f64)> = scores
            .iter()
            .enumerate()
            .filter_map(|(pos, &s)| s.filter(|s| *s >= threshold).map(|s| (pos, s)))
            .collect();
        sort_descending(&mut hits);
        hits.truncate(max_results);

        for (pos, score) in hits {
            merged
                .entry(pos)
                .and_modify(|best| *best = best.max(score))
                .or_insert(score);
        }
    }
    let mut merged: Vec<(usize, f64)> = merged.into_iter().collect();
    sort_descending(&mut merged);
    merged
}

fn sort_descending(hits: &mut [(usize, f64)]) {
    hits.sort_by(|a, b| b.1.total_cmp(&a.1));
}

async fn score_queries<R: Ranker>(
    ranker: &R,
    queries: &[String],
    corpus: &Corpus,
) -> KbaseResult<(Vec<Vec<Option<f64>>>, usize)> {
    let mut scored = Vec::with_capacity(queries.len());
    let mut last_error: Option<KbaseError> = None;
    let mut failed = 0;

    for query in queries {
        match ranker.score(query, corpus).await {
            Ok(scores) if scores.len() != corpus.len() => {
                return Err(RetrievalError::MisalignedScores {
                    ranker: ranker.name().to_string(),
                    expected: corpus.len(),
                    actual: scores.len(),
                }
                .into());
            }
            Ok(scores) => scored.push(scores),
            Err(e) if e.is_precondition_violation() => return Err(e),
            Err(e) => {
                warn!(ranker = ranker.name(), query = %query, error = %e, "skipping query variant");
                failed += 1;
                last_error = Some(e);
            }
        }
    }

    match last_error {
        Some(e) if scored.is_empty() => Err(e),
        _ => Ok((scored, failed)),
    }
}
