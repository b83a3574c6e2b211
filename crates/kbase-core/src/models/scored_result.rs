use serde::{Deserialize, Serialize};

use super::document::DocumentType;

/// A document that passed a ranker and a threshold.
///
/// `score` is ranker-specific: BM25 normalized by the best score of the
/// query (0, 1], or cosine similarity in [-1, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredResult {
    pub id: String,
    pub title: String,
    pub body: String,
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub score: f64,
}
