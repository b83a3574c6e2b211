use serde::{Deserialize, Serialize};

use super::document::DocumentType;
use crate::constants::{ERROR_SUMMARY, NO_RESULTS_SUMMARY};

/// One attributable source behind a retrieval context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceRef {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub similarity: f64,
    pub excerpts: Vec<String>,
}

/// Output of a retrieval call. Always a valid value: failures degrade to
/// the empty shape instead of surfacing as errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetrievalContext {
    pub has_relevant_content: bool,
    /// Formatted block for prompt injection.
    pub context: String,
    /// One-line human-readable trace of what was found.
    pub context_summary: String,
    /// Sorted by descending similarity.
    pub sources: Vec<SourceRef>,
    pub total_sources: usize,
    pub average_similarity: f64,
}

impl RetrievalContext {
    /// Nothing in the knowledge base matched.
    pub fn no_results() -> Self {
        Self::empty(NO_RESULTS_SUMMARY)
    }

    /// Retrieval failed on an infrastructure fault.
    pub fn failed() -> Self {
        Self::empty(ERROR_SUMMARY)
    }

    fn empty(summary: &str) -> Self {
        Self {
            has_relevant_content: false,
            context: String::new(),
            context_summary: summary.to_string(),
            sources: Vec::new(),
            total_sources: 0,
            average_similarity: 0.0,
        }
    }
}

/// A system prompt after knowledge base augmentation, with the context
/// that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AugmentedPrompt {
    pub prompt: String,
    pub context: RetrievalContext,
}

/// Payload returned to a model that searched the knowledge base as a tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeSearchResponse {
    pub results: Vec<KnowledgeSearchHit>,
    pub message: String,
    pub context: String,
    pub total_sources: usize,
    pub average_similarity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeSearchHit {
    pub id: String,
    pub title: String,
    /// Excerpts joined with `" ... "`, or `"title (type)"` when there are none.
    pub content: String,
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub similarity: f64,
    pub excerpts: Vec<String>,
}
