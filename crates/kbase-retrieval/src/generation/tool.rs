//! Payload for a model that searches the knowledge base as a tool.

use kbase_core::models::{KnowledgeSearchHit, KnowledgeSearchResponse, RetrievalContext};

/// The message is the context summary, also for empty and failed retrievals.
pub fn knowledge_search_response(context: &RetrievalContext) -> KnowledgeSearchResponse {
    if !context.has_relevant_content {
        return KnowledgeSearchResponse {
            results: Vec::new(),
            message: context.context_summary.clone(),
            context: String::new(),
            total_sources: 0,
            average_similarity: 0.0,
        };
    }

    let results = context
        .sources
        .iter()
        .map(|s| KnowledgeSearchHit {
            id: s.id.clone(),
            title: s.title.clone(),
            content: if s.excerpts.is_empty() {
                format!("{} ({})", s.title, s.doc_type)
            } else {
                s.excerpts.join(" ... ")
            },
            doc_type: s.doc_type,
            category: s.category.clone(),
            tags: s.tags.clone(),
            similarity: s.similarity,
            excerpts: s.excerpts.clone(),
        })
        .collect();

    KnowledgeSearchResponse {
        results,
        message: context.context_summary.clone(),
        context: context.context.clone(),
        total_sources: context.total_sources,
        average_similarity: context.average_similarity,
    }
}
