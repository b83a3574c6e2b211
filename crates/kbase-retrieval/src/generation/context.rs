//! Context assembly: per-document blocks, the one-line trace, and the
//! source list.

use tracing::debug;

use kbase_core::constants::CONTEXT_SEPARATOR_WIDTH;
use kbase_core::models::{DocumentType, RetrievalContext, ScoredResult, SourceRef};

/// A ranked result with the excerpts selected from its body.
#[derive(Debug, Clone)]
pub struct ExcerptedResult {
    pub result: ScoredResult,
    /// Best first.
    pub excerpts: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssembledContext {
    pub context: String,
    pub context_summary: String,
    pub sources: Vec<SourceRef>,
}

impl AssembledContext {
    pub fn average_similarity(&self) -> f64 {
        if self.sources.is_empty() {
            return 0.0;
        }
        self.sources.iter().map(|s| s.similarity).sum::<f64>() / self.sources.len() as f64
    }
}

impl From<AssembledContext> for RetrievalContext {
    fn from(assembled: AssembledContext) -> Self {
        if assembled.sources.is_empty() {
            return RetrievalContext::no_results();
        }
        let average_similarity = assembled.average_similarity();
        RetrievalContext {
            has_relevant_content: true,
            total_sources: assembled.sources.len(),
            average_similarity,
            context: assembled.context,
            context_summary: assembled.context_summary,
            sources: assembled.sources,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ContextAssembler {
    summary_max_chars: usize,
}

impl ContextAssembler {
    pub fn new(summary_max_chars: usize) -> Self {
        Self { summary_max_chars }
    }

    /// Results must already be in final order.
    pub fn assemble(&self, results: Vec<ExcerptedResult>, query: &str) -> AssembledContext {
        let separator = format!("\n\n{}\n\n", "─".repeat(CONTEXT_SEPARATOR_WIDTH));

        let blocks: Vec<String> = results.iter().map(|r| self.block(r)).collect();
        let context_summary = summarize_sources(&results);
        debug!(query, sources = results.len(), summary = %context_summary, "assembled context");

        let sources = results
            .into_iter()
            .map(|ExcerptedResult { result, excerpts }| SourceRef {
                id: result.id,
                title: result.title,
                doc_type: result.doc_type,
                category: result.category,
                tags: result.tags,
                similarity: result.score,
                excerpts,
            })
            .collect();

        AssembledContext {
            context: blocks.join(&separator),
            context_summary,
            sources,
        }
    }

    fn block(&self, item: &ExcerptedResult) -> String {
        let r = &item.result;
        format!(
            "**{}** ({})\n{}\nSummary: {}",
            r.title,
            r.doc_type,
            metadata_line(r),
            self.summary(&item.excerpts)
        )
    }

    /// The top excerpt, cut to `summary_max_chars` with a trailing ellipsis.
    pub fn summary(&self, excerpts: &[String]) -> String {
        let Some(top) = excerpts.first() else {
            return String::new();
        };
        if top.chars().count() <= self.summary_max_chars {
            return top.clone();
        }
        let keep = self.summary_max_chars.saturating_sub(3);
        let mut cut: String = top.chars().take(keep).collect();
        cut.push_str("...");
        cut
    }
}

fn metadata_line(r: &ScoredResult) -> String {
    let mut parts = Vec::with_capacity(3);
    if let Some(category) = r.category.as_deref().filter(|c| !c.is_empty()) {
        parts.push(format!("Category: {category}"));
    }
    if !r.tags.is_empty() {
        parts.push(format!("Tags: {}", r.tags.join(", ")));
    }
    parts.push(format!("Similarity: {}", percent(r.score)));
    parts.join(" | ")
}

pub(crate) fn percent(similarity: f64) -> String {
    format!("{:.1}%", similarity * 100.0)
}

/// `Found N relevant document(s) (types) from categories: a, b`.
fn summarize_sources(results: &[ExcerptedResult]) -> String {
    let mut types: Vec<DocumentType> = Vec::new();
    let mut categories: Vec<&str> = Vec::new();
    for r in results {
        if !types.contains(&r.result.doc_type) {
            types.push(r.result.doc_type);
        }
        if let Some(c) = r.result.category.as_deref().filter(|c| !c.is_empty()) {
            if !categories.contains(&c) {
                categories.push(c);
            }
        }
    }

    let n = results.len();
    let mut summary = format!("Found {n} relevant document{}", if n > 1 { "s" } else { "" });
    if !types.is_empty() {
        let names: Vec<&str> = types.iter().map(DocumentType::as_str).collect();
        summary.push_str(&format!(" ({})", names.join(", ")));
    }
    if !categories.is_empty() {
        summary.push_str(&format!(" from categories: {}", categories.join(", ")));
    }
    summary
}
