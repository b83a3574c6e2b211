//! System prompt augmentation.

use kbase_core::models::RetrievalContext;

use super::context::percent;

/// Append the knowledge base block to `base_prompt`.
///
/// Returns `base_prompt` unchanged when `context` has no relevant content.
/// Pure: equal inputs give byte-identical output.
pub fn build_augmented_prompt(base_prompt: &str, context: &RetrievalContext, query: &str) -> String {
    if !context.has_relevant_content {
        return base_prompt.to_string();
    }
    tracing::trace!(query, sources = context.total_sources, "augmenting prompt");

    let sources_info = context
        .sources
        .iter()
        .map(|s| {
            let category = s
                .category
                .as_deref()
                .filter(|c| !c.is_empty())
                .map(|c| format!(", {c}"))
                .unwrap_or_default();
            format!(
                "• \"{}\" ({}{}) - {} match",
                s.title,
                s.doc_type,
                category,
                percent(s.similarity)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let top_title = context
        .sources
        .first()
        .map(|s| s.title.as_str())
        .unwrap_or_default();

    format!(
        "{base_prompt}

KNOWLEDGE BASE CONTEXT ({summary}):

{body}

---

CONTEXT METADATA:
{sources_info}
Average relevance: {average}

---

IMPORTANT INSTRUCTIONS FOR USING THIS CONTEXT:
1. **PRIMARY SOURCE**: Use the above context as your PRIMARY source of information
2. **ATTRIBUTION**: Always cite specific documents when referencing them (e.g., \"According to your document '{top_title}'...\")
3. **RELEVANCE**: Focus on the most relevant excerpts and information
4. **SUPPLEMENTATION**: If context doesn't fully answer the question, supplement with general knowledge but clearly distinguish between sources
5. **TRANSPARENCY**: Be explicit about what comes from their knowledge base vs. general knowledge
6. **ACCURACY**: If there are contradictions between documents, acknowledge them and ask for clarification
",
        summary = context.context_summary,
        body = context.context,
        average = percent(context.average_similarity),
    )
}
