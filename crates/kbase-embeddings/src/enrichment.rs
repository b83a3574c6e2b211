use kbase_core::models::DocumentType;

/// Build the text embedded for a document: an upper-cased type tag, the
/// title, a blank line, then the body.
pub fn prepare_text_for_embedding(
    title: &str,
    body: &str,
    doc_type: Option<DocumentType>,
) -> String {
    let prefix = doc_type
        .map(|t| format!("[{}] ", t.as_str().to_uppercase()))
        .unwrap_or_default();
    format!("{prefix}{title}\n\n{body}").trim().to_string()
}
