//! Term extraction shared by indexing and query processing.

use kbase_core::constants::{MIN_TERM_CHARS, TITLE_WEIGHT};

/// Lowercase, treat every non-word character as a separator, and drop
/// terms of two characters or fewer.
///
/// Word characters are Unicode alphanumerics and `_`.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|t| t.chars().count() > MIN_TERM_CHARS)
        .map(str::to_string)
        .collect()
}

/// Token stream for indexing: title terms repeated `TITLE_WEIGHT` times,
/// then body terms.
pub fn prepare_for_index(title: &str, body: &str) -> Vec<String> {
    let title_tokens = tokenize(title);
    let body_tokens = tokenize(body);

    let mut tokens = Vec::with_capacity(title_tokens.len() * TITLE_WEIGHT + body_tokens.len());
    for _ in 0..TITLE_WEIGHT {
        tokens.extend(title_tokens.iter().cloned());
    }
    tokens.extend(body_tokens);
    tokens
}
