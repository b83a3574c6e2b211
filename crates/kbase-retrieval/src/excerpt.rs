//! Sentence-level excerpt selection.

use kbase_core::constants::{MAX_EXCERPTS_CEILING, MIN_SENTENCE_CHARS, MIN_TERM_CHARS};

/// Up to `min(limit, 8)` sentences of `body` that mention query words,
/// best first.
///
/// A sentence scores one point per distinct query word (more than two
/// characters) it contains as a case-insensitive substring. Sentences of
/// twenty characters or fewer are never returned. Equal scores keep body
/// order.
pub fn extract_excerpts(body: &str, query: &str, limit: usize) -> Vec<String> {
    let cap = limit.min(MAX_EXCERPTS_CEILING);
    if cap == 0 {
        return Vec::new();
    }

    let words = query_words(query);
    if words.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<(usize, &str)> = body
        .split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| s.chars().count() > MIN_SENTENCE_CHARS)
        .filter_map(|sentence| {
            let lower = sentence.to_lowercase();
            let score = words.iter().filter(|w| lower.contains(w.as_str())).count();
            (score > 0).then_some((score, sentence))
        })
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored
        .into_iter()
        .take(cap)
        .map(|(_, sentence)| sentence.to_string())
        .collect()
}

fn query_words(query: &str) -> Vec<String> {
    let mut words: Vec<String> = Vec::new();
    for word in query.to_lowercase().split_whitespace() {
        if word.chars().count() > MIN_TERM_CHARS && !words.iter().any(|w| w == word) {
            words.push(word.to_string());
        }
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = "Express Entry manages applications for skilled workers. \
        Candidates receive a CRS score based on age and language. \
        Short one. \
        Invitations are issued in regular draws by the department! \
        Skilled workers with a job offer and strong language results score higher?";

    #[test]
    fn ranks_by_distinct_word_overlap() {
        let excerpts = extract_excerpts(BODY, "skilled workers language", 5);
        assert_eq!(
            excerpts[0],
            "Skilled workers with a job offer and strong language results score higher"
        );
        assert_eq!(excerpts.len(), 3);
    }

    #[test]
    fn ties_keep_body_order() {
        let excerpts = extract_excerpts(BODY, "draws score", 5);
        assert_eq!(
            excerpts,
            vec![
                "Candidates receive a CRS score based on age and language",
                "Invitations are issued in regular draws by the department",
                "Skilled workers with a job offer and strong language results score higher",
            ]
        );
    }

    #[test]
    fn short_fragments_are_ignored() {
        assert!(extract_excerpts(BODY, "short", 5).is_empty());
    }

    #[test]
    fn limit_is_respected() {
        assert_eq!(extract_excerpts(BODY, "skilled language", 1).len(), 1);
        assert!(extract_excerpts(BODY, "skilled", 0).is_empty());
    }

    #[test]
    fn hard_ceiling_applies_over_limit() {
        let body = (0..20)
            .map(|i| format!("Sentence number {i} mentions permits"))
            .collect::<Vec<_>>()
            .join(". ");
        assert_eq!(extract_excerpts(&body, "permits", 50).len(), MAX_EXCERPTS_CEILING);
    }

    #[test]
    fn repeated_query_words_count_once() {
        let a = extract_excerpts(BODY, "invitations", 5);
        let b = extract_excerpts(BODY, "invitations invitations", 5);
        assert_eq!(a, b);
    }
}
