use kbase_core::config::{ExpansionConfig, PhraseRule};
use kbase_core::constants::MIN_TERM_CHARS;
use tracing::debug;

/// Turns one user query into an ordered, deduplicated list of variants.
///
/// Order: original, normalized, keywords, bigrams, translations. The
/// original query is always first.
#[derive(Debug, Clone)]
pub struct QueryExpander {
    config: ExpansionConfig,
}

impl QueryExpander {
    pub fn new(config: ExpansionConfig) -> Self {
        Self { config }
    }

    pub fn expand(&self, query: &str) -> Vec<String> {
        let normalized = self.normalize(query);
        let mut variants = vec![query.to_string(), normalized.clone()];

        let base = normalized.to_lowercase();
        let words: Vec<&str> = base
            .split_whitespace()
            .filter(|w| w.chars().count() > MIN_TERM_CHARS)
            .collect();

        if words.len() > 1 {
            variants.extend(words.iter().map(|w| w.to_string()));
            if words.len() > 2 {
                variants.extend(words.windows(2).map(|pair| pair.join(" ")));
            }
        }

        variants.extend(
            self.config
                .translations
                .iter()
                .filter(|rule| base.contains(rule.trigger.as_str()))
                .map(|rule| rule.expansion.clone()),
        );

        let expanded = dedup_preserving_order(variants);
        debug!(query, variants = expanded.len(), "expanded query");
        expanded
    }

    /// The first normalization rule whose trigger occurs in the lowercased
    /// query replaces it. Without a match the query is returned as is.
    pub fn normalize(&self, query: &str) -> String {
        let lower = query.trim().to_lowercase();
        match first_match(&self.config.normalizations, &lower) {
            Some(rule) => rule.expansion.clone(),
            None => query.to_string(),
        }
    }
}

fn first_match<'a>(rules: &'a [PhraseRule], text: &str) -> Option<&'a PhraseRule> {
    rules.iter().find(|rule| text.contains(rule.trigger.as_str()))
}

fn dedup_preserving_order(items: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> QueryExpander {
        QueryExpander::new(ExpansionConfig::empty())
    }

    #[test]
    fn single_word_query_is_not_split() {
        assert_eq!(plain().expand("immigration"), vec!["immigration"]);
    }

    #[test]
    fn two_words_add_keywords_only() {
        assert_eq!(
            plain().expand("Work Permit"),
            vec!["Work Permit", "work", "permit"]
        );
    }

    #[test]
    fn three_words_add_bigrams() {
        assert_eq!(
            plain().expand("skilled worker program"),
            vec![
                "skilled worker program",
                "skilled",
                "worker",
                "program",
                "skilled worker",
                "worker program",
            ]
        );
    }

    #[test]
    fn short_words_are_not_keywords() {
        assert_eq!(plain().expand("go to it"), vec!["go to it"]);
    }

    #[test]
    fn normalization_uses_first_matching_rule() {
        let expander = QueryExpander::new(ExpansionConfig::default());
        let normalized = expander.normalize("Express Entry là gì?");
        assert_eq!(normalized, "chương trình Express Entry Canada");
    }

    #[test]
    fn translations_follow_table_order() {
        let expander = QueryExpander::new(ExpansionConfig::default());
        let variants = expander.expand("định cư canada");
        // "canada" is the first normalization trigger found
        assert_eq!(variants[0], "định cư canada");
        assert_eq!(variants[1], "thông tin về Canada định cư");
        assert_eq!(variants.last().map(String::as_str), Some("immigration"));
        assert_eq!(variants.iter().filter(|v| *v == "canada").count(), 1);
    }

    #[test]
    fn output_is_deduplicated() {
        let variants = plain().expand("visa visa visa");
        assert_eq!(variants, vec!["visa visa visa", "visa", "visa visa"]);
    }
}
