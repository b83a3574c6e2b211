/// Hard ceiling on excerpts per source, applied regardless of settings.
pub const MAX_EXCERPTS_CEILING: usize = 8;

/// Sentences at or below this many characters are never used as excerpts.
pub const MIN_SENTENCE_CHARS: usize = 20;

/// Terms at or below this many characters are dropped by the tokenizer.
pub const MIN_TERM_CHARS: usize = 2;

/// Number of times title terms are repeated in a document's token stream.
pub const TITLE_WEIGHT: usize = 3;

/// Width of the separator line between documents in the context block.
pub const CONTEXT_SEPARATOR_WIDTH: usize = 80;

/// Context summary reported when nothing relevant was found.
pub const NO_RESULTS_SUMMARY: &str = "No relevant content found in knowledge base";

/// Context summary reported when retrieval hit an infrastructure fault.
pub const ERROR_SUMMARY: &str = "Error retrieving context from knowledge base";
