//! Query expansion: phrase normalization, keyword fragments, and
//! cross-language translation, driven by `ExpansionConfig` tables.

pub mod query_expander;

pub use query_expander::QueryExpander;
