//! # kbase-retrieval
//!
//! Finds the passages of an owner's knowledge base most relevant to a
//! query and assembles them into an attributable context block.
//!
//! Pipeline: tokenize → rank (BM25 or embeddings) → expand query →
//! threshold relaxation → excerpt → assemble. `RetrievalEngine` is the
//! only entry point callers need.

pub mod corpus;
pub mod engine;
pub mod excerpt;
pub mod expansion;
pub mod generation;
pub mod ranking;
pub mod search;
pub mod tokenizer;

pub use engine::{RetrievalEngine, RetrievalMode};
pub use generation::prompt::build_augmented_prompt;
