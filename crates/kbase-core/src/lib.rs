//! # kbase-core
//!
//! Foundation crate for the kbase knowledge retrieval engine.
//! Defines the document and result types, the collaborator traits
//! (document store, embedding store, embedding provider, settings store),
//! errors, config, and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{KbaseConfig, RetrievalSettings};
pub use errors::{KbaseError, KbaseResult};
pub use models::{DocumentType, RetrievalContext, ScoredResult, SourceRef, StoredDocument};
