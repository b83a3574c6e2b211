//! # kbase-embeddings
//!
//! Implementations of `IEmbeddingProvider` plus the codec for vectors as
//! the document store persists them (JSON float arrays).
//!
//! - `OpenAiEmbeddingProvider`: any OpenAI-compatible `/embeddings` API,
//!   with bounded retries.
//! - `HashingProvider`: deterministic, offline, always available.
//!
//! `backfill_embeddings` fills in the vectors the semantic ranker reads.

pub mod backfill;
pub mod codec;
pub mod enrichment;
pub mod providers;

pub use backfill::{backfill_embeddings, BackfillOutcome};
pub use codec::{decode_vector, encode_vector};
pub use enrichment::prepare_text_for_embedding;
pub use providers::{HashingProvider, OpenAiEmbeddingProvider};
