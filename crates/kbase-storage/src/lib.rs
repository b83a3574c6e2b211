//! # kbase-storage
//!
//! Owner-scoped document storage backing `IDocumentStore`. Documents carry
//! an active flag; retrieval only ever sees active documents of the
//! requesting owner.

mod memory_store;

pub use memory_store::InMemoryDocumentStore;
