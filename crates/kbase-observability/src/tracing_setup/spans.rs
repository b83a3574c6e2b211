//! Span definitions per operation: retrieval, embedding.
//!
//! Each span carries its identifying fields via the `tracing` crate.

/// Create a retrieval span.
#[macro_export]
macro_rules! retrieval_span {
    ($query:expr, $owner:expr) => {
        tracing::info_span!("kbase.retrieval", query = %$query, owner = %$owner)
    };
}

/// Create an embedding span.
#[macro_export]
macro_rules! embedding_span {
    ($provider:expr, $dimension:expr) => {
        tracing::info_span!("kbase.embedding", provider = %$provider, dimension = $dimension)
    };
}

