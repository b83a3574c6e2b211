mod document;
mod retrieval_context;
mod scored_result;

pub use document::{DocumentType, StoredDocument};
pub use retrieval_context::{
    AugmentedPrompt, KnowledgeSearchHit, KnowledgeSearchResponse, RetrievalContext, SourceRef,
};
pub use scored_result::ScoredResult;
