//! Output side of retrieval: the context block, the augmented system
//! prompt, and the knowledge-search tool payload.

pub mod context;
pub mod prompt;
pub mod tool;

pub use context::{AssembledContext, ContextAssembler, ExcerptedResult};
pub use prompt::build_augmented_prompt;
pub use tool::knowledge_search_response;
