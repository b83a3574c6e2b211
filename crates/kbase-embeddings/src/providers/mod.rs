mod hashing;
mod openai;

pub use hashing::HashingProvider;
pub use openai::OpenAiEmbeddingProvider;
