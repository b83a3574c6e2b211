//! Default values for every configuration section.

// Live retrieval settings.
pub const DEFAULT_THRESHOLD: f64 = 0.6;
pub const DEFAULT_MIN_THRESHOLD: f64 = 0.35;
pub const DEFAULT_MAX_RESULTS: usize = 5;
pub const DEFAULT_MAX_EXCERPTS: usize = 3;
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

// Retrieval engine.
pub const DEFAULT_FALLBACK_THRESHOLD: f64 = 0.45;
pub const DEFAULT_MIN_MERGED_RESULTS: usize = 2;
pub const DEFAULT_SUMMARY_MAX_CHARS: usize = 150;
pub const DEFAULT_BASIC_THRESHOLD: f64 = 0.65;
pub const DEFAULT_BASIC_MAX_RESULTS: usize = 5;
pub const DEFAULT_TOOL_THRESHOLD: f64 = 0.6;
pub const DEFAULT_TOOL_MAX_RESULTS: usize = 5;

// Embedding provider.
pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-3-small";
pub const DEFAULT_EMBEDDING_ENDPOINT: &str = "https://api.openai.com/v1";
pub const DEFAULT_EMBEDDING_API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 1536;
pub const DEFAULT_EMBEDDING_MAX_RETRIES: u32 = 2;
pub const DEFAULT_EMBEDDING_RETRY_BACKOFF_MS: u64 = 250;
pub const DEFAULT_EMBEDDING_TIMEOUT_SECS: u64 = 30;

// Observability.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// Environment variables that override live settings.
pub const ENV_THRESHOLD: &str = "KBASE_THRESHOLD";
pub const ENV_MIN_THRESHOLD: &str = "KBASE_MIN_THRESHOLD";
pub const ENV_MAX_RESULTS: &str = "KBASE_MAX_RESULTS";
pub const ENV_MAX_EXCERPTS: &str = "KBASE_MAX_EXCERPTS";
pub const ENV_TEMPERATURE: &str = "KBASE_TEMPERATURE";
