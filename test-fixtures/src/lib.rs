//! Test fixture loader for kbase corpora and golden retrieval scenarios.
//!
//! Fixtures are JSON files under this crate's directory. Helpers panic on
//! missing or malformed files; they are for tests only.

use std::path::PathBuf;

use kbase_core::models::StoredDocument;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Owner id used for fixture corpora.
pub const FIXTURE_OWNER: &str = "owner-fixture";

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    // From a crate under crates/, walk up to the workspace root.
    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// Load a corpus file: a JSON array of stored documents.
pub fn load_corpus(relative_path: &str) -> Vec<StoredDocument> {
    load_fixture(relative_path)
}

/// The immigration-domain sample corpus.
pub fn immigration_corpus() -> Vec<StoredDocument> {
    load_corpus("corpus/immigration.json")
}

/// A query whose best match is known in advance.
#[derive(Debug, Clone, Deserialize)]
pub struct TitleQuery {
    pub query: String,
    pub threshold: Option<f64>,
    /// `None` when the query must find nothing.
    pub expected_first: Option<String>,
}

pub fn title_queries() -> Vec<TitleQuery> {
    load_fixture("golden/retrieval/title_queries.json")
}
