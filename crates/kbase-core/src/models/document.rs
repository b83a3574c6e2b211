use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// The closed set of knowledge base document kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    Prompt,
    Template,
    #[default]
    Document,
    Config,
}

impl DocumentType {
    pub const ALL: [DocumentType; 4] = [
        DocumentType::Prompt,
        DocumentType::Template,
        DocumentType::Document,
        DocumentType::Config,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Prompt => "prompt",
            DocumentType::Template => "template",
            DocumentType::Document => "document",
            DocumentType::Config => "config",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocumentType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::InvalidValue {
                field: "document.type".into(),
                reason: format!("unknown document type '{s}'"),
            })
    }
}

/// A document as returned by the document store for one owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredDocument {
    pub id: String,
    pub title: String,
    pub body: String,
    #[serde(rename = "type", default)]
    pub doc_type: DocumentType,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Persisted embedding as a JSON float array, if one was generated.
    #[serde(default)]
    pub embedding: Option<String>,
}

impl StoredDocument {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
        doc_type: DocumentType,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            body: body.into(),
            doc_type,
            category: None,
            tags: Vec::new(),
            embedding: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_embedding(mut self, encoded: impl Into<String>) -> Self {
        self.embedding = Some(encoded.into());
        self
    }

    /// Category with empty strings treated as absent.
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.trim().is_empty())
    }
}
