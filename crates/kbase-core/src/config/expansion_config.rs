use serde::{Deserialize, Serialize};

/// A substring-triggered rewrite. When `trigger` occurs in the lowercased
/// query, `expansion` is used (normalization) or appended (translation).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseRule {
    pub trigger: String,
    pub expansion: String,
}

impl PhraseRule {
    pub fn new(trigger: impl Into<String>, expansion: impl Into<String>) -> Self {
        Self {
            trigger: trigger.into(),
            expansion: expansion.into(),
        }
    }
}

/// Query expansion tables. Order is significant: normalization stops at the
/// first matching rule, translations are appended in table order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpansionConfig {
    pub normalizations: Vec<PhraseRule>,
    pub translations: Vec<PhraseRule>,
}

impl ExpansionConfig {
    /// Tables with no rules: expansion only adds keywords and bigrams.
    pub fn empty() -> Self {
        Self {
            normalizations: Vec::new(),
            translations: Vec::new(),
        }
    }
}

impl Default for ExpansionConfig {
    /// Vietnamese/English vocabulary for a Canadian immigration knowledge base.
    fn default() -> Self {
        Self {
            normalizations: vec![
                PhraseRule::new("năm", "Bạn đã sống và làm việc ở Canada bao nhiêu năm"),
                PhraseRule::new(
                    "bao nhiêu năm",
                    "Bạn đã sống và làm việc ở Canada bao nhiêu năm",
                ),
                PhraseRule::new("canada", "thông tin về Canada định cư"),
                PhraseRule::new("định cư", "thông tin về định cư Canada"),
                PhraseRule::new("express entry", "chương trình Express Entry Canada"),
                PhraseRule::new("pnp", "chương trình Provincial Nominee Program"),
                PhraseRule::new("việc làm", "tìm việc làm ở Canada"),
                PhraseRule::new("cv", "viết CV theo chuẩn Canada"),
            ],
            translations: vec![
                PhraseRule::new("định cư", "immigration"),
                PhraseRule::new("canada", "canada"),
                PhraseRule::new("việc làm", "job employment work"),
                PhraseRule::new("năm", "years year"),
                PhraseRule::new("kinh nghiệm", "experience"),
            ],
        }
    }
}
