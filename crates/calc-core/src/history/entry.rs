//! History record type and its persisted form.

use serde::{Deserialize, Deserializer, Serialize};

use crate::engine::Commit;
use crate::numeric::format_number;

/// One completed computation.
///
/// `result` is display text, including the `"Error"` sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Expression as typed (`expr` in older data)
    #[serde(alias = "expr")]
    pub expression: String,

    /// Result as displayed (older data may hold a bare number)
    #[serde(deserialize_with = "result_text")]
    pub result: String,
}

impl HistoryEntry {
    pub fn new(expression: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            result: result.into(),
        }
    }
}

impl From<Commit> for HistoryEntry {
    fn from(commit: Commit) -> Self {
        Self {
            expression: commit.expression,
            result: commit.result,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredResult {
    Text(String),
    Number(f64),
}

fn result_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match StoredResult::deserialize(deserializer)? {
        StoredResult::Text(text) => text,
        StoredResult::Number(value) => format_number(value),
    })
}
