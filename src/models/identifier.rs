use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::fmt;

/// Entity identifier as stored in documents: a string or a JSON number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identifier {
    Text(String),
    Number(Number),
}

impl Identifier {
    /// Canonical lookup key; `1` and `"1"` share the key `1`.
    ///
    /// Empty strings have no key.
    pub fn key(&self) -> Option<String> {
        match self {
            Identifier::Text(text) if text.is_empty() => None,
            other => Some(other.to_string()),
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Text(text) => f.write_str(text),
            Identifier::Number(number) => write!(f, "{}", number),
        }
    }
}

impl From<String> for Identifier {
    fn from(text: String) -> Self {
        Identifier::Text(text)
    }
}

impl From<&str> for Identifier {
    fn from(text: &str) -> Self {
        Identifier::Text(text.to_string())
    }
}

impl From<u64> for Identifier {
    fn from(number: u64) -> Self {
        Identifier::Number(number.into())
    }
}

impl From<i64> for Identifier {
    fn from(number: i64) -> Self {
        Identifier::Number(number.into())
    }
}
