//! Snippet domain model.
//!
//! # Responsibility
//! - Define the canonical key/value record owned by the store.
//! - Normalize keys before they reach storage or lookups.
//!
//! # Invariants
//! - `key` is trimmed and non-empty.
//! - `value` is arbitrary text and may be empty.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validation errors for snippet invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnippetValidationError {
    /// Key is empty or whitespace-only.
    EmptyKey,
}

impl Display for SnippetValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyKey => write!(f, "snippet key must not be empty"),
        }
    }
}

impl Error for SnippetValidationError {}

/// Persisted key/value text pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SnippetRecord")]
pub struct Snippet {
    /// Unique, trimmed lookup key.
    pub key: String,
    /// Stored text, copied to the clipboard on selection.
    pub value: String,
}

impl Snippet {
    /// Creates a snippet after trimming `key`.
    ///
    /// `value` is stored verbatim.
    pub fn new(
        key: impl AsRef<str>,
        value: impl Into<String>,
    ) -> Result<Self, SnippetValidationError> {
        let key = normalize_key(key.as_ref())?;
        Ok(Self {
            key: key.to_string(),
            value: value.into(),
        })
    }
}

/// Trims `raw` and rejects empty keys.
pub fn normalize_key(raw: &str) -> Result<&str, SnippetValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(SnippetValidationError::EmptyKey);
    }
    Ok(trimmed)
}

#[derive(Deserialize)]
struct SnippetRecord {
    key: String,
    value: String,
}

impl TryFrom<SnippetRecord> for Snippet {
    type Error = SnippetValidationError;

    fn try_from(record: SnippetRecord) -> Result<Self, Self::Error> {
        Snippet::new(record.key, record.value)
    }
}
