//! Action descriptors and display-ready launcher results.
//!
//! # Responsibility
//! - Describe the one operation a selected result triggers.
//! - Carry everything the host needs to render a result row.
//!
//! # Invariants
//! - An action descriptor is consumed once by the executor.
//! - Informational results carry no action.

use serde::{Deserialize, Serialize};

/// Operation to perform once the user selects a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActionDescriptor {
    /// Upsert `key -> value`, then copy `value`.
    Save { key: String, value: String },
    /// Copy `value` to the clipboard.
    Copy { value: String },
    /// Remove `key` from the store.
    Delete { key: String },
}

impl ActionDescriptor {
    /// Stable lowercase name, also used as the JSON-RPC method.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Save { .. } => "save",
            Self::Copy { .. } => "copy",
            Self::Delete { .. } => "delete",
        }
    }
}

/// `(key, value)` pair behind a displayed result, echoed back for context actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetContext {
    pub key: String,
    pub value: String,
}

impl SnippetContext {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Display-ready entry returned to the host launcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultItem {
    pub title: String,
    pub subtitle: String,
    pub icon_path: String,
    /// Present for entries that support context actions.
    pub context: Option<SnippetContext>,
    /// `None` for informational entries (errors, hints).
    pub action: Option<ActionDescriptor>,
}

impl ResultItem {
    /// Returns whether selecting this entry does anything.
    pub fn is_actionable(&self) -> bool {
        self.action.is_some()
    }
}
