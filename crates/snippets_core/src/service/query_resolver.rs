//! Query resolution for the launcher.
//!
//! # Responsibility
//! - Classify raw query text as a save or search intent.
//! - Merge ranked store hits with a clipboard-derived save suggestion.
//! - Build the delete entry offered as a context action.
//!
//! # Invariants
//! - A `:` in the trimmed query always means save, even when the key exists.
//! - The clipboard suggestion never appears when the exact term is already a hit.
//! - [`QueryResolver::resolve`] never returns an error; failures become one
//!   informational result.

use crate::clipboard::{read_text_or_empty, ClipboardPort};
use crate::config::SnippetsConfig;
use crate::logging::error_chain;
use crate::model::action::{ActionDescriptor, ResultItem, SnippetContext};
use crate::repo::snippet_repo::{RepoError, SnippetRepository};
use crate::search::key_search::KeySearchQuery;
use crate::service::preview::summarize;
use log::{debug, error};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Separator between key and value in a save query.
pub const KEY_VALUE_SEPARATOR: char = ':';

const SAVE_TITLE: &str = "Save Code Snippet";
const CLIPBOARD_SAVE_TITLE: &str = "Save from clipboard";
const DELETE_TITLE: &str = "Delete Code Snippet";
const ERROR_TITLE: &str = "Code Snippets Error";
const ERROR_SUBTITLE: &str = "Please, Verify and try again";
const EMPTY_KEY_SUBTITLE: &str = "Type a key before ':' to save a snippet";
const HIT_TITLE_PREFIX: &str = "⭐ ";
const HIT_SUBTITLE_HINT: &str = " (Enter to copy, Shift+Enter to delete)";

/// Classified purpose of a raw query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent<'q> {
    /// `key:value`, both sides trimmed. `key` may be empty.
    Save { key: &'q str, value: &'q str },
    /// Anything without a separator, trimmed.
    Search { term: &'q str },
}

/// Parses raw query text into an intent.
///
/// Returns `None` for blank input.
pub fn parse_intent(raw: &str) -> Option<Intent<'_>> {
    let text = raw.trim();
    if text.is_empty() {
        return None;
    }

    match text.split_once(KEY_VALUE_SEPARATOR) {
        Some((key, value)) => Some(Intent::Save {
            key: key.trim(),
            value: value.trim(),
        }),
        None => Some(Intent::Search { term: text }),
    }
}

/// Failure while computing results for a query.
#[derive(Debug)]
pub enum ResolutionError {
    /// Store could not be read.
    Store(RepoError),
}

impl Display for ResolutionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(_) => write!(f, "snippet lookup failed"),
        }
    }
}

impl Error for ResolutionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
        }
    }
}

impl From<RepoError> for ResolutionError {
    fn from(value: RepoError) -> Self {
        Self::Store(value)
    }
}

/// Resolves launcher queries against a store and clipboard.
pub struct QueryResolver<'a, R: SnippetRepository, C: ClipboardPort + ?Sized> {
    repo: &'a R,
    clipboard: &'a C,
    config: &'a SnippetsConfig,
}

impl<'a, R: SnippetRepository, C: ClipboardPort + ?Sized> QueryResolver<'a, R, C> {
    pub fn new(repo: &'a R, clipboard: &'a C, config: &'a SnippetsConfig) -> Self {
        Self {
            repo,
            clipboard,
            config,
        }
    }

    /// Resolves `raw` into display-ready results.
    ///
    /// Errors are logged and replaced by a single informational result.
    pub fn resolve(&self, raw: &str) -> Vec<ResultItem> {
        match self.try_resolve(raw) {
            Ok(items) => items,
            Err(err) => {
                error!(
                    "event=query_resolve module=service status=error query_len={} error={}",
                    raw.trim().chars().count(),
                    error_chain(&err)
                );
                vec![self.error_item()]
            }
        }
    }

    /// Resolves `raw`, surfacing store failures to the caller.
    pub fn try_resolve(&self, raw: &str) -> Result<Vec<ResultItem>, ResolutionError> {
        match parse_intent(raw) {
            None => Ok(Vec::new()),
            Some(Intent::Save { key, value }) => Ok(vec![self.save_item(key, value)]),
            Some(Intent::Search { term }) => self.search_items(term),
        }
    }

    /// Builds the context-action entry for a displayed result.
    ///
    /// Always exactly one delete entry, whatever the value holds.
    pub fn context_menu(&self, context: &SnippetContext) -> Vec<ResultItem> {
        vec![ResultItem {
            title: DELETE_TITLE.to_string(),
            subtitle: format!(
                "Key={}, Value={}",
                context.key,
                summarize(&context.value, self.config.clipboard_preview_chars)
            ),
            icon_path: self.config.icon_path.clone(),
            context: None,
            action: Some(ActionDescriptor::Delete {
                key: context.key.clone(),
            }),
        }]
    }

    fn save_item(&self, key: &str, value: &str) -> ResultItem {
        if key.is_empty() {
            return ResultItem {
                title: SAVE_TITLE.to_string(),
                subtitle: EMPTY_KEY_SUBTITLE.to_string(),
                icon_path: self.config.icon_path.clone(),
                context: None,
                action: None,
            };
        }

        ResultItem {
            title: SAVE_TITLE.to_string(),
            subtitle: format!("Key={key}, Value={value}"),
            icon_path: self.config.icon_path.clone(),
            context: Some(SnippetContext::new(key, value)),
            action: Some(ActionDescriptor::Save {
                key: key.to_string(),
                value: value.to_string(),
            }),
        }
    }

    fn search_items(&self, term: &str) -> Result<Vec<ResultItem>, ResolutionError> {
        let query = KeySearchQuery {
            text: term.to_string(),
            limit: self.config.search_limit,
        };
        let hits = self.repo.search(&query)?;
        let has_exact_key = hits.iter().any(|hit| hit.snippet.key == term);

        let mut items = hits
            .into_iter()
            .map(|hit| {
                let snippet = hit.snippet;
                ResultItem {
                    title: format!("{HIT_TITLE_PREFIX}{}", snippet.key),
                    subtitle: format!(
                        "{}{HIT_SUBTITLE_HINT}",
                        summarize(&snippet.value, self.config.subtitle_preview_chars)
                    ),
                    icon_path: self.config.icon_path.clone(),
                    context: Some(SnippetContext::new(
                        snippet.key.as_str(),
                        snippet.value.as_str(),
                    )),
                    action: Some(ActionDescriptor::Copy {
                        value: snippet.value,
                    }),
                }
            })
            .collect::<Vec<_>>();
        let hit_count = items.len();

        let mut suggested = false;
        if !has_exact_key {
            let clipboard_text = read_text_or_empty(self.clipboard);
            if !clipboard_text.is_empty() {
                items.push(self.clipboard_item(term, clipboard_text));
                suggested = true;
            }
        }

        debug!(
            "event=query_resolve module=service status=ok intent=search query_len={} hits={} clipboard_suggestion={}",
            term.chars().count(),
            hit_count,
            suggested
        );
        Ok(items)
    }

    fn clipboard_item(&self, term: &str, clipboard_text: String) -> ResultItem {
        ResultItem {
            title: CLIPBOARD_SAVE_TITLE.to_string(),
            subtitle: format!(
                "Key={term}, Value={}",
                summarize(&clipboard_text, self.config.clipboard_preview_chars)
            ),
            icon_path: self.config.icon_path.clone(),
            context: Some(SnippetContext::new(term, clipboard_text.as_str())),
            action: Some(ActionDescriptor::Save {
                key: term.to_string(),
                value: clipboard_text,
            }),
        }
    }

    fn error_item(&self) -> ResultItem {
        ResultItem {
            title: ERROR_TITLE.to_string(),
            subtitle: ERROR_SUBTITLE.to_string(),
            icon_path: self.config.icon_path.clone(),
            context: None,
            action: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_intent, Intent};

    #[test]
    fn blank_input_has_no_intent() {
        assert_eq!(parse_intent(""), None);
        assert_eq!(parse_intent(" \t\n "), None);
    }

    #[test]
    fn first_colon_splits_key_and_value() {
        assert_eq!(
            parse_intent("  url : https://example.com  "),
            Some(Intent::Save {
                key: "url",
                value: "https://example.com",
            })
        );
    }

    #[test]
    fn trailing_colon_saves_empty_value() {
        assert_eq!(
            parse_intent("blank:"),
            Some(Intent::Save {
                key: "blank",
                value: "",
            })
        );
    }

    #[test]
    fn text_without_separator_is_a_search() {
        assert_eq!(
            parse_intent("  deploy cmd "),
            Some(Intent::Search { term: "deploy cmd" })
        );
    }
}
