//! Action execution for selected launcher results.
//!
//! # Responsibility
//! - Dispatch each [`ActionDescriptor`] variant to the store and clipboard.
//!
//! # Invariants
//! - Store failures during save/delete are returned to the caller.
//! - Clipboard failures never fail an action.
//! - Save writes the store before touching the clipboard.

use crate::clipboard::{write_best_effort, ClipboardPort};
use crate::model::action::ActionDescriptor;
use crate::model::snippet::{Snippet, SnippetValidationError};
use crate::repo::snippet_repo::{RepoError, SnippetRepository};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Failure of an explicit mutating action; the mutation did not take effect.
#[derive(Debug)]
pub enum PersistenceError {
    /// Key was empty after trimming.
    InvalidKey(SnippetValidationError),
    /// Store could not complete the write.
    Store(RepoError),
}

impl Display for PersistenceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidKey(_) => write!(f, "snippet rejected"),
            Self::Store(_) => write!(f, "snippet store write failed"),
        }
    }
}

impl Error for PersistenceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidKey(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<SnippetValidationError> for PersistenceError {
    fn from(value: SnippetValidationError) -> Self {
        Self::InvalidKey(value)
    }
}

impl From<RepoError> for PersistenceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(err) => Self::InvalidKey(err),
            other => Self::Store(other),
        }
    }
}

/// Executes selected actions against a store and clipboard.
pub struct ActionExecutor<'a, R: SnippetRepository, C: ClipboardPort + ?Sized> {
    repo: &'a R,
    clipboard: &'a C,
}

impl<'a, R: SnippetRepository, C: ClipboardPort + ?Sized> ActionExecutor<'a, R, C> {
    pub fn new(repo: &'a R, clipboard: &'a C) -> Self {
        Self { repo, clipboard }
    }

    /// Runs one action to completion.
    ///
    /// # Errors
    /// - [`PersistenceError`] when a save or delete did not reach the store.
    pub fn execute(&self, action: &ActionDescriptor) -> Result<(), PersistenceError> {
        match action {
            ActionDescriptor::Save { key, value } => self.save(key, value),
            ActionDescriptor::Copy { value } => {
                self.copy(value);
                Ok(())
            }
            ActionDescriptor::Delete { key } => self.delete(key),
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        let snippet = Snippet::new(key, value)?;
        self.repo.upsert(&snippet)?;
        let copied = write_best_effort(self.clipboard, &snippet.value);

        info!(
            "event=action_execute module=service status=ok action=save key_len={} copied={}",
            snippet.key.chars().count(),
            copied
        );
        Ok(())
    }

    fn copy(&self, value: &str) {
        let copied = write_best_effort(self.clipboard, value);
        info!(
            "event=action_execute module=service status=ok action=copy value_len={} copied={}",
            value.chars().count(),
            copied
        );
    }

    fn delete(&self, key: &str) -> Result<(), PersistenceError> {
        let removed = self.repo.delete(key)?;
        info!(
            "event=action_execute module=service status=ok action=delete key_len={} removed={}",
            key.trim().chars().count(),
            removed
        );
        Ok(())
    }
}
