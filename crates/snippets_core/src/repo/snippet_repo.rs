//! Snippet repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide point lookup, ranked search, upsert and delete over `snippets`.
//! - Keep SQL details inside core persistence boundary.
//!
//! # Invariants
//! - Keys are normalized with [`normalize_key`] before any SQL runs.
//! - Every call opens its own connection and commits before returning; no
//!   transaction spans two calls.
//! - Upsert never leaves two rows for one key and keeps the row's insertion position.

use crate::db::{open_db, DbError};
use crate::model::snippet::{normalize_key, Snippet, SnippetValidationError};
use crate::search::key_search::{search_keys, KeySearchHit, KeySearchQuery, SearchError};
use log::debug;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for snippet persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(SnippetValidationError),
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(_) => write!(f, "invalid snippet"),
            Self::Db(_) => write!(f, "snippet store error"),
            Self::InvalidData(message) => write!(f, "invalid persisted snippet data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<SnippetValidationError> for RepoError {
    fn from(value: SnippetValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<SearchError> for RepoError {
    fn from(value: SearchError) -> Self {
        match value {
            SearchError::Db(err) => Self::Db(err),
            SearchError::InvalidData(message) => Self::InvalidData(message),
        }
    }
}

/// Repository interface for the snippet store.
pub trait SnippetRepository {
    /// Returns the stored value, `None` when the key is absent.
    fn get(&self, key: &str) -> RepoResult<Option<String>>;
    /// Returns ranked hits whose key contains `text`.
    fn search(&self, query: &KeySearchQuery) -> RepoResult<Vec<KeySearchHit>>;
    /// Creates or overwrites one snippet.
    fn upsert(&self, snippet: &Snippet) -> RepoResult<()>;
    /// Removes `key`; returns whether a row existed.
    fn delete(&self, key: &str) -> RepoResult<bool>;
}

/// SQLite-backed snippet repository that opens a connection per call.
#[derive(Debug, Clone)]
pub struct SqliteSnippetRepository {
    db_path: PathBuf,
}

impl SqliteSnippetRepository {
    /// Creates a repository without touching the file.
    ///
    /// Open failures surface on the first operation.
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    /// Creates a repository and verifies the file opens and migrates.
    pub fn try_new(db_path: impl Into<PathBuf>) -> RepoResult<Self> {
        let repo = Self::new(db_path);
        drop(repo.connect()?);
        Ok(repo)
    }

    /// Database file backing this repository.
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    fn connect(&self) -> RepoResult<Connection> {
        Ok(open_db(&self.db_path)?)
    }
}

impl SnippetRepository for SqliteSnippetRepository {
    fn get(&self, key: &str) -> RepoResult<Option<String>> {
        let Ok(key) = normalize_key(key) else {
            return Ok(None);
        };

        let conn = self.connect()?;
        let value = conn
            .query_row(
                "SELECT value FROM snippets WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;

        debug!(
            "event=snippet_get module=repo status=ok key_len={} found={}",
            key.chars().count(),
            value.is_some()
        );
        Ok(value)
    }

    fn search(&self, query: &KeySearchQuery) -> RepoResult<Vec<KeySearchHit>> {
        if query.text.trim().is_empty() {
            return Ok(Vec::new());
        }

        let conn = self.connect()?;
        let hits = search_keys(&conn, query)?;

        debug!(
            "event=snippet_search module=repo status=ok query_len={} hits={}",
            query.text.trim().chars().count(),
            hits.len()
        );
        Ok(hits)
    }

    fn upsert(&self, snippet: &Snippet) -> RepoResult<()> {
        let key = normalize_key(&snippet.key)?;

        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        tx.execute(
            "INSERT INTO snippets (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
            params![key, snippet.value.as_str()],
        )?;
        tx.commit()?;

        debug!(
            "event=snippet_upsert module=repo status=ok key_len={} value_len={}",
            key.chars().count(),
            snippet.value.chars().count()
        );
        Ok(())
    }

    fn delete(&self, key: &str) -> RepoResult<bool> {
        let Ok(key) = normalize_key(key) else {
            return Ok(false);
        };

        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        let changed = tx.execute("DELETE FROM snippets WHERE key = ?1;", [key])?;
        tx.commit()?;

        debug!(
            "event=snippet_delete module=repo status=ok key_len={} removed={}",
            key.chars().count(),
            changed > 0
        );
        Ok(changed > 0)
    }
}
