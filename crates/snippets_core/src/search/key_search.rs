//! Ranked substring search over snippet keys.
//!
//! # Responsibility
//! - Find snippets whose key contains the query text.
//! - Rank exact matches, then prefix matches, then other substring matches.
//!
//! # Invariants
//! - Matching is case-sensitive and treats `%`/`_` as literal characters.
//! - Ties inside a tier are ordered by insertion order (`rowid`), so repeated
//!   searches over unchanged data return the same sequence.
//! - At most [`MAX_SEARCH_LIMIT`] hits are returned.

use crate::config::{normalize_search_limit, MAX_SEARCH_LIMIT};
use crate::db::DbError;
use crate::model::snippet::Snippet;
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result type for search APIs.
pub type SearchResult<T> = Result<T, SearchError>;

/// Search-layer error for DB interaction and row decoding.
#[derive(Debug)]
pub enum SearchError {
    Db(DbError),
    InvalidData(String),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(_) => write!(f, "snippet search failed"),
            Self::InvalidData(message) => write!(f, "invalid search row: {message}"),
        }
    }
}

impl Error for SearchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for SearchError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for SearchError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// How a hit's key relates to the query text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchTier {
    /// Key equals the query.
    Exact,
    /// Key starts with the query.
    Prefix,
    /// Key contains the query elsewhere.
    Substring,
}

/// Search options for key lookup.
#[derive(Debug, Clone)]
pub struct KeySearchQuery {
    /// Query text, trimmed before matching.
    pub text: String,
    /// Maximum number of hits; clamped to `1..=10`.
    pub limit: u32,
}

impl KeySearchQuery {
    /// Creates a query with the default limit.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            limit: MAX_SEARCH_LIMIT,
        }
    }
}

/// Single hit returned by [`search_keys`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySearchHit {
    pub snippet: Snippet,
    pub tier: MatchTier,
}

/// Searches snippet keys and returns ranked hits.
///
/// Returns an empty list for blank queries.
pub fn search_keys(conn: &Connection, query: &KeySearchQuery) -> SearchResult<Vec<KeySearchHit>> {
    let text = query.text.trim();
    if text.is_empty() {
        return Ok(Vec::new());
    }
    let limit = normalize_search_limit(query.limit);

    let mut stmt = conn.prepare(
        "SELECT
            key,
            value,
            CASE
                WHEN key = ?1 THEN 0
                WHEN substr(key, 1, length(?1)) = ?1 THEN 1
                ELSE 2
            END AS tier
         FROM snippets
         WHERE instr(key, ?1) > 0
         ORDER BY tier ASC, rowid ASC
         LIMIT ?2;",
    )?;
    let mut rows = stmt.query(params![text, i64::from(limit)])?;
    let mut hits = Vec::new();

    while let Some(row) = rows.next()? {
        hits.push(parse_search_hit(row)?);
    }

    Ok(hits)
}

fn parse_search_hit(row: &Row<'_>) -> SearchResult<KeySearchHit> {
    let key: String = row.get("key")?;
    let value: String = row.get("value")?;
    let tier = match row.get::<_, i64>("tier")? {
        0 => MatchTier::Exact,
        1 => MatchTier::Prefix,
        2 => MatchTier::Substring,
        other => {
            return Err(SearchError::InvalidData(format!("invalid match tier `{other}`")));
        }
    };
    let snippet = Snippet::new(&key, value)
        .map_err(|err| SearchError::InvalidData(format!("snippets.key: {err}")))?;

    Ok(KeySearchHit { snippet, tier })
}
