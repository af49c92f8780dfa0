//! Core logic for the launcher snippet store.
//! Query resolution, ranked key search and snippet persistence live here;
//! host protocols and process wiring stay outside this crate.

pub mod clipboard;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;

pub use clipboard::{ClipboardError, ClipboardPort, MemoryClipboard, SystemClipboard};
pub use config::SnippetsConfig;
pub use logging::{
    default_log_level, error_chain, init_logging, logging_status, LogSettings, LoggingError,
};
pub use model::action::{ActionDescriptor, ResultItem, SnippetContext};
pub use model::snippet::{Snippet, SnippetValidationError};
pub use repo::snippet_repo::{RepoError, RepoResult, SnippetRepository, SqliteSnippetRepository};
pub use search::key_search::{
    search_keys, KeySearchHit, KeySearchQuery, MatchTier, SearchError, SearchResult,
};
pub use service::action_executor::{ActionExecutor, PersistenceError};
pub use service::preview::summarize;
pub use service::query_resolver::{parse_intent, Intent, QueryResolver, ResolutionError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
