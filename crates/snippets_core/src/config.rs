//! Runtime configuration for the snippet core.
//!
//! # Responsibility
//! - Hold the persistence location and display limits in one place.
//! - Provide canonical defaults for hosts that do not override them.
//!
//! # Invariants
//! - `search_limit` is always within `1..=MAX_SEARCH_LIMIT` after [`SnippetsConfig::normalized`].
//! - Preview limits are never zero after normalization.

use std::path::PathBuf;

/// Hard cap on search hits returned for one query.
pub const MAX_SEARCH_LIMIT: u32 = 10;
/// Default preview width for search-result subtitles.
pub const DEFAULT_SUBTITLE_PREVIEW_CHARS: usize = 24;
/// Default preview width for the clipboard suggestion subtitle.
pub const DEFAULT_CLIPBOARD_PREVIEW_CHARS: usize = 36;
/// Default database file name, resolved against the process working directory.
pub const DEFAULT_DB_FILE_NAME: &str = "snippets.db";
/// Icon reference attached to every result.
pub const DEFAULT_ICON_PATH: &str = "assets/snippets.png";

/// Core configuration assembled once at process start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetsConfig {
    /// SQLite file backing the store.
    pub db_path: PathBuf,
    /// Maximum number of search hits per query.
    pub search_limit: u32,
    /// Characters kept in search-result previews.
    pub subtitle_preview_chars: usize,
    /// Characters kept in the clipboard suggestion preview.
    pub clipboard_preview_chars: usize,
    /// Icon path reported to the host.
    pub icon_path: String,
}

impl Default for SnippetsConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_FILE_NAME),
            search_limit: MAX_SEARCH_LIMIT,
            subtitle_preview_chars: DEFAULT_SUBTITLE_PREVIEW_CHARS,
            clipboard_preview_chars: DEFAULT_CLIPBOARD_PREVIEW_CHARS,
            icon_path: DEFAULT_ICON_PATH.to_string(),
        }
    }
}

impl SnippetsConfig {
    /// Creates the default configuration for a given database file.
    pub fn with_db_path(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
            ..Self::default()
        }
    }

    /// Clamps limits into their supported ranges.
    pub fn normalized(mut self) -> Self {
        self.search_limit = normalize_search_limit(self.search_limit);
        if self.subtitle_preview_chars == 0 {
            self.subtitle_preview_chars = DEFAULT_SUBTITLE_PREVIEW_CHARS;
        }
        if self.clipboard_preview_chars == 0 {
            self.clipboard_preview_chars = DEFAULT_CLIPBOARD_PREVIEW_CHARS;
        }
        self
    }
}

/// Maps `0` to the default and caps larger values at [`MAX_SEARCH_LIMIT`].
pub fn normalize_search_limit(limit: u32) -> u32 {
    match limit {
        0 => MAX_SEARCH_LIMIT,
        value if value > MAX_SEARCH_LIMIT => MAX_SEARCH_LIMIT,
        value => value,
    }
}

#[cfg(test)]
mod tests {
    use super::{normalize_search_limit, SnippetsConfig, MAX_SEARCH_LIMIT};

    #[test]
    fn default_matches_launcher_conventions() {
        let config = SnippetsConfig::default();
        assert_eq!(config.search_limit, 10);
        assert_eq!(config.subtitle_preview_chars, 24);
        assert_eq!(config.clipboard_preview_chars, 36);
        assert_eq!(config.db_path.to_str(), Some("snippets.db"));
    }

    #[test]
    fn search_limit_is_clamped() {
        assert_eq!(normalize_search_limit(0), MAX_SEARCH_LIMIT);
        assert_eq!(normalize_search_limit(3), 3);
        assert_eq!(normalize_search_limit(42), MAX_SEARCH_LIMIT);
    }

    #[test]
    fn normalized_restores_zero_preview_limits() {
        let config = SnippetsConfig {
            search_limit: 99,
            subtitle_preview_chars: 0,
            clipboard_preview_chars: 0,
            ..SnippetsConfig::with_db_path("/tmp/x.db")
        }
        .normalized();

        assert_eq!(config.search_limit, MAX_SEARCH_LIMIT);
        assert_eq!(config.subtitle_preview_chars, 24);
        assert_eq!(config.clipboard_preview_chars, 36);
    }
}
