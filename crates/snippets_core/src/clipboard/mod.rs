//! Clipboard port: read/write access to the current clipboard text.
//!
//! # Responsibility
//! - Abstract the OS clipboard behind [`ClipboardPort`].
//! - Provide best-effort helpers that never let clipboard failures escape.
//!
//! # Invariants
//! - Core callers only use [`read_text_or_empty`] and [`write_best_effort`].
//! - Clipboard contents are never logged, only their length.

mod memory;
mod system;

pub use memory::MemoryClipboard;
pub use system::SystemClipboard;

use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ClipboardResult<T> = Result<T, ClipboardError>;

/// Failure reported by a clipboard adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// Clipboard backend could not be reached.
    Unavailable(String),
    /// Backend reached but the read/write call failed.
    Backend(String),
}

impl Display for ClipboardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(message) => write!(f, "clipboard unavailable: {message}"),
            Self::Backend(message) => write!(f, "clipboard operation failed: {message}"),
        }
    }
}

impl Error for ClipboardError {}

/// Read/write channel for a single "current clipboard text" value.
pub trait ClipboardPort {
    /// Returns the current clipboard text.
    fn read(&self) -> ClipboardResult<String>;
    /// Replaces the clipboard text.
    fn write(&self, value: &str) -> ClipboardResult<()>;
}

/// Reads clipboard text, degrading any failure to an empty string.
pub fn read_text_or_empty<C: ClipboardPort + ?Sized>(clipboard: &C) -> String {
    match clipboard.read() {
        Ok(text) => text,
        Err(err) => {
            warn!("event=clipboard_read module=clipboard status=error error={err}");
            String::new()
        }
    }
}

/// Writes clipboard text, logging and discarding any failure.
///
/// Returns whether the write was accepted by the backend.
pub fn write_best_effort<C: ClipboardPort + ?Sized>(clipboard: &C, value: &str) -> bool {
    match clipboard.write(value) {
        Ok(()) => true,
        Err(err) => {
            warn!(
                "event=clipboard_write module=clipboard status=error value_len={} error={err}",
                value.chars().count()
            );
            false
        }
    }
}
