use super::{ClipboardPort, ClipboardResult};
use std::cell::RefCell;

/// In-process clipboard holding one string.
///
/// Used by tests and headless hosts where no OS clipboard exists.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    text: RefCell<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a clipboard pre-filled with `text`.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: RefCell::new(text.into()),
        }
    }

    /// Returns a copy of the current text.
    pub fn text(&self) -> String {
        self.text.borrow().clone()
    }
}

impl ClipboardPort for MemoryClipboard {
    fn read(&self) -> ClipboardResult<String> {
        Ok(self.text.borrow().clone())
    }

    fn write(&self, value: &str) -> ClipboardResult<()> {
        *self.text.borrow_mut() = value.to_string();
        Ok(())
    }
}
