use super::{ClipboardError, ClipboardPort, ClipboardResult};

/// OS clipboard backed by `arboard`.
///
/// A fresh handle is opened per call, so a missing display or locked
/// clipboard only fails that call.
///
/// On X11 and Wayland the handle owns the copied text, so a write only
/// outlives the process when a clipboard manager takes it over. Windows and
/// macOS keep the text after the handle drops.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }

    fn handle() -> ClipboardResult<arboard::Clipboard> {
        arboard::Clipboard::new().map_err(|err| ClipboardError::Unavailable(err.to_string()))
    }
}

impl ClipboardPort for SystemClipboard {
    fn read(&self) -> ClipboardResult<String> {
        match Self::handle()?.get_text() {
            Ok(text) => Ok(text),
            // Images and other non-text payloads read as empty text.
            Err(arboard::Error::ContentNotAvailable) => Ok(String::new()),
            Err(err) => Err(ClipboardError::Backend(err.to_string())),
        }
    }

    fn write(&self, value: &str) -> ClipboardResult<()> {
        Self::handle()?
            .set_text(value)
            .map_err(|err| ClipboardError::Backend(err.to_string()))
    }
}
