//! Clipboard access for sharing the trip summary.

use arboard::Clipboard;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(#[source] arboard::Error),

    #[error("Failed to copy to clipboard: {0}")]
    Write(#[source] arboard::Error),
}

/// Lazily opened system clipboard.
///
/// Opening is deferred to the first copy so headless sessions (no display
/// server) start normally and only fail when the user asks to copy.
#[derive(Default)]
pub struct ClipboardHandler {
    clipboard: Option<Clipboard>,
}

impl ClipboardHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write text to the system clipboard.
    pub fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let clipboard = match self.clipboard.take() {
            Some(clipboard) => clipboard,
            None => Clipboard::new().map_err(ClipboardError::Unavailable)?,
        };
        self.clipboard
            .insert(clipboard)
            .set_text(text.to_string())
            .map_err(ClipboardError::Write)
    }
}
