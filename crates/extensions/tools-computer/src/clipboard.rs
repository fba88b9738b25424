//! Clipboard operations.

use arboard::Clipboard;
use thiserror::Error;

use crate::backend::ClipboardBackend;

/// Clipboard errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("Clipboard access failed: {0}")]
    AccessFailed(String),

    #[error("No text in clipboard")]
    NoText,
}

/// Clipboard controller, backed by arboard.
pub struct ClipboardController {
    clipboard: Clipboard,
}

impl ClipboardController {
    /// Create a new clipboard controller.
    pub fn new() -> Result<Self, ClipboardError> {
        let clipboard =
            Clipboard::new().map_err(|e| ClipboardError::AccessFailed(e.to_string()))?;
        Ok(Self { clipboard })
    }
}

impl ClipboardBackend for ClipboardController {
    fn read_text(&mut self) -> Result<String, ClipboardError> {
        self.clipboard.get_text().map_err(|e| match e {
            arboard::Error::ContentNotAvailable => ClipboardError::NoText,
            other => ClipboardError::AccessFailed(other.to_string()),
        })
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.clipboard
            .set_text(text)
            .map_err(|e| ClipboardError::AccessFailed(e.to_string()))
    }
}
