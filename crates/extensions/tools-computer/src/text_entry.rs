//! Text entry with a clipboard-paste fallback.
//!
//! Characters are first typed one at a time. The direct-typing backend cannot encode
//! every script, so the first failing character abandons typing and the whole text is
//! pasted through the clipboard instead:
//!
//! 1. capture the current clipboard text (best effort),
//! 2. write the text and wait for the clipboard to settle,
//! 3. read it back, warning on mismatch and failing if the read itself fails,
//! 4. send the platform paste shortcut and wait again.
//!
//! The captured clipboard text is reported in the outcome but never written back.

use std::thread;
use std::time::Duration;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error, info, warn, Dispatch};

use crate::backend::{ClipboardBackend, HostPlatform, InputBackend};
use crate::clipboard::ClipboardError;
use crate::input::InputError;

/// Text entry errors. Only the clipboard fallback can fail.
#[derive(Debug, Error)]
pub enum TextEntryError {
    #[error("Clipboard fallback failed: {0}")]
    Clipboard(#[from] ClipboardError),

    #[error("Paste shortcut failed: {0}")]
    PasteShortcut(#[source] InputError),
}

/// Settle delays for text entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextEntryTimings {
    /// Slept before and after each typed character.
    pub char_interval: Duration,
    /// Slept after the clipboard write and after the paste shortcut.
    pub clipboard_settle: Duration,
}

impl TextEntryTimings {
    /// No delays at all.
    pub const fn immediate() -> Self {
        Self {
            char_interval: Duration::ZERO,
            clipboard_settle: Duration::ZERO,
        }
    }
}

impl Default for TextEntryTimings {
    fn default() -> Self {
        Self {
            char_interval: Duration::from_millis(50),
            clipboard_settle: Duration::from_millis(200),
        }
    }
}

/// Keyboard shortcut that pastes the clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PasteShortcut {
    CommandV,
    CtrlV,
}

impl PasteShortcut {
    /// Command+V on `Darwin`, Ctrl+V everywhere else.
    pub fn for_system(system_name: &str) -> Self {
        if system_name == "Darwin" {
            Self::CommandV
        } else {
            Self::CtrlV
        }
    }

    pub fn keys(&self) -> &'static [&'static str] {
        match self {
            Self::CommandV => &["command", "v"],
            Self::CtrlV => &["ctrl", "v"],
        }
    }
}

/// Clipboard text seen before the fallback overwrote it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardSnapshot {
    Captured(String),
    Unknown,
}

/// How the text reached the focused element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextEntryOutcome {
    /// Every character was typed directly; the clipboard was not touched.
    Typed { chars: usize },
    /// Typing failed and the text was pasted.
    Pasted {
        previous: ClipboardSnapshot,
        /// Whether the clipboard read back exactly the written text.
        verified: bool,
        shortcut: PasteShortcut,
    },
}

/// Types text into the focused element, pasting through the clipboard when typing fails.
#[derive(Debug, Clone, Default)]
pub struct TextEntry {
    timings: TextEntryTimings,
    dispatch: Option<Dispatch>,
}

impl TextEntry {
    pub fn new(timings: TextEntryTimings) -> Self {
        Self {
            timings,
            dispatch: None,
        }
    }

    /// Route this component's log events to `dispatch` instead of the global subscriber.
    pub fn with_dispatch(mut self, dispatch: Dispatch) -> Self {
        self.dispatch = Some(dispatch);
        self
    }

    pub fn timings(&self) -> TextEntryTimings {
        self.timings
    }

    /// Enter `text` into whatever currently has focus.
    ///
    /// `open_clipboard` is only called when typing fails.
    pub fn enter<I, C, F, H>(
        &self,
        text: &str,
        input: &mut I,
        open_clipboard: F,
        host: &H,
    ) -> Result<TextEntryOutcome, TextEntryError>
    where
        I: InputBackend + ?Sized,
        C: ClipboardBackend,
        F: FnOnce() -> Result<C, ClipboardError>,
        H: HostPlatform + ?Sized,
    {
        match &self.dispatch {
            Some(dispatch) => tracing::dispatcher::with_default(dispatch, || {
                self.enter_inner(text, input, open_clipboard, host)
            }),
            None => self.enter_inner(text, input, open_clipboard, host),
        }
    }

    fn enter_inner<I, C, F, H>(
        &self,
        text: &str,
        input: &mut I,
        open_clipboard: F,
        host: &H,
    ) -> Result<TextEntryOutcome, TextEntryError>
    where
        I: InputBackend + ?Sized,
        C: ClipboardBackend,
        F: FnOnce() -> Result<C, ClipboardError>,
        H: HostPlatform + ?Sized,
    {
        let total = text.chars().count();
        debug!(chars = total, system = host.system_name(), "Entering text");

        match self.type_directly(text, input) {
            Ok(chars) => {
                debug!(chars, "Typed all characters directly");
                return Ok(TextEntryOutcome::Typed { chars });
            }
            Err((index, e)) => {
                warn!(
                    index,
                    chars = total,
                    error = %e,
                    "Direct typing failed, falling back to clipboard paste"
                );
            }
        }

        let result = open_clipboard()
            .map_err(TextEntryError::from)
            .and_then(|mut clipboard| self.paste(text, input, &mut clipboard, host));

        match &result {
            Ok(_) => info!(chars = total, "Pasted text from clipboard"),
            Err(e) => error!(error = %e, "Clipboard fallback failed"),
        }
        result
    }

    /// Type each character in order, stopping at the first failure.
    fn type_directly<I>(&self, text: &str, input: &mut I) -> Result<usize, (usize, InputError)>
    where
        I: InputBackend + ?Sized,
    {
        let mut typed = 0;
        for (index, ch) in text.chars().enumerate() {
            thread::sleep(self.timings.char_interval);
            input.type_char(ch).map_err(|e| (index, e))?;
            thread::sleep(self.timings.char_interval);
            typed += 1;
        }
        Ok(typed)
    }

    fn paste<I, C, H>(
        &self,
        text: &str,
        input: &mut I,
        clipboard: &mut C,
        host: &H,
    ) -> Result<TextEntryOutcome, TextEntryError>
    where
        I: InputBackend + ?Sized,
        C: ClipboardBackend,
        H: HostPlatform + ?Sized,
    {
        let previous = match clipboard.read_text() {
            Ok(content) => ClipboardSnapshot::Captured(content),
            Err(e) => {
                debug!(error = %e, "Could not read previous clipboard content");
                ClipboardSnapshot::Unknown
            }
        };

        clipboard.write_text(text)?;
        thread::sleep(self.timings.clipboard_settle);

        let verified = match clipboard.read_text() {
            Ok(content) if content == text => true,
            Ok(content) => {
                warn!(
                    expected_chars = text.chars().count(),
                    actual_chars = content.chars().count(),
                    "Clipboard content mismatch after write"
                );
                false
            }
            Err(e) => {
                debug!(error = %e, "Could not read clipboard back after write");
                return Err(TextEntryError::Clipboard(e));
            }
        };

        let shortcut = PasteShortcut::for_system(host.system_name());
        debug!(?shortcut, "Sending paste shortcut");
        input
            .hotkey(shortcut.keys())
            .map_err(TextEntryError::PasteShortcut)?;
        thread::sleep(self.timings.clipboard_settle);

        Ok(TextEntryOutcome::Pasted {
            previous,
            verified,
            shortcut,
        })
    }
}

#[cfg(test)]
#[path = "text_entry_tests.rs"]
mod tests;
