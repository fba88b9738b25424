//! Conversions from backend errors to [`ToolError`].

use deskpilot_protocols::ToolError;

use crate::clipboard::ClipboardError;
use crate::input::InputError;
use crate::screenshot::ScreenshotError;
use crate::text_entry::TextEntryError;

impl From<InputError> for ToolError {
    fn from(e: InputError) -> Self {
        match e {
            InputError::InvalidKey(_) => ToolError::InvalidParameters(e.to_string()),
            InputError::Failed(_) => ToolError::ExecutionFailed(e.to_string()),
        }
    }
}

impl From<ClipboardError> for ToolError {
    fn from(e: ClipboardError) -> Self {
        ToolError::ExecutionFailed(e.to_string())
    }
}

impl From<ScreenshotError> for ToolError {
    fn from(e: ScreenshotError) -> Self {
        ToolError::ExecutionFailed(e.to_string())
    }
}

impl From<TextEntryError> for ToolError {
    fn from(e: TextEntryError) -> Self {
        ToolError::ExecutionFailed(e.to_string())
    }
}
