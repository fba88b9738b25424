//! Results returned by computer actions.

use serde::Serialize;
use serde_json::Value;

use deskpilot_protocols::ToolError;

use crate::geometry::Point;
use crate::screenshot::{ScreenSize, Screenshot};
use crate::text_entry::{PasteShortcut, TextEntryOutcome};

/// Output of a single action. Actions without a result serialize as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ActionOutput {
    Done,
    Screenshot(ScreenshotImage),
    Position(CursorPosition),
    Size(ScreenDimensions),
    Text(TextEntryReport),
}

impl ActionOutput {
    pub fn to_json(&self) -> Result<Value, ToolError> {
        to_result_json(self)
    }
}

fn to_result_json<T: Serialize + ?Sized>(value: &T) -> Result<Value, ToolError> {
    serde_json::to_value(value)
        .map_err(|e| ToolError::ExecutionFailed(format!("Failed to serialize result: {}", e)))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScreenshotImage {
    /// Base64-encoded PNG.
    pub screenshot: String,
    pub width: u32,
    pub height: u32,
}

impl From<Screenshot> for ScreenshotImage {
    fn from(shot: Screenshot) -> Self {
        Self {
            screenshot: shot.to_base64(),
            width: shot.width,
            height: shot.height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CursorPosition {
    pub position_x: i32,
    pub position_y: i32,
}

impl From<Point> for CursorPosition {
    fn from(p: Point) -> Self {
        Self {
            position_x: p.x,
            position_y: p.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScreenDimensions {
    pub width: u32,
    pub height: u32,
}

impl From<ScreenSize> for ScreenDimensions {
    fn from(size: ScreenSize) -> Self {
        Self {
            width: size.width,
            height: size.height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryMethod {
    Typed,
    Pasted,
}

/// How `type_text` delivered its text. The previous clipboard content is never reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TextEntryReport {
    pub method: EntryMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shortcut: Option<PasteShortcut>,
}

impl From<&TextEntryOutcome> for TextEntryReport {
    fn from(outcome: &TextEntryOutcome) -> Self {
        match outcome {
            TextEntryOutcome::Typed { .. } => Self {
                method: EntryMethod::Typed,
                verified: None,
                shortcut: None,
            },
            TextEntryOutcome::Pasted {
                verified, shortcut, ..
            } => Self {
                method: EntryMethod::Pasted,
                verified: Some(*verified),
                shortcut: Some(*shortcut),
            },
        }
    }
}
