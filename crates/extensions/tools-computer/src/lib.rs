//! Computer-use tools for deskpilot.
//!
//! Drives the local desktop through a single `computer` tool. Each call names an
//! action and passes its parameters under PascalCase keys:
//!
//! ## Mouse
//! - `move_mouse` - Move the cursor (`PositionX`, `PositionY`)
//! - `click_mouse` - Click, double click, or only press/release a button
//! - `press_mouse` / `release_mouse` - Hold or let go of a button
//! - `drag_mouse` - Drag from (`SourceX`, `SourceY`) to (`TargetX`, `TargetY`)
//! - `scroll` - Scroll `Amount` notches in `Direction`
//!
//! ## Keyboard
//! - `press_key` - Press a key or a `+`-joined combination
//! - `type_text` - Type text, pasting through the clipboard when typing fails
//!
//! ## Screen
//! - `take_screenshot` - Capture the primary monitor as base64 PNG
//! - `get_cursor_position` - Current cursor coordinates
//! - `get_screen_size` - Primary monitor dimensions
//!
//! ## Other
//! - `wait` - Sleep for `Duration` milliseconds
//! - `change_password` - Set a local account password (Linux)

mod actions;
mod backend;
mod builder;
mod casing;
mod clipboard;
mod computer;
mod dispatch;
mod error;
mod geometry;
mod input;
mod output;
mod password;
mod requests;
mod screenshot;
mod text_entry;
mod tool;

#[cfg(test)]
mod testing;

pub use backend::{
    ButtonAction, ClipboardBackend, CurrentHost, HostPlatform, InputBackend, MouseButton,
    NamedHost, ScrollAxis,
};
pub use builder::{schema_name, RequestBuilder};
pub use casing::{camel_to_snake, snake_to_camel};
pub use clipboard::{ClipboardController, ClipboardError};
pub use computer::{ComputerSettings, ComputerTool, LocalComputer};
pub use dispatch::dispatch;
pub use geometry::{plan_drag_path, DragPath, Point, DRAG_STEP};
pub use input::{InputController, InputError};
pub use output::{
    ActionOutput, CursorPosition, EntryMethod, ScreenDimensions, ScreenshotImage,
    TextEntryReport,
};
pub use password::validate_credentials;
pub use requests::*;
pub use screenshot::{capture_screen, get_screen_size, ScreenSize, Screenshot, ScreenshotError};
pub use text_entry::{
    ClipboardSnapshot, PasteShortcut, TextEntry, TextEntryError, TextEntryOutcome,
    TextEntryTimings,
};
pub use tool::ComputerUseTool;
