//! Seams between the action layer and the OS automation libraries.
//!
//! Production code drives these through [`InputController`](crate::InputController)
//! and [`ClipboardController`](crate::ClipboardController); tests substitute
//! recording fakes.

use serde::{Deserialize, Serialize};

use crate::clipboard::ClipboardError;
use crate::geometry::Point;
use crate::input::InputError;

/// Mouse button types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    #[default]
    Left,
    Right,
    Middle,
}

/// What to do with a button: hold it down, let it go, or both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    Press,
    Release,
    Click,
}

/// Scroll wheel axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollAxis {
    Vertical,
    Horizontal,
}

/// Synthetic mouse and keyboard events.
pub trait InputBackend {
    /// Move the cursor to an absolute position.
    fn move_to(&mut self, x: i32, y: i32) -> Result<(), InputError>;

    fn button(&mut self, button: MouseButton, action: ButtonAction) -> Result<(), InputError>;

    /// Scroll by `amount` notches; positive scrolls down or right.
    fn scroll(&mut self, amount: i32, axis: ScrollAxis) -> Result<(), InputError>;

    /// Type a single character.
    fn type_char(&mut self, ch: char) -> Result<(), InputError>;

    /// Press and release a single named key.
    fn key_press(&mut self, key: &str) -> Result<(), InputError>;

    /// Press a key combination; all but the last key are held as modifiers.
    fn hotkey(&mut self, keys: &[&str]) -> Result<(), InputError>;

    fn cursor_position(&mut self) -> Result<Point, InputError>;
}

/// Text access to the system clipboard.
pub trait ClipboardBackend {
    fn read_text(&mut self) -> Result<String, ClipboardError>;

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

impl<T: ClipboardBackend + ?Sized> ClipboardBackend for &mut T {
    fn read_text(&mut self) -> Result<String, ClipboardError> {
        (**self).read_text()
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        (**self).write_text(text)
    }
}

/// Identifies the host operating system.
pub trait HostPlatform {
    /// Kernel-style system name: `Darwin`, `Linux`, `Windows`, ...
    fn system_name(&self) -> &str;
}

/// The platform this binary was built for.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrentHost;

impl HostPlatform for CurrentHost {
    fn system_name(&self) -> &str {
        system_name_for(std::env::consts::OS)
    }
}

/// A fixed platform name, for callers that identify the host themselves.
#[derive(Debug, Clone)]
pub struct NamedHost(pub String);

impl HostPlatform for NamedHost {
    fn system_name(&self) -> &str {
        &self.0
    }
}

fn system_name_for(os: &str) -> &str {
    match os {
        "macos" => "Darwin",
        "linux" => "Linux",
        "windows" => "Windows",
        "freebsd" => "FreeBSD",
        other => other,
    }
}
