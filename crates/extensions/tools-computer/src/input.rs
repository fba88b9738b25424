//! Mouse and keyboard input control.

use enigo::{Axis, Button, Coordinate, Direction, Enigo, Key, Keyboard, Mouse, Settings};
use thiserror::Error;

use crate::backend::{ButtonAction, InputBackend, MouseButton, ScrollAxis};
use crate::geometry::Point;

/// Input control errors.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Input failed: {0}")]
    Failed(String),

    #[error("Invalid key: {0}")]
    InvalidKey(String),
}

impl From<MouseButton> for Button {
    fn from(btn: MouseButton) -> Self {
        match btn {
            MouseButton::Left => Button::Left,
            MouseButton::Right => Button::Right,
            MouseButton::Middle => Button::Middle,
        }
    }
}

impl From<ButtonAction> for Direction {
    fn from(action: ButtonAction) -> Self {
        match action {
            ButtonAction::Press => Direction::Press,
            ButtonAction::Release => Direction::Release,
            ButtonAction::Click => Direction::Click,
        }
    }
}

/// Input controller for mouse and keyboard, backed by enigo.
pub struct InputController {
    enigo: Enigo,
}

impl InputController {
    /// Create a new input controller.
    pub fn new() -> Result<Self, InputError> {
        let enigo =
            Enigo::new(&Settings::default()).map_err(|e| InputError::Failed(e.to_string()))?;
        Ok(Self { enigo })
    }

    fn key(&mut self, key: &str, direction: Direction) -> Result<(), InputError> {
        let k = parse_key(key)?;
        self.enigo
            .key(k, direction)
            .map_err(|e| InputError::Failed(e.to_string()))
    }
}

impl InputBackend for InputController {
    fn move_to(&mut self, x: i32, y: i32) -> Result<(), InputError> {
        self.enigo
            .move_mouse(x, y, Coordinate::Abs)
            .map_err(|e| InputError::Failed(e.to_string()))
    }

    fn button(&mut self, button: MouseButton, action: ButtonAction) -> Result<(), InputError> {
        self.enigo
            .button(button.into(), action.into())
            .map_err(|e| InputError::Failed(e.to_string()))
    }

    fn scroll(&mut self, amount: i32, axis: ScrollAxis) -> Result<(), InputError> {
        let axis = match axis {
            ScrollAxis::Vertical => Axis::Vertical,
            ScrollAxis::Horizontal => Axis::Horizontal,
        };
        self.enigo
            .scroll(amount, axis)
            .map_err(|e| InputError::Failed(e.to_string()))
    }

    fn type_char(&mut self, ch: char) -> Result<(), InputError> {
        let mut buf = [0u8; 4];
        self.enigo
            .text(ch.encode_utf8(&mut buf))
            .map_err(|e| InputError::Failed(e.to_string()))
    }

    fn key_press(&mut self, key: &str) -> Result<(), InputError> {
        self.key(key, Direction::Click)
    }

    fn hotkey(&mut self, keys: &[&str]) -> Result<(), InputError> {
        // Validate every key first so a bad name never leaves modifiers held down.
        for key in keys {
            parse_key(key)?;
        }

        for key in keys.iter().take(keys.len().saturating_sub(1)) {
            self.key(key, Direction::Press)?;
        }

        if let Some(last) = keys.last() {
            self.key(last, Direction::Click)?;
        }

        for key in keys.iter().rev().skip(1) {
            self.key(key, Direction::Release)?;
        }

        Ok(())
    }

    fn cursor_position(&mut self) -> Result<Point, InputError> {
        self.enigo
            .location()
            .map(Point::from)
            .map_err(|e| InputError::Failed(e.to_string()))
    }
}

/// Parse a key name to an enigo [`Key`].
pub(crate) fn parse_key(key: &str) -> Result<Key, InputError> {
    let lower = key.to_lowercase();
    let k = match lower.as_str() {
        "enter" | "return" => Key::Return,
        "tab" => Key::Tab,
        "space" => Key::Space,
        "backspace" => Key::Backspace,
        "delete" | "del" => Key::Delete,
        "escape" | "esc" => Key::Escape,
        "home" => Key::Home,
        "end" => Key::End,
        "pageup" | "page_up" => Key::PageUp,
        "pagedown" | "page_down" => Key::PageDown,
        "up" => Key::UpArrow,
        "down" => Key::DownArrow,
        "left" => Key::LeftArrow,
        "right" => Key::RightArrow,
        "capslock" => Key::CapsLock,

        // Modifiers
        "ctrl" | "control" => Key::Control,
        "alt" | "option" => Key::Alt,
        "shift" => Key::Shift,
        "meta" | "cmd" | "command" | "win" | "super" => Key::Meta,

        "f1" => Key::F1,
        "f2" => Key::F2,
        "f3" => Key::F3,
        "f4" => Key::F4,
        "f5" => Key::F5,
        "f6" => Key::F6,
        "f7" => Key::F7,
        "f8" => Key::F8,
        "f9" => Key::F9,
        "f10" => Key::F10,
        "f11" => Key::F11,
        "f12" => Key::F12,

        // Any single character, letters lowercased
        s => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Key::Unicode(c),
                _ => return Err(InputError::InvalidKey(key.to_string())),
            }
        }
    };

    Ok(k)
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
