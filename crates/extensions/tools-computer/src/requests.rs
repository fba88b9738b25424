//! Request schemas for every computer action.
//!
//! Fields are serialized under their external PascalCase names (`PositionX`) and
//! also accept the internal snake_case names (`x`) when deserializing. Numbers and
//! booleans may arrive as strings, since query-string parameters are untyped.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::backend::MouseButton;

/// Button choices for `click_mouse`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClickButton {
    #[default]
    Left,
    Right,
    Middle,
    DoubleClick,
    DoubleLeft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollDirection {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoveMouseRequest {
    #[serde(rename = "PositionX", alias = "x", deserialize_with = "lenient::int")]
    pub x: i32,
    #[serde(rename = "PositionY", alias = "y", deserialize_with = "lenient::int")]
    pub y: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClickMouseRequest {
    #[serde(rename = "PositionX", alias = "x", deserialize_with = "lenient::int")]
    pub x: i32,
    #[serde(rename = "PositionY", alias = "y", deserialize_with = "lenient::int")]
    pub y: i32,
    #[serde(rename = "Button", alias = "button")]
    pub button: ClickButton,
    /// Only press the button down.
    #[serde(rename = "Press", alias = "press", deserialize_with = "lenient::boolean")]
    pub press: bool,
    /// Only release the button.
    #[serde(rename = "Release", alias = "release", deserialize_with = "lenient::boolean")]
    pub release: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PressMouseRequest {
    #[serde(rename = "PositionX", alias = "x", deserialize_with = "lenient::int")]
    pub x: i32,
    #[serde(rename = "PositionY", alias = "y", deserialize_with = "lenient::int")]
    pub y: i32,
    #[serde(rename = "Button", alias = "button")]
    pub button: MouseButton,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseMouseRequest {
    #[serde(rename = "PositionX", alias = "x", deserialize_with = "lenient::int")]
    pub x: i32,
    #[serde(rename = "PositionY", alias = "y", deserialize_with = "lenient::int")]
    pub y: i32,
    #[serde(rename = "Button", alias = "button")]
    pub button: MouseButton,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragMouseRequest {
    #[serde(rename = "SourceX", alias = "source_x", deserialize_with = "lenient::int")]
    pub source_x: i32,
    #[serde(rename = "SourceY", alias = "source_y", deserialize_with = "lenient::int")]
    pub source_y: i32,
    #[serde(rename = "TargetX", alias = "target_x", deserialize_with = "lenient::int")]
    pub target_x: i32,
    #[serde(rename = "TargetY", alias = "target_y", deserialize_with = "lenient::int")]
    pub target_y: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollRequest {
    #[serde(rename = "Direction", alias = "scroll_direction")]
    pub scroll_direction: ScrollDirection,
    #[serde(rename = "Amount", alias = "scroll_amount", deserialize_with = "lenient::int")]
    pub scroll_amount: i32,
    #[serde(rename = "PositionX", alias = "x", deserialize_with = "lenient::int")]
    pub x: i32,
    #[serde(rename = "PositionY", alias = "y", deserialize_with = "lenient::int")]
    pub y: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PressKeyRequest {
    /// A key name (`enter`) or a `+`-joined combination (`ctrl+c`).
    #[serde(rename = "Key", alias = "key", deserialize_with = "lenient::string")]
    pub key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeTextRequest {
    #[serde(rename = "Text", alias = "text", deserialize_with = "lenient::string")]
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaitRequest {
    /// Milliseconds.
    #[serde(rename = "Duration", alias = "duration", deserialize_with = "lenient::int")]
    pub duration: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TakeScreenshotRequest {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetCursorPositionRequest {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetScreenSizeRequest {}

#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangePasswordRequest {
    #[serde(rename = "Username", alias = "username", deserialize_with = "lenient::string")]
    pub username: String,
    #[serde(rename = "NewPassword", alias = "new_password", deserialize_with = "lenient::string")]
    pub new_password: String,
}

impl fmt::Debug for ChangePasswordRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangePasswordRequest")
            .field("username", &self.username)
            .field("new_password", &"<redacted>")
            .finish()
    }
}

/// A parsed request for one of the supported actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "Action", content = "Params", rename_all = "PascalCase")]
pub enum ComputerRequest {
    MoveMouse(MoveMouseRequest),
    ClickMouse(ClickMouseRequest),
    PressMouse(PressMouseRequest),
    ReleaseMouse(ReleaseMouseRequest),
    DragMouse(DragMouseRequest),
    Scroll(ScrollRequest),
    PressKey(PressKeyRequest),
    TypeText(TypeTextRequest),
    Wait(WaitRequest),
    TakeScreenshot(TakeScreenshotRequest),
    GetCursorPosition(GetCursorPositionRequest),
    GetScreenSize(GetScreenSizeRequest),
    ChangePassword(ChangePasswordRequest),
}

impl ComputerRequest {
    /// The snake_case action identifier.
    pub fn action(&self) -> &'static str {
        match self {
            Self::MoveMouse(_) => "move_mouse",
            Self::ClickMouse(_) => "click_mouse",
            Self::PressMouse(_) => "press_mouse",
            Self::ReleaseMouse(_) => "release_mouse",
            Self::DragMouse(_) => "drag_mouse",
            Self::Scroll(_) => "scroll",
            Self::PressKey(_) => "press_key",
            Self::TypeText(_) => "type_text",
            Self::Wait(_) => "wait",
            Self::TakeScreenshot(_) => "take_screenshot",
            Self::GetCursorPosition(_) => "get_cursor_position",
            Self::GetScreenSize(_) => "get_screen_size",
            Self::ChangePassword(_) => "change_password",
        }
    }
}

/// Deserializers that accept values either typed or as strings.
mod lenient {
    use serde::de::{Deserializer, Error};
    use serde::Deserialize;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Number {
        Int(i64),
        Float(f64),
        Text(String),
    }

    pub(super) fn int<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: TryFrom<i64>,
    {
        let value = match Number::deserialize(deserializer)? {
            Number::Int(v) => v,
            Number::Float(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => f as i64,
            Number::Float(f) => {
                return Err(D::Error::custom(format!("expected an integer, got {}", f)));
            }
            Number::Text(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| D::Error::custom(format!("expected an integer, got {:?}", s)))?,
        };
        T::try_from(value).map_err(|_| D::Error::custom(format!("{} is out of range", value)))
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
        Text(String),
    }

    pub(super) fn boolean<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Flag::deserialize(deserializer)? {
            Flag::Bool(b) => Ok(b),
            Flag::Int(0) => Ok(false),
            Flag::Int(1) => Ok(true),
            Flag::Int(v) => Err(D::Error::custom(format!("expected a boolean, got {}", v))),
            Flag::Text(s) => match s.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" | "on" => Ok(true),
                "false" | "0" | "no" | "off" | "" => Ok(false),
                _ => Err(D::Error::custom(format!("expected a boolean, got {:?}", s))),
            },
        }
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Int(i64),
        Float(f64),
        Bool(bool),
    }

    pub(super) fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Scalar::deserialize(deserializer)? {
            Scalar::Text(s) => s,
            Scalar::Int(v) => v.to_string(),
            Scalar::Float(v) => v.to_string(),
            Scalar::Bool(v) => v.to_string(),
        })
    }
}

#[cfg(test)]
#[path = "requests_tests.rs"]
mod tests;
