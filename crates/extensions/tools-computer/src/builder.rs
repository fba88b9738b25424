//! Request construction from an action name and loosely-typed parameters.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use deskpilot_protocols::ToolError;

use crate::casing::{camel_to_snake, snake_to_camel};
use crate::requests::*;

/// Envelope keys that never reach a request schema.
const ENVELOPE_KEYS: [&str; 2] = ["Action", "Version"];

type Construct = Box<dyn Fn(Map<String, Value>) -> Result<ComputerRequest, serde_json::Error> + Send + Sync>;

struct Schema {
    action: &'static str,
    construct: Construct,
}

/// Registry of request schemas keyed by type identifier (`MoveMouseRequest`).
pub struct RequestBuilder {
    schemas: BTreeMap<String, Schema>,
}

static GLOBAL: Lazy<RequestBuilder> = Lazy::new(RequestBuilder::new);

impl RequestBuilder {
    /// Build a registry containing every supported action.
    pub fn new() -> Self {
        let mut builder = Self {
            schemas: BTreeMap::new(),
        };
        builder.register("move_mouse", ComputerRequest::MoveMouse);
        builder.register("click_mouse", ComputerRequest::ClickMouse);
        builder.register("press_mouse", ComputerRequest::PressMouse);
        builder.register("release_mouse", ComputerRequest::ReleaseMouse);
        builder.register("drag_mouse", ComputerRequest::DragMouse);
        builder.register("scroll", ComputerRequest::Scroll);
        builder.register("press_key", ComputerRequest::PressKey);
        builder.register("type_text", ComputerRequest::TypeText);
        builder.register("wait", ComputerRequest::Wait);
        builder.register("take_screenshot", ComputerRequest::TakeScreenshot);
        builder.register("get_cursor_position", ComputerRequest::GetCursorPosition);
        builder.register("get_screen_size", ComputerRequest::GetScreenSize);
        builder.register("change_password", ComputerRequest::ChangePassword);
        builder
    }

    /// Shared registry, built on first use.
    pub fn global() -> &'static RequestBuilder {
        &GLOBAL
    }

    fn register<R>(&mut self, action: &'static str, wrap: fn(R) -> ComputerRequest)
    where
        R: DeserializeOwned + 'static,
    {
        let construct: Construct =
            Box::new(move |params| serde_json::from_value::<R>(Value::Object(params)).map(wrap));
        let previous = self
            .schemas
            .insert(schema_name(action), Schema { action, construct });
        assert!(previous.is_none(), "duplicate schema for action {}", action);
    }

    /// Supported action identifiers, sorted.
    pub fn actions(&self) -> Vec<&'static str> {
        let mut actions: Vec<_> = self.schemas.values().map(|s| s.action).collect();
        actions.sort_unstable();
        actions
    }

    pub fn supports(&self, action: &str) -> bool {
        self.schemas.contains_key(&schema_name(action))
    }

    /// Build the request for `action` from `params`.
    ///
    /// `action` may be snake_case (`move_mouse`) or PascalCase (`MoveMouse`).
    /// `params` must be an object or null; the `Action` and `Version` envelope keys
    /// are ignored.
    pub fn build(&self, action: &str, params: Value) -> Result<ComputerRequest, ToolError> {
        let name = schema_name(action);
        let schema = self
            .schemas
            .get(&name)
            .ok_or_else(|| ToolError::NotFound(format!("request {} not found", name)))?;

        let mut params = match params {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => {
                return Err(ToolError::InvalidParameters(format!(
                    "parameters for {} must be an object, got {}",
                    name,
                    json_type(&other)
                )));
            }
        };
        for key in ENVELOPE_KEYS {
            params.remove(key);
        }

        (schema.construct)(params)
            .map_err(|e| ToolError::InvalidParameters(format!("{}: {}", name, e)))
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// `move_mouse` / `MoveMouse` -> `MoveMouseRequest`.
pub fn schema_name(action: &str) -> String {
    format!("{}Request", snake_to_camel(&camel_to_snake(action.trim())))
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
