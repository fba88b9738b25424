//! The `computer` tool: one entry point for every desktop action.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{info, Instrument};

use deskpilot_protocols::{RiskLevel, Tool, ToolContext, ToolDefinition, ToolError, ToolResult};

use crate::builder::RequestBuilder;
use crate::computer::{ComputerTool, LocalComputer};
use crate::dispatch::dispatch;

/// Params are an object holding `Action` plus that action's PascalCase parameters.
pub struct ComputerUseTool {
    definition: ToolDefinition,
    computer: Arc<dyn ComputerTool>,
    builder: &'static RequestBuilder,
}

impl ComputerUseTool {
    pub fn new(computer: Arc<dyn ComputerTool>) -> Self {
        let builder = RequestBuilder::global();
        Self {
            definition: ToolDefinition::new(
                "computer",
                "Computer",
                "Control the local desktop: mouse, keyboard, text entry, screenshots",
            )
            .with_parameters_schema(parameters_schema(builder))
            .with_risk_level(RiskLevel::High)
            .with_metadata("actions", serde_json::json!(builder.actions())),
            computer,
            builder,
        }
    }

    pub fn builder(&self) -> &'static RequestBuilder {
        self.builder
    }

    /// Build and run `action` with `params`.
    pub async fn run(&self, action: &str, params: Value) -> Result<Value, ToolError> {
        let request = self.builder.build(action, params)?;
        let action = request.action();
        let output = dispatch(self.computer.as_ref(), request).await?;
        info!(action, "Computer action completed");
        output.to_json()
    }
}

impl Default for ComputerUseTool {
    fn default() -> Self {
        Self::new(Arc::new(LocalComputer::default()))
    }
}

fn parameters_schema(builder: &RequestBuilder) -> Value {
    serde_json::json!({
        "type": "object",
        "properties": {
            "Action": {
                "type": "string",
                "enum": builder.actions(),
                "description": "Action to perform; PascalCase names such as MoveMouse are also accepted"
            },
            "PositionX": { "type": "integer" },
            "PositionY": { "type": "integer" },
            "Button": {
                "type": "string",
                "enum": ["left", "right", "middle", "double_click", "double_left"]
            },
            "Press": { "type": "boolean" },
            "Release": { "type": "boolean" },
            "SourceX": { "type": "integer" },
            "SourceY": { "type": "integer" },
            "TargetX": { "type": "integer" },
            "TargetY": { "type": "integer" },
            "Direction": { "type": "string", "enum": ["up", "down", "left", "right"] },
            "Amount": { "type": "integer" },
            "Key": { "type": "string", "description": "Key name or combination like ctrl+c" },
            "Text": { "type": "string" },
            "Duration": { "type": "integer", "description": "Milliseconds" },
            "Username": { "type": "string" },
            "NewPassword": { "type": "string" }
        },
        "required": ["Action"]
    })
}

#[async_trait]
impl Tool for ComputerUseTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(&self, params: Value, ctx: ToolContext) -> Result<ToolResult, ToolError> {
        self.validate(&params)?;
        let action = params
            .get("Action")
            .and_then(Value::as_str)
            .ok_or_else(|| ToolError::InvalidParameters("Missing Action".to_string()))?
            .to_string();

        let span = tracing::info_span!(
            "computer",
            request_id = %ctx.request_id,
            correlation_id = %ctx.correlation_id
        );
        let output = self.run(&action, params).instrument(span).await?;
        Ok(ToolResult::success_json(format!("{} completed", action), output))
    }
}
