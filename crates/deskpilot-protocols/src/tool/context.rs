//! Tool execution context.

/// Context for tool execution.
#[derive(Debug, Clone)]
pub struct ToolContext {
    /// Identifier of the external request being served.
    pub request_id: String,

    /// Correlation ID for tracing.
    pub correlation_id: String,
}

impl ToolContext {
    /// Create a new tool context with a fresh correlation id.
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            correlation_id: uuid::Uuid::new_v4().to_string(),
        }
    }
}
