//! API error types.

use axum::http::StatusCode;
use thiserror::Error;

use deskpilot_protocols::ToolError;

/// Errors reported in the response envelope.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No action given, or no schema for it.
    #[error("{0}")]
    InvalidAction(String),

    #[error("{0}")]
    InvalidParameter(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Error code carried in `ResponseMetadata.Error.Code`.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidAction(_) => "InvalidAction",
            Self::InvalidParameter(_) => "InvalidParameter",
            Self::Internal(_) => "InternalError",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidAction(_) | Self::InvalidParameter(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ToolError> for ApiError {
    fn from(e: ToolError) -> Self {
        match e {
            ToolError::NotFound(_) => Self::InvalidAction(e.to_string()),
            ToolError::InvalidParameters(_) | ToolError::ValidationFailed(_) => {
                Self::InvalidParameter(e.to_string())
            }
            ToolError::ExecutionFailed(_) | ToolError::Timeout(_) | ToolError::Unsupported(_) => {
                Self::Internal(e.to_string())
            }
        }
    }
}
