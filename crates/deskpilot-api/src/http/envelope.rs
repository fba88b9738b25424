//! Response envelope shared by every action response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;

/// API version reported when the request does not name one.
pub const DEFAULT_VERSION: &str = "2020-04-01";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ErrorInfo {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResponseMetadata {
    pub request_id: String,
    pub action: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
}

impl ResponseMetadata {
    pub fn new(
        request_id: impl Into<String>,
        action: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            request_id: request_id.into(),
            action: action.into(),
            version: version.into(),
            error: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Envelope {
    pub response_metadata: ResponseMetadata,
    #[serde(default)]
    pub result: Value,
    #[serde(skip, default = "ok_status")]
    status: StatusCode,
}

fn ok_status() -> StatusCode {
    StatusCode::OK
}

impl Envelope {
    pub fn success(metadata: ResponseMetadata, result: Value) -> Self {
        Self {
            response_metadata: metadata,
            result,
            status: StatusCode::OK,
        }
    }

    pub fn failure(mut metadata: ResponseMetadata, error: &ApiError) -> Self {
        metadata.error = Some(ErrorInfo {
            code: error.code().to_string(),
            message: error.to_string(),
        });
        Self {
            response_metadata: metadata,
            result: Value::Null,
            status: error.status(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for Envelope {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}
