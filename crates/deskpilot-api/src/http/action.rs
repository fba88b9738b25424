//! Action handlers for `GET /` and `POST /`.

use std::collections::HashMap;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Query, State};
use serde_json::{Map, Value};
use tracing::{info, warn};
use uuid::Uuid;

use deskpilot_protocols::ToolContext;

use crate::error::ApiError;
use crate::http::envelope::{Envelope, ResponseMetadata, DEFAULT_VERSION};
use crate::state::AppState;

/// `GET /?Action=...&Version=...&Param=...`
pub async fn action_get(
    State(state): State<Arc<AppState>>,
    Query(query): Query<HashMap<String, String>>,
) -> Envelope {
    let mut params = Map::new();
    merge_query(&mut params, query);
    execute(&state, params).await
}

/// `POST /` with a JSON object body. Query parameters override body keys.
pub async fn action_post(
    State(state): State<Arc<AppState>>,
    Query(query): Query<HashMap<String, String>>,
    body: Bytes,
) -> Envelope {
    let mut params = match parse_body(&body) {
        Ok(params) => params,
        Err(e) => {
            let mut params = Map::new();
            merge_query(&mut params, query);
            let metadata = metadata_for(&params, Uuid::new_v4().to_string());
            warn!(error = %e, "Rejected request body");
            return Envelope::failure(metadata, &e);
        }
    };
    merge_query(&mut params, query);
    execute(&state, params).await
}

fn merge_query(params: &mut Map<String, Value>, query: HashMap<String, String>) {
    for (key, value) in query {
        params.insert(key, Value::String(value));
    }
}

fn parse_body(body: &[u8]) -> Result<Map<String, Value>, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Map::new());
    }
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(ApiError::InvalidParameter(
            "Request body must be a JSON object".to_string(),
        )),
        Err(e) => Err(ApiError::InvalidParameter(format!(
            "Invalid JSON body: {}",
            e
        ))),
    }
}

fn metadata_for(params: &Map<String, Value>, request_id: String) -> ResponseMetadata {
    let text = |key: &str| params.get(key).and_then(Value::as_str).map(str::trim);
    ResponseMetadata::new(
        request_id,
        text("Action").unwrap_or_default(),
        text("Version")
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_VERSION),
    )
}

async fn execute(state: &AppState, params: Map<String, Value>) -> Envelope {
    state.increment_requests();
    let request_id = Uuid::new_v4().to_string();
    let metadata = metadata_for(&params, request_id.clone());

    if metadata.action.is_empty() {
        let error = ApiError::InvalidAction("Missing Action".to_string());
        warn!(request_id = %request_id, "Request without action");
        return Envelope::failure(metadata, &error);
    }

    info!(request_id = %request_id, action = %metadata.action, "Handling action");
    let ctx = ToolContext::new(request_id.clone());
    let result = state
        .tool
        .execute(Value::Object(params), ctx)
        .await
        .map_err(ApiError::from)
        .and_then(|result| {
            if result.success {
                Ok(result.structured_output.unwrap_or(Value::Null))
            } else {
                Err(ApiError::Internal(result.error.unwrap_or_default()))
            }
        });

    match result {
        Ok(output) => Envelope::success(metadata, output),
        Err(e) => {
            warn!(
                request_id = %request_id,
                action = %metadata.action,
                code = e.code(),
                error = %e,
                "Action failed"
            );
            Envelope::failure(metadata, &e)
        }
    }
}
