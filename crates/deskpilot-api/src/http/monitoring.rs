//! Health and discovery handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub requests: u64,
    pub timestamp: String,
}

/// Supported actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionsResponse {
    pub tool: String,
    pub count: usize,
    pub actions: Vec<String>,
}

/// `GET /health`
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime().as_secs(),
        requests: state.request_count(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// `GET /actions`
pub async fn list_actions(State(state): State<Arc<AppState>>) -> Json<ActionsResponse> {
    let actions = state.actions();
    Json(ActionsResponse {
        tool: state.tool.definition().id.clone(),
        count: actions.len(),
        actions,
    })
}
