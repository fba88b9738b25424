//! HTTP route definitions.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::http::{action, monitoring};
use crate::state::AppState;

/// Create the router.
///
/// ```text
/// GET  /         - Run the action named by the `Action` query parameter
/// POST /         - Run an action from a JSON body (query parameters win)
/// GET  /health   - Health check
/// GET  /actions  - Supported action identifiers
/// ```
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(action::action_get).post(action::action_post))
        .route("/health", get(monitoring::health_check))
        .route("/actions", get(monitoring::list_actions))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
