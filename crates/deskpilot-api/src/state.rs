//! Application state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use deskpilot_protocols::Tool;

/// Application state shared across handlers.
pub struct AppState {
    pub tool: Arc<dyn Tool>,
    start_time: Instant,
    request_count: AtomicU64,
}

impl AppState {
    pub fn new(tool: Arc<dyn Tool>) -> Self {
        Self {
            tool,
            start_time: Instant::now(),
            request_count: AtomicU64::new(0),
        }
    }

    /// Get uptime.
    pub fn uptime(&self) -> std::time::Duration {
        self.start_time.elapsed()
    }

    /// Get request count.
    pub fn request_count(&self) -> u64 {
        self.request_count.load(Ordering::Relaxed)
    }

    /// Increment request count.
    pub fn increment_requests(&self) {
        self.request_count.fetch_add(1, Ordering::Relaxed);
    }

    /// Actions advertised by the tool definition.
    pub fn actions(&self) -> Vec<String> {
        self.tool
            .definition()
            .metadata
            .get("actions")
            .and_then(|v| v.as_array())
            .map(|items| {
                items
                    .iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }
}
