//! Application state shared across all handlers.

use gopher_core::History;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub history: Arc<History>,
    pub start_time: Instant,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_history(Arc::new(History::new()))
    }

    pub fn with_history(history: Arc<History>) -> Self {
        Self {
            history,
            start_time: Instant::now(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
