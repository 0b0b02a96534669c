//! Gopher translator HTTP API server (Axum).
//!
//! Exposes word and sentence translation backed by the shared history, the
//! sorted history export, and a health probe.

pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use state::AppState;

/// Build the application router with a fresh history.
pub fn app() -> Router {
    app_with_state(AppState::new())
}

/// Build the application router with a custom state.
pub fn app_with_state(state: AppState) -> Router {
    Router::new()
        .merge(routes::health_routes())
        .merge(routes::translate_routes())
        .merge(routes::history_routes())
        .with_state(state)
}
