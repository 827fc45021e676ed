//! HTTP API server (Axum) for the CSS minifier and JSON formatter.
//!
//! Provides REST endpoints for minification, validation, JSON formatting,
//! session management, and health monitoring.

pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use state::AppState;

/// Build the application router with default state.
pub fn app() -> Router {
    app_with_state(AppState::new())
}

/// Build the application router with a custom state.
pub fn app_with_state(state: AppState) -> Router {
    Router::new()
        .merge(routes::health_routes())
        .merge(routes::css_routes())
        .merge(routes::json_routes())
        .merge(routes::session_routes())
        .with_state(state)
}
