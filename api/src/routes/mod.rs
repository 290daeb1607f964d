//! HTTP route entry point for `/api/...`.
//!
//! This module defines all HTTP entry points under the `/api` namespace.
//! Routes are organized by domain, each in its own module:
//!
//! - `/health` → Health check endpoint (public)
//! - `/sessions` → Grading session management and, nested below each session,
//!   submission upload and management

use axum::Router;

use crate::routes::{health::health_routes, sessions::session_routes};
use crate::state::AppState;

pub mod health;
pub mod sessions;

/// Builds the complete application router for all HTTP endpoints.
///
/// The returned router mounts all core API routes under their respective base
/// paths:
/// - `/health` → Health check endpoint.
/// - `/sessions` → Session CRUD plus nested `/sessions/{session_id}/submissions`.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/sessions", session_routes())
        .with_state(app_state)
}
