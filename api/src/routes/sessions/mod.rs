//! Grading session routes.
//!
//! Mounts session CRUD under `/sessions` and the per-session submission routes
//! under `/sessions/{session_id}/submissions`.

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::state::AppState;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod submissions;

pub fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(post::create).get(get::list_sessions))
        .route(
            "/{session_id}",
            get(get::get_session).delete(delete::delete_session),
        )
        .route(
            "/{session_id}/submissions",
            post(submissions::post::upload_submission).get(submissions::get::list_submissions),
        )
        .route(
            "/{session_id}/submissions/{submission_id}",
            delete(submissions::delete::delete_submission),
        )
}
