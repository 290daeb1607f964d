//! Session retrieval routes.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::response::ApiResponse;
use crate::routes::sessions::common::SessionResponse;
use crate::state::AppState;

/// GET /api/sessions
///
/// List all grading sessions, newest first. Each entry includes the session's
/// submissions so the client can show counts and statuses without extra calls.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": [
///     { "id": "7f8d69f2-…", "title": "Homework 1", "submissions": [] }
///   ],
///   "message": "Sessions retrieved successfully"
/// }
/// ```
pub async fn list_sessions(State(state): State<AppState>) -> impl IntoResponse {
    let sessions: Vec<SessionResponse> = state
        .sessions()
        .list()
        .into_iter()
        .map(SessionResponse::from)
        .collect();

    Json(ApiResponse::success(
        sessions,
        "Sessions retrieved successfully",
    ))
}

/// GET /api/sessions/{session_id}
///
/// Retrieve a single grading session, including its submissions newest first.
///
/// ### Responses
///
/// - `200 OK` with the session payload
/// - `404 Not Found`
/// ```json
/// {
///   "success": false,
///   "message": "Session not found"
/// }
/// ```
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Response {
    match state.sessions().get(&session_id) {
        Some(session) => Json(ApiResponse::success(
            SessionResponse::from(session),
            "Session retrieved successfully",
        ))
        .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("Session not found")),
        )
            .into_response(),
    }
}
