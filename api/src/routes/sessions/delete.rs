//! Session deletion routes.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::response::ApiResponse;
use crate::state::AppState;

/// DELETE /api/sessions/{session_id}
///
/// Delete a grading session and every submission it owns. Deletion is
/// permanent and immediate; grading calls still in flight for the deleted
/// session run to completion and their outcomes are silently discarded.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": {},
///   "message": "Session deleted successfully"
/// }
/// ```
///
/// - `404 Not Found`
/// ```json
/// {
///   "success": false,
///   "message": "Session not found"
/// }
/// ```
pub async fn delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Response {
    if state.sessions().delete(&session_id) {
        tracing::info!("Deleted grading session {session_id}");
        (
            StatusCode::OK,
            Json(ApiResponse::success((), "Session deleted successfully")),
        )
            .into_response()
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("Session not found")),
        )
            .into_response()
    }
}
