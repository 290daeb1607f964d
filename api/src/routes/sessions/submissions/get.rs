//! Submission retrieval routes.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::response::ApiResponse;
use crate::routes::sessions::submissions::common::SubmissionResponse;
use crate::state::AppState;

/// GET /api/sessions/{session_id}/submissions
///
/// List the session's submissions, newest first. Ordering reflects upload
/// order, never grading-completion order: a later upload that finishes grading
/// first stays where it was inserted.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": [
///     { "id": "c0ffee…", "file_name": "Main.java", "status": "graded" }
///   ],
///   "message": "Submissions retrieved successfully"
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
pub async fn list_submissions(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Response {
    match state.sessions().get(&session_id) {
        Some(session) => {
            let submissions: Vec<SubmissionResponse> = session
                .submissions
                .into_iter()
                .map(SubmissionResponse::from)
                .collect();
            Json(ApiResponse::success(
                submissions,
                "Submissions retrieved successfully",
            ))
            .into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("Session not found")),
        )
            .into_response(),
    }
}
