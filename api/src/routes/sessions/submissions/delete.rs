//! Submission deletion routes.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::response::ApiResponse;
use crate::state::AppState;

/// DELETE /api/sessions/{session_id}/submissions/{submission_id}
///
/// Delete a submission unconditionally, whatever its grading state. A grading
/// call still in flight for this submission is not cancelled; its eventual
/// outcome is silently discarded.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": {},
///   "message": "Submission deleted successfully"
/// }
/// ```
///
/// - `404 Not Found`
/// ```json
/// {
///   "success": false,
///   "message": "Submission not found"
/// }
/// ```
pub async fn delete_submission(
    State(state): State<AppState>,
    Path((session_id, submission_id)): Path<(String, String)>,
) -> Response {
    if state.sessions().remove_submission(&session_id, &submission_id) {
        tracing::info!("Deleted submission {submission_id} from session {session_id}");
        (
            StatusCode::OK,
            Json(ApiResponse::success((), "Submission deleted successfully")),
        )
            .into_response()
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("Submission not found")),
        )
            .into_response()
    }
}
