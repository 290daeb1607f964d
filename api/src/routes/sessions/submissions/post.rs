//! Submission upload route: the grading orchestration entry point.
//!
//! Uploading a file inserts a Pending submission synchronously, responds
//! immediately, and spawns one independent grading task for that submission.
//! The task's completion handler writes back through the store's targeted
//! operations keyed by submission id, so a submission deleted while its call
//! is in flight simply has its late outcome discarded.

use axum::{
    Json,
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::response::ApiResponse;
use crate::routes::sessions::submissions::common::SubmissionResponse;
use crate::state::AppState;

/// POST /api/sessions/{session_id}/submissions
///
/// Upload a single student source file for grading.
///
/// ### Multipart Body (form-data)
/// - `file` (single file, read fully as UTF-8 text)
///
/// ### Example curl
/// ```bash
/// curl -X POST http://localhost:3000/api/sessions/7f8d69f2-…/submissions \
///   -F "file=@Main.java"
/// ```
///
/// ### Responses
///
/// - `202 Accepted` — the submission was recorded in Pending state and grading
///   started in the background:
/// ```json
/// {
///   "success": true,
///   "data": {
///     "id": "c0ffee…",
///     "file_name": "Main.java",
///     "status": "pending",
///     "result": null,
///     "error": null
///   },
///   "message": "Submission received, grading started"
/// }
/// ```
///
/// - `400 Bad Request` (no file, no filename, empty file, or not readable as
///   text)
/// ```json
/// {
///   "success": false,
///   "message": "File could not be read as text"
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
pub async fn upload_submission(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    mut multipart: Multipart,
) -> Response {
    let Some(session) = state.sessions().get(&session_id) else {
        return (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("Session not found")),
        )
            .into_response();
    };

    let field = match multipart.next_field().await {
        Ok(Some(field)) => field,
        Ok(None) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<()>::error("No file provided")),
            )
                .into_response();
        }
        Err(e) => {
            tracing::warn!("Error reading multipart field: {e}");
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<()>::error("Invalid file upload")),
            )
                .into_response();
        }
    };

    let file_name = match field.file_name().map(|s| s.to_string()) {
        Some(name) => name,
        None => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<()>::error("No filename provided")),
            )
                .into_response();
        }
    };

    let file_bytes = match field.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!("Error reading file bytes: {e}");
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<()>::error("Error reading file")),
            )
                .into_response();
        }
    };

    if file_bytes.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error("Empty file provided")),
        )
            .into_response();
    }

    let code = match String::from_utf8(file_bytes.to_vec()) {
        Ok(code) => code,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<()>::error("File could not be read as text")),
            )
                .into_response();
        }
    };

    // Record the Pending submission before the remote call starts so the
    // client sees it while grading is in flight.
    let Some(submission) = state.sessions().add_submission(&session_id, &file_name, &code) else {
        // Session was deleted between the lookup above and the insert.
        return (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("Session not found")),
        )
            .into_response();
    };

    spawn_grading_task(
        &state,
        session_id,
        submission.id.clone(),
        code,
        session.rubric.clone(),
        session.grading_config(),
    );

    (
        StatusCode::ACCEPTED,
        Json(ApiResponse::success(
            SubmissionResponse::from(submission),
            "Submission received, grading started",
        )),
    )
        .into_response()
}

/// Spawn one independent grading task for an uploaded submission. Uploads are
/// never serialized behind each other: each task owns its own remote call and
/// writes back only its own submission entry.
fn spawn_grading_task(
    state: &AppState,
    session_id: String,
    submission_id: String,
    code: String,
    rubric: String,
    config: grader::GradingConfig,
) {
    let sessions = state.sessions().clone();
    let grading = state.grader();

    tokio::spawn(async move {
        let outcome = grading.grade(&code, &rubric, &config).await;

        // The submission may have been deleted while the call was in flight;
        // the record ops below no-op in that case, this check is only for the log.
        if sessions.get_submission(&session_id, &submission_id).is_none() {
            tracing::warn!(
                "Discarding grading outcome for removed submission {submission_id} (session {session_id})"
            );
            return;
        }

        match outcome {
            Ok(result) => {
                tracing::info!(
                    "Graded submission {submission_id}: {}/{}",
                    result.score,
                    result.max_score
                );
                sessions.record_result(&session_id, &submission_id, result);
            }
            Err(err) => {
                tracing::error!("Grading failed for submission {submission_id}: {err}");
                sessions.record_error(&session_id, &submission_id, err.user_message());
            }
        }
    });
}
