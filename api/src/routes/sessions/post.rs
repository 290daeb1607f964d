//! Session creation routes.
//!
//! Provides the `POST /api/sessions` endpoint for creating new grading
//! sessions. Responses follow the standard `ApiResponse` format.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use grader::GradingMode;
use store::NewSession;
use validator::Validate;

use crate::response::ApiResponse;
use crate::routes::sessions::common::{CreateSessionRequest, SessionResponse};
use crate::state::AppState;

/// POST /api/sessions
///
/// Create a new grading session.
///
/// ### Request Body
/// ```json
/// {
///   "title": "Homework 1: Hello World",
///   "instruction": "Write a Java program that prints 'Hello, World!'",
///   "rubric": "10 points: perfect output. 5 points: minor formatting errors.",
///   "grading_mode": "output",
///   "expected_output": "Hello, World!"
/// }
/// ```
///
/// ### Validation Rules
/// * `title`, `instruction`, `rubric`: required, non-empty
/// * `grading_mode`: `"output"` or `"logic"`; immutable after creation
/// * `expected_output`: required non-empty when `grading_mode` is `"output"`;
///   ignored and stored as `""` when `grading_mode` is `"logic"`
///
/// ### Responses
///
/// - `201 Created`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "id": "7f8d69f2-…",
///     "title": "Homework 1: Hello World",
///     "grading_mode": "output",
///     "expected_output": "Hello, World!",
///     "submissions": [],
///     "created_at": "2025-05-23T18:00:00Z"
///   },
///   "message": "Session created successfully"
/// }
/// ```
///
/// - `400 Bad Request` (validation failure)
/// ```json
/// {
///   "success": false,
///   "message": "Title is required; Scoring rubric is required"
/// }
/// ```
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateSessionRequest>,
) -> Response {
    if let Err(validation_errors) = req.validate() {
        let error_message = common::format_validation_errors(&validation_errors);
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error(error_message)),
        )
            .into_response();
    }

    if req.grading_mode == GradingMode::Output && req.expected_output.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error(
                "Expected output is required for output-match sessions",
            )),
        )
            .into_response();
    }

    let session = state.sessions().create(NewSession {
        title: req.title,
        instruction: req.instruction,
        rubric: req.rubric,
        grading_mode: req.grading_mode,
        expected_output: req.expected_output,
    });

    tracing::info!(
        "Created grading session {} ({:?})",
        session.id,
        session.grading_mode
    );

    (
        StatusCode::CREATED,
        Json(ApiResponse::success(
            SessionResponse::from(session),
            "Session created successfully",
        )),
    )
        .into_response()
}
