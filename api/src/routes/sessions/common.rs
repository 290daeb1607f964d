//! Session request/response models.
//!
//! Provides data structures for session creation and for serializing sessions
//! (including their owned submissions) back to the client, plus the `From`
//! implementations that convert store models into API-friendly responses.

use grader::GradingMode;
use serde::{Deserialize, Serialize};
use store::Session;
use validator::Validate;

use crate::routes::sessions::submissions::common::SubmissionResponse;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateSessionRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Instruction is required"))]
    pub instruction: String,

    #[validate(length(min = 1, message = "Scoring rubric is required"))]
    pub rubric: String,

    pub grading_mode: GradingMode,

    /// Required non-empty for output-match sessions; ignored (forced empty)
    /// for logic-check sessions. The mode-dependent check happens in the
    /// handler since it cannot be expressed as a field attribute.
    #[serde(default)]
    pub expected_output: String,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub id: String,
    pub title: String,
    pub instruction: String,
    pub rubric: String,
    pub grading_mode: GradingMode,
    pub expected_output: String,
    pub submissions: Vec<SubmissionResponse>,
    pub created_at: String,
}

impl From<Session> for SessionResponse {
    fn from(session: Session) -> Self {
        Self {
            id: session.id,
            title: session.title,
            instruction: session.instruction,
            rubric: session.rubric,
            grading_mode: session.grading_mode,
            expected_output: session.expected_output,
            submissions: session
                .submissions
                .into_iter()
                .map(SubmissionResponse::from)
                .collect(),
            created_at: session.created_at.to_rfc3339(),
        }
    }
}
