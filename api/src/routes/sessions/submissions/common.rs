//! Submission response models.

use grader::GradingResult;
use serde::Serialize;
use store::{Submission, SubmissionStatus};

#[derive(Debug, Serialize)]
pub struct SubmissionResponse {
    pub id: String,
    pub file_name: String,
    pub code: String,
    pub status: SubmissionStatus,
    pub result: Option<GradingResult>,
    pub error: Option<String>,
    pub created_at: String,
}

impl From<Submission> for SubmissionResponse {
    fn from(submission: Submission) -> Self {
        let status = submission.status();
        Self {
            id: submission.id,
            file_name: submission.file_name,
            code: submission.code,
            status,
            result: submission.result,
            error: submission.error,
            created_at: submission.created_at.to_rfc3339(),
        }
    }
}
