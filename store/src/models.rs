//! Session and submission models.
//!
//! A [`Session`] is a configured assignment (instructions, rubric, grading mode,
//! optional expected output) that exclusively owns its ordered collection of
//! [`Submission`]s, newest first. A submission is one uploaded source file plus
//! its grading outcome; it starts Pending and settles exactly once as Graded or
//! Failed.

use chrono::{DateTime, Utc};
use grader::{GradingConfig, GradingMode, GradingResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Payload for creating a session. Field-level validation (non-empty text,
/// mode-dependent expected output) happens at the API boundary; the
/// mode/expected-output invariant is enforced again in [`Session::new`].
#[derive(Debug, Clone, Deserialize)]
pub struct NewSession {
    pub title: String,
    pub instruction: String,
    pub rubric: String,
    pub grading_mode: GradingMode,
    #[serde(default)]
    pub expected_output: String,
}

/// A configured assignment plus its submissions.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub id: String,
    pub title: String,
    pub instruction: String,
    pub rubric: String,
    pub grading_mode: GradingMode,
    /// Non-empty for `Output` sessions; always `""` for `Logic` sessions.
    pub expected_output: String,
    /// Newest first. Owned exclusively by this session.
    pub submissions: Vec<Submission>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Build a session from a creation payload, assigning a fresh id and
    /// forcing `expected_output` empty for `Logic` sessions regardless of what
    /// was submitted with the form.
    pub fn new(new: NewSession) -> Self {
        let expected_output = match new.grading_mode {
            GradingMode::Logic => String::new(),
            GradingMode::Output => new.expected_output,
        };
        Self {
            id: Uuid::new_v4().to_string(),
            title: new.title,
            instruction: new.instruction,
            rubric: new.rubric,
            grading_mode: new.grading_mode,
            expected_output,
            submissions: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// The grading configuration handed to the grader for every submission in
    /// this session.
    pub fn grading_config(&self) -> GradingConfig {
        GradingConfig {
            grading_mode: self.grading_mode,
            title: self.title.clone(),
            instructions: self.instruction.clone(),
            expected_output: self.expected_output.clone(),
        }
    }
}

/// Lifecycle state of a submission, derived from which outcome field is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Pending,
    Graded,
    Failed,
}

/// One uploaded source file plus its grading outcome.
#[derive(Debug, Clone, Serialize)]
pub struct Submission {
    pub id: String,
    /// Display label; not validated for uniqueness.
    pub file_name: String,
    /// Raw text captured at upload time, immutable afterwards.
    pub code: String,
    /// Set when grading completes successfully.
    pub result: Option<GradingResult>,
    /// Set when grading fails; mutually exclusive with `result` (last write wins).
    pub error: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Submission {
    pub fn new(file_name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            file_name: file_name.into(),
            code: code.into(),
            result: None,
            error: None,
            created_at: Utc::now(),
        }
    }

    pub fn status(&self) -> SubmissionStatus {
        if self.result.is_some() {
            SubmissionStatus::Graded
        } else if self.error.is_some() {
            SubmissionStatus::Failed
        } else {
            SubmissionStatus::Pending
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_session(mode: GradingMode, expected_output: &str) -> NewSession {
        NewSession {
            title: "Homework 1".to_string(),
            instruction: "Print 42".to_string(),
            rubric: "10 pts: prints 42".to_string(),
            grading_mode: mode,
            expected_output: expected_output.to_string(),
        }
    }

    #[test]
    fn output_mode_keeps_expected_output() {
        let session = Session::new(new_session(GradingMode::Output, "42"));
        assert_eq!(session.expected_output, "42");
    }

    #[test]
    fn logic_mode_forces_expected_output_empty() {
        let session = Session::new(new_session(GradingMode::Logic, "ignored text"));
        assert_eq!(session.expected_output, "");
    }

    #[test]
    fn fresh_submission_is_pending() {
        let submission = Submission::new("Main.java", "class Main {}");
        assert_eq!(submission.status(), SubmissionStatus::Pending);
        assert!(submission.result.is_none());
        assert!(submission.error.is_none());
    }

    #[test]
    fn session_ids_are_unique() {
        let a = Session::new(new_session(GradingMode::Logic, ""));
        let b = Session::new(new_session(GradingMode::Logic, ""));
        assert_ne!(a.id, b.id);
    }
}
