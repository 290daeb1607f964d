//! Shared grading types: the session configuration handed to the grader and the
//! structured verdict the remote model must return.

use serde::{Deserialize, Serialize};

/// How a session's submissions are judged.
///
/// `Output` grades by comparing the program's (mentally simulated) console
/// output against an expected string; `Logic` grades the code's correctness
/// against the assignment instructions with no output comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradingMode {
    Output,
    Logic,
}

/// Per-session grading configuration captured at session creation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradingConfig {
    pub grading_mode: GradingMode,
    pub title: String,
    pub instructions: String,
    /// Meaningful only for [`GradingMode::Output`]; empty for `Logic` sessions.
    pub expected_output: String,
}

/// The verdict the remote model returns for one submission.
///
/// `max_score` is requested to equal the highest score derivable from the
/// rubric; it is trusted as returned, never cross-checked locally (the rubric
/// is unstructured free text).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradingResult {
    pub score: f64,
    pub max_score: f64,
    /// Student-facing explanation of the score.
    pub feedback: String,
    /// Teacher-facing step-by-step reasoning behind the score.
    pub reasoning: String,
}
