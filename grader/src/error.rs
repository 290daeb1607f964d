//! Grader Error Types
//!
//! This module defines the [`GraderError`] enum, which encapsulates the failure
//! categories of the grading pipeline: missing credential configuration and
//! remote-service failures (transport, non-success status, or unparsable verdict).
//! Each variant carries a descriptive message for diagnostics.
//!
//! # Usage
//!
//! Use [`GraderError`] as the error type in functions that touch the remote
//! grading service. Callers are expected to show [`GraderError::user_message`]
//! rather than the raw cause.

use std::fmt;

/// Message shown to end users for any remote-service failure. The underlying
/// cause is kept on the variant for logs, never surfaced verbatim.
const SERVICE_FAILURE_MESSAGE: &str = "Failed to get a valid grading result from the AI.";

/// Represents all error types that can occur while grading a submission.
#[derive(Debug)]
pub enum GraderError {
    /// No API key is configured; detected before any network call is made.
    MissingApiKey,
    /// The remote round trip or verdict parsing failed. The payload is the
    /// diagnostic cause (transport error, status code, or parse error).
    Service(String),
}

impl GraderError {
    /// Human-readable message suitable for writing into a submission's error
    /// field and displaying inline.
    pub fn user_message(&self) -> String {
        match self {
            GraderError::MissingApiKey => "Gemini API key is not configured.".to_string(),
            GraderError::Service(_) => SERVICE_FAILURE_MESSAGE.to_string(),
        }
    }
}

impl fmt::Display for GraderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraderError::MissingApiKey => write!(f, "Gemini API key is not configured."),
            GraderError::Service(cause) => {
                write!(f, "{} ({})", SERVICE_FAILURE_MESSAGE, cause)
            }
        }
    }
}

impl std::error::Error for GraderError {}
