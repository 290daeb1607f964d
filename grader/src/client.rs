//! # Gemini Grading Client
//!
//! This module provides the [`Grader`] trait and its production implementation,
//! [`GeminiGrader`], which scores a student submission with a single call to
//! Google's Gemini API. The request carries the assembled grading prompt
//! (see [`crate::prompt`]) together with a structured-output schema requiring
//! exactly four fields: `score`, `maxScore`, `feedback`, and `reasoning`, and a
//! low temperature for reproducibility.
//!
//! ## Environment
//!
//! - Requires `GEMINI_API_KEY` to be set (loaded through `common::config::AppConfig`).
//!   An empty key fails with [`GraderError::MissingApiKey`] before any network call.
//!
//! ## Failure behavior
//!
//! Transport errors, non-success statuses, and unparsable verdicts all collapse
//! into [`GraderError::Service`]. Callers see one generic message; the cause is
//! logged here for diagnostics. There is no retry, no backoff, and no local
//! timeout: a hang in the remote call suspends the caller indefinitely.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::error::GraderError;
use crate::prompt::build_grading_prompt;
use crate::types::{GradingConfig, GradingResult};

const GEMINI_MODEL: &str = "gemini-2.5-flash";
const GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Pluggable grading strategy: turns (code, rubric, config) into a structured
/// score via one remote call. Implemented by [`GeminiGrader`] in production and
/// by mocks in tests.
#[async_trait]
pub trait Grader: Send + Sync {
    /// Grade one submission. Suspends until the remote round trip settles.
    /// Never mutates any store; the caller writes the outcome back.
    async fn grade(
        &self,
        student_code: &str,
        rubric: &str,
        config: &GradingConfig,
    ) -> Result<GradingResult, GraderError>;
}

/// Request body for the Gemini `generateContent` call.
#[derive(Serialize)]
struct GeminiRequest {
    /// The content to send to the LLM.
    contents: Vec<Content>,
    /// Structured-output and sampling configuration.
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

/// Content wrapper for the Gemini API request.
#[derive(Serialize)]
struct Content {
    /// The parts of the message (e.g., prompt text).
    parts: Vec<Part>,
}

/// A single part of the content, typically a text prompt.
#[derive(Serialize)]
struct Part {
    /// The text content to send to the LLM.
    text: String,
}

/// Generation settings: JSON-mode output constrained to the grading schema,
/// with deterministic-leaning sampling.
#[derive(Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: &'static str,
    #[serde(rename = "responseSchema")]
    response_schema: Value,
    temperature: f64,
}

/// Response from the Gemini API.
#[derive(Deserialize)]
struct GeminiResponse {
    /// List of candidate completions from the LLM.
    candidates: Vec<Candidate>,
}

/// A single candidate response from the Gemini API.
#[derive(Deserialize)]
struct Candidate {
    /// The content of the candidate response.
    content: ContentResponse,
}

/// Content of a candidate response.
#[derive(Deserialize)]
struct ContentResponse {
    /// The parts of the response (e.g., the verdict JSON text).
    parts: Vec<PartResponse>,
}

/// A single part of the response content.
#[derive(Deserialize)]
struct PartResponse {
    /// The generated text from the LLM.
    text: String,
}

/// The response shape the model is required to fill: numeric `score` and
/// `maxScore`, student-facing `feedback`, teacher-facing `reasoning`.
pub fn grading_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "score": {
                "type": "NUMBER",
                "description": "The student's score based on the rubric. This should be a numerical value."
            },
            "maxScore": {
                "type": "NUMBER",
                "description": "The maximum possible score according to the rubric. This should be a numerical value."
            },
            "feedback": {
                "type": "STRING",
                "description": "Constructive, student-facing feedback explaining the score and highlighting areas for improvement."
            },
            "reasoning": {
                "type": "STRING",
                "description": "A step-by-step reasoning for the teacher explaining how the score was determined by applying the rubric to the code's simulated output or logic."
            }
        },
        "required": ["score", "maxScore", "feedback", "reasoning"]
    })
}

/// Grades submissions with the Gemini API.
pub struct GeminiGrader {
    client: reqwest::Client,
    api_key: String,
}

impl GeminiGrader {
    /// Create a grader with an explicit API key. An empty key is accepted here
    /// and rejected at call time, mirroring the startup-warning / call-failure
    /// split for a missing credential.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
        }
    }

    /// Create a grader from the global application configuration.
    pub fn from_config() -> Self {
        Self::new(common::config::AppConfig::global().gemini_api_key.clone())
    }
}

#[async_trait]
impl Grader for GeminiGrader {
    async fn grade(
        &self,
        student_code: &str,
        rubric: &str,
        config: &GradingConfig,
    ) -> Result<GradingResult, GraderError> {
        if self.api_key.is_empty() {
            return Err(GraderError::MissingApiKey);
        }

        let prompt = build_grading_prompt(student_code, rubric, config);

        let request_body = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: grading_response_schema(),
                temperature: 0.2,
            },
        };

        let response = self
            .client
            .post(format!(
                "{}/{}:generateContent?key={}",
                GEMINI_ENDPOINT, GEMINI_MODEL, self.api_key
            ))
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Gemini request failed: {e}");
                GraderError::Service(e.to_string())
            })?;

        let status = response.status();
        let response_text = response.text().await.map_err(|e| {
            tracing::error!("Failed to read Gemini response body: {e}");
            GraderError::Service(e.to_string())
        })?;

        if !status.is_success() {
            tracing::error!("Gemini returned {status}: {response_text}");
            return Err(GraderError::Service(format!(
                "unexpected status {status}"
            )));
        }

        let response: GeminiResponse = serde_json::from_str(&response_text).map_err(|e| {
            tracing::error!("Error decoding Gemini response: {e}. Full response: {response_text}");
            GraderError::Service(format!("error decoding response body: {e}"))
        })?;

        let verdict_text = response
            .candidates
            .first()
            .and_then(|candidate| candidate.content.parts.first())
            .map(|part| part.text.trim().to_string())
            .ok_or_else(|| {
                tracing::error!("Gemini response contained no candidates");
                GraderError::Service("response contained no candidates".to_string())
            })?;

        serde_json::from_str::<GradingResult>(&verdict_text).map_err(|e| {
            tracing::error!("Gemini verdict did not match the grading schema: {e}. Text: {verdict_text}");
            GraderError::Service(format!("verdict did not match the grading schema: {e}"))
        })
    }
}
