//! Shared test app construction: a router wired to a deterministic grading
//! strategy instead of the live Gemini client, plus request helpers.

use std::sync::Arc;
use std::time::Duration;

use api::routes::routes;
use api::state::AppState;
use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response, header::CONTENT_TYPE},
};
use grader::{Grader, GraderError, GradingConfig, GradingResult};
use serde_json::Value;
use tower::ServiceExt;

/// Grader that always succeeds with a fixed verdict.
pub struct MockGrader {
    pub result: GradingResult,
}

#[async_trait]
impl Grader for MockGrader {
    async fn grade(
        &self,
        _student_code: &str,
        _rubric: &str,
        _config: &GradingConfig,
    ) -> Result<GradingResult, GraderError> {
        Ok(self.result.clone())
    }
}

/// Grader that always fails the way a transport error does.
pub struct FailingGrader;

#[async_trait]
impl Grader for FailingGrader {
    async fn grade(
        &self,
        _student_code: &str,
        _rubric: &str,
        _config: &GradingConfig,
    ) -> Result<GradingResult, GraderError> {
        Err(GraderError::Service("connection refused".to_string()))
    }
}

/// Grader that succeeds only after a delay, for delete-while-in-flight tests.
pub struct SlowGrader {
    pub delay: Duration,
    pub result: GradingResult,
}

#[async_trait]
impl Grader for SlowGrader {
    async fn grade(
        &self,
        _student_code: &str,
        _rubric: &str,
        _config: &GradingConfig,
    ) -> Result<GradingResult, GraderError> {
        tokio::time::sleep(self.delay).await;
        Ok(self.result.clone())
    }
}

pub fn sample_result() -> GradingResult {
    GradingResult {
        score: 8.0,
        max_score: 10.0,
        feedback: "Close".to_string(),
        reasoning: "Simulated output differs in punctuation.".to_string(),
    }
}

pub fn make_test_app(grader: Arc<dyn Grader>) -> Router {
    Router::new().nest("/api", routes(AppState::with_grader(grader)))
}

/// Build a `multipart/form-data` body containing a single file part.
pub fn multipart_body(filename: &str, file_content: &[u8]) -> (String, Vec<u8>) {
    let boundary = "----BoundaryTest".to_string();
    let mut body = Vec::new();
    body.extend(format!("--{}\r\n", boundary).as_bytes());
    body.extend(
        format!(
            "Content-Disposition: form-data; name=\"file\"; filename=\"{}\"\r\nContent-Type: application/octet-stream\r\n\r\n",
            filename
        )
        .as_bytes(),
    );
    body.extend(file_content);
    body.extend(b"\r\n");
    body.extend(format!("--{}--\r\n", boundary).as_bytes());
    (boundary, body)
}

/// Build a multipart body whose single part carries no filename, which the
/// upload endpoint must reject.
pub fn multipart_body_without_filename(content: &[u8]) -> (String, Vec<u8>) {
    let boundary = "----BoundaryTest".to_string();
    let mut body = Vec::new();
    body.extend(format!("--{}\r\n", boundary).as_bytes());
    body.extend(b"Content-Disposition: form-data; name=\"file\"\r\n\r\n".as_slice());
    body.extend(content);
    body.extend(b"\r\n");
    body.extend(format!("--{}--\r\n", boundary).as_bytes());
    (boundary, body)
}

pub async fn response_json(response: Response<Body>) -> Value {
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn upload_request(uri: &str, boundary: &str, body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", boundary),
        )
        .body(Body::from(body))
        .unwrap()
}

/// Create a session through the API and return its id.
pub async fn create_session(app: &Router, body: Value) -> String {
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/sessions", body))
        .await
        .unwrap();
    let json = response_json(response).await;
    assert_eq!(json["success"], true, "session creation failed: {json}");
    json["data"]["id"].as_str().unwrap().to_string()
}

/// Poll the submission list until the named submission leaves Pending state,
/// returning its JSON. Panics if it never settles.
pub async fn wait_for_settled(app: &Router, session_id: &str, submission_id: &str) -> Value {
    for _ in 0..100 {
        let response = app
            .clone()
            .oneshot(request(
                "GET",
                &format!("/api/sessions/{session_id}/submissions"),
            ))
            .await
            .unwrap();
        let json = response_json(response).await;
        if let Some(submission) = json["data"]
            .as_array()
            .unwrap()
            .iter()
            .find(|sub| sub["id"] == submission_id)
        {
            if submission["status"] != "pending" {
                return submission.clone();
            }
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("submission {submission_id} never settled");
}
