mod helpers;

use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use helpers::app::{
    MockGrader, create_session, json_request, make_test_app, request, response_json, sample_result,
};

fn app() -> axum::Router {
    make_test_app(Arc::new(MockGrader {
        result: sample_result(),
    }))
}

fn output_session_body() -> serde_json::Value {
    json!({
        "title": "Homework 1: Hello World",
        "instruction": "Write a Java program that prints 'Hello, World!'",
        "rubric": "10 points: perfect output. 5 points: minor formatting errors.",
        "grading_mode": "output",
        "expected_output": "Hello, World!"
    })
}

#[tokio::test]
async fn health_check_passes() {
    let response = app()
        .oneshot(request("GET", "/api/health"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json["data"], "OK");
}

#[tokio::test]
async fn create_output_session_keeps_expected_output() {
    let response = app()
        .oneshot(json_request("POST", "/api/sessions", output_session_body()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = response_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["title"], "Homework 1: Hello World");
    assert_eq!(json["data"]["grading_mode"], "output");
    assert_eq!(json["data"]["expected_output"], "Hello, World!");
    assert_eq!(json["data"]["submissions"].as_array().unwrap().len(), 0);
    assert!(!json["data"]["id"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn create_logic_session_forces_expected_output_empty() {
    let response = app()
        .oneshot(json_request(
            "POST",
            "/api/sessions",
            json!({
                "title": "Homework 3",
                "instruction": "Print Fibonacci(10)",
                "rubric": "10 pts: correct value",
                "grading_mode": "logic",
                "expected_output": "text typed before switching modes"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = response_json(response).await;
    assert_eq!(json["data"]["grading_mode"], "logic");
    assert_eq!(json["data"]["expected_output"], "");
}

#[tokio::test]
async fn create_session_rejects_empty_required_fields() {
    let response = app()
        .oneshot(json_request(
            "POST",
            "/api/sessions",
            json!({
                "title": "",
                "instruction": "Do things",
                "rubric": "",
                "grading_mode": "logic"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = response_json(response).await;
    assert_eq!(json["success"], false);
    let message = json["message"].as_str().unwrap();
    assert!(message.contains("Title is required"));
    assert!(message.contains("Scoring rubric is required"));
}

#[tokio::test]
async fn create_output_session_requires_expected_output() {
    let response = app()
        .oneshot(json_request(
            "POST",
            "/api/sessions",
            json!({
                "title": "Homework 1",
                "instruction": "Print 42",
                "rubric": "10 pts",
                "grading_mode": "output",
                "expected_output": "   "
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = response_json(response).await;
    assert_eq!(
        json["message"],
        "Expected output is required for output-match sessions"
    );
}

#[tokio::test]
async fn list_sessions_returns_newest_first() {
    let app = app();
    let first = create_session(&app, output_session_body()).await;
    let second = create_session(
        &app,
        json!({
            "title": "Homework 2",
            "instruction": "Print 42",
            "rubric": "10 pts",
            "grading_mode": "output",
            "expected_output": "42"
        }),
    )
    .await;

    let response = app.oneshot(request("GET", "/api/sessions")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    let sessions = json["data"].as_array().unwrap();
    assert_eq!(sessions.len(), 2);
    assert_eq!(sessions[0]["id"], second);
    assert_eq!(sessions[1]["id"], first);
}

#[tokio::test]
async fn get_session_returns_404_for_unknown_id() {
    let response = app()
        .oneshot(request("GET", "/api/sessions/unknown-id"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = response_json(response).await;
    assert_eq!(json["message"], "Session not found");
}

#[tokio::test]
async fn delete_session_is_permanent() {
    let app = app();
    let session_id = create_session(&app, output_session_body()).await;

    let response = app
        .clone()
        .oneshot(request("DELETE", &format!("/api/sessions/{session_id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(request("GET", &format!("/api/sessions/{session_id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // A second delete finds nothing.
    let response = app
        .oneshot(request("DELETE", &format!("/api/sessions/{session_id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
