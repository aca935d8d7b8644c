use std::env;
use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    routing::{get, post},
    Router,
};
use serde_json::Value as JsonValue;
use tower::ServiceExt;

use hireflow_backend::store::MemoryStore;
use hireflow_backend::AppState;

const BOUNDARY: &str = "----hireflow-test-boundary";

fn test_state() -> AppState {
    env::set_var("SERVER_ADDRESS", "127.0.0.1:0");
    env::set_var("API_RPS", "100");
    env::set_var("WEBHOOK_RPS", "100");
    // AUTOMATION_WEBHOOK_URL stays unset: any request that reaches the
    // upstream call would come back 502, so a 400 proves validation ran
    // first.
    let _ = hireflow_backend::config::init_config();
    AppState::new(Arc::new(MemoryStore::new()))
}

fn app(state: AppState) -> Router {
    Router::new()
        .route(
            "/webhook/submit-application",
            post(hireflow_backend::routes::webhook_proxy::submit_application),
        )
        .route(
            "/webhook/test-proxy",
            get(hireflow_backend::routes::webhook_proxy::test_proxy),
        )
        .with_state(state)
}

fn text_part(name: &str, value: &str) -> String {
    format!(
        "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
        BOUNDARY, name, value
    )
}

fn file_part(name: &str, filename: &str, content: &str) -> String {
    format!(
        "--{}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: application/pdf\r\n\r\n{}\r\n",
        BOUNDARY, name, filename, content
    )
}

fn multipart_request(parts: &[String]) -> Request<Body> {
    let mut body = parts.concat();
    body.push_str(&format!("--{}--\r\n", BOUNDARY));
    Request::builder()
        .method("POST")
        .uri("/webhook/submit-application")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}

async fn body_json(resp: axum::response::Response) -> JsonValue {
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn submission_without_resume_is_rejected_before_any_upstream_call() {
    let app = app(test_state());

    let req = multipart_request(&[
        text_part("job_id", "42"),
        text_part("candidate_name", "Alice"),
        text_part("email", "alice@example.com"),
        text_part("whatsapp_number", "+49157000000"),
    ]);
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("Resume"));
}

#[tokio::test]
async fn submission_with_empty_resume_file_is_rejected() {
    let app = app(test_state());

    let req = multipart_request(&[
        text_part("candidate_name", "Alice"),
        text_part("email", "alice@example.com"),
        file_part("resume", "cv.pdf", ""),
    ]);
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn submission_without_candidate_name_is_rejected() {
    let app = app(test_state());

    let req = multipart_request(&[
        text_part("email", "alice@example.com"),
        file_part("resume", "cv.pdf", "%PDF-1.4 fake"),
    ]);
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("candidate_name"));
}

#[tokio::test]
async fn complete_submission_fails_upstream_when_no_webhook_is_configured() {
    let app = app(test_state());

    let req = multipart_request(&[
        text_part("job_id", "42"),
        text_part("job_title", "Backend Engineer"),
        text_part("candidate_name", "Alice"),
        text_part("email", "alice@example.com"),
        file_part("resume", "cv.pdf", "%PDF-1.4 fake"),
    ]);
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_proxy_reports_upstream_configuration() {
    let app = app(test_state());

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/webhook/test-proxy")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["upstream_configured"], false);
}
