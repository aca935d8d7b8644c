use std::env;
use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    routing::get,
    Router,
};
use serde_json::{json, Value as JsonValue};
use tower::ServiceExt;
use uuid::Uuid;

use hireflow_backend::store::MemoryStore;
use hireflow_backend::AppState;

fn test_state() -> AppState {
    env::set_var("SERVER_ADDRESS", "127.0.0.1:0");
    env::set_var("API_RPS", "100");
    env::set_var("WEBHOOK_RPS", "100");
    let _ = hireflow_backend::config::init_config();
    AppState::new(Arc::new(MemoryStore::new()))
}

fn app(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/jobs",
            get(hireflow_backend::routes::job_routes::list_jobs)
                .post(hireflow_backend::routes::job_routes::create_job),
        )
        .route(
            "/api/jobs/:id",
            get(hireflow_backend::routes::job_routes::get_job)
                .patch(hireflow_backend::routes::job_routes::update_job)
                .delete(hireflow_backend::routes::job_routes::delete_job),
        )
        .route(
            "/api/candidates",
            axum::routing::post(hireflow_backend::routes::candidate_routes::create_candidate),
        )
        .route(
            "/api/candidates/:id",
            axum::routing::delete(hireflow_backend::routes::candidate_routes::delete_candidate),
        )
        .with_state(state)
}

async fn body_json(resp: axum::response::Response) -> JsonValue {
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: JsonValue) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn job_creation_ignores_applicant_count_input() {
    let app = app(test_state());

    let payload = json!({
        "title": "Backend Engineer",
        "department": "Engineering",
        "description": "d",
        "requirements": "r",
        "location": "Remote",
        "job_type": "full-time",
        "status": "active",
        "applicants_count": 77
    });
    let resp = app
        .clone()
        .oneshot(json_request("POST", "/api/jobs", payload))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body["applicants_count"], 0);
    assert!(body["id"].is_string());
}

#[tokio::test]
async fn applicant_counter_follows_candidate_lifecycle() {
    let app = app(test_state());

    let job_payload = json!({
        "title": "X",
        "department": "Eng",
        "description": "d",
        "requirements": "r",
        "location": "Remote",
        "job_type": "full-time",
        "status": "active"
    });
    let resp = app
        .clone()
        .oneshot(json_request("POST", "/api/jobs", job_payload))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let job = body_json(resp).await;
    let job_id = job["id"].as_str().unwrap().to_string();

    let candidate_payload = json!({
        "job_id": job_id,
        "name": "Alice",
        "email": "alice@example.com"
    });
    let resp = app
        .clone()
        .oneshot(json_request("POST", "/api/candidates", candidate_payload))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let candidate = body_json(resp).await;
    let candidate_id = candidate["id"].as_str().unwrap().to_string();

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/api/jobs/{}", job_id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let job = body_json(resp).await;
    assert_eq!(job["applicants_count"], 1);

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/candidates/{}", candidate_id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/api/jobs/{}", job_id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let job = body_json(resp).await;
    assert_eq!(job["applicants_count"], 0);
}

#[tokio::test]
async fn patch_on_missing_job_is_not_found_and_creates_nothing() {
    let app = app(test_state());

    let missing = Uuid::new_v4();
    let resp = app
        .clone()
        .oneshot(json_request(
            "PATCH",
            &format!("/api/jobs/{}", missing),
            json!({ "title": "Ghost" }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/jobs")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = body_json(resp).await;
    assert_eq!(body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn delete_on_missing_job_is_not_found() {
    let app = app(test_state());

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/jobs/{}", Uuid::new_v4()))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn job_creation_rejects_empty_title() {
    let app = app(test_state());

    let payload = json!({
        "title": "",
        "department": "Eng",
        "description": "d",
        "requirements": "r",
        "location": "Remote",
        "job_type": "contract"
    });
    let resp = app
        .clone()
        .oneshot(json_request("POST", "/api/jobs", payload))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
