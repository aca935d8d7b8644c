use std::env;
use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    routing::{get, post},
    Router,
};
use chrono::Utc;
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
            post(hireflow_backend::routes::job_routes::create_job),
        )
        .route(
            "/api/candidates",
            get(hireflow_backend::routes::candidate_routes::list_candidates)
                .post(hireflow_backend::routes::candidate_routes::create_candidate),
        )
        .route(
            "/api/candidates/:id",
            get(hireflow_backend::routes::candidate_routes::get_candidate)
                .patch(hireflow_backend::routes::candidate_routes::update_candidate)
                .delete(hireflow_backend::routes::candidate_routes::delete_candidate),
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

async fn create_job(app: &Router) -> String {
    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/jobs",
            json!({
                "title": "Backend Engineer",
                "department": "Eng",
                "description": "d",
                "requirements": "r",
                "location": "Remote",
                "job_type": "full-time"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    body_json(resp).await["id"].as_str().unwrap().to_string()
}

async fn create_candidate(app: &Router, job_id: &str, extra: JsonValue) -> JsonValue {
    let mut payload = json!({
        "job_id": job_id,
        "name": "Alice",
        "email": "alice@example.com"
    });
    if let (Some(base), Some(extra)) = (payload.as_object_mut(), extra.as_object()) {
        for (key, value) in extra {
            base.insert(key.clone(), value.clone());
        }
    }
    let resp = app
        .clone()
        .oneshot(json_request("POST", "/api/candidates", payload))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    body_json(resp).await
}

#[tokio::test]
async fn empty_patch_still_stamps_last_updated() {
    let app = app(test_state());
    let job_id = create_job(&app).await;
    let candidate = create_candidate(
        &app,
        &job_id,
        json!({ "applied_date": "2026-01-05" }),
    )
    .await;
    let id = candidate["id"].as_str().unwrap();

    let resp = app
        .clone()
        .oneshot(json_request(
            "PATCH",
            &format!("/api/candidates/{}", id),
            json!({}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let today = Utc::now().date_naive().to_string();
    assert_eq!(body["last_updated"].as_str().unwrap(), today);
    assert_eq!(body["status"], "pending");
}

#[tokio::test]
async fn illegal_transition_is_rejected_and_status_unchanged() {
    let app = app(test_state());
    let job_id = create_job(&app).await;
    let candidate = create_candidate(&app, &job_id, json!({})).await;
    let id = candidate["id"].as_str().unwrap();

    let resp = app
        .clone()
        .oneshot(json_request(
            "PATCH",
            &format!("/api/candidates/{}", id),
            json!({ "status": "hired" }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/api/candidates/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = body_json(resp).await;
    assert_eq!(body["status"], "pending");
}

#[tokio::test]
async fn pipeline_walk_pending_to_rejected() {
    let app = app(test_state());
    let job_id = create_job(&app).await;
    let candidate = create_candidate(&app, &job_id, json!({})).await;
    let id = candidate["id"].as_str().unwrap().to_string();

    for (next, expected) in [
        ("screened", StatusCode::OK),
        ("email_sent", StatusCode::OK),
        ("rejected", StatusCode::OK),
        // terminal: nothing moves out of rejected
        ("screened", StatusCode::UNPROCESSABLE_ENTITY),
    ] {
        let resp = app
            .clone()
            .oneshot(json_request(
                "PATCH",
                &format!("/api/candidates/{}", id),
                json!({ "status": next }),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), expected, "transition to {}", next);
    }
}

#[tokio::test]
async fn create_requires_existing_job() {
    let app = app(test_state());

    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/candidates",
            json!({
                "job_id": Uuid::new_v4(),
                "name": "Ghost",
                "email": "ghost@example.com"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_rejects_out_of_range_score_and_bad_email() {
    let app = app(test_state());
    let job_id = create_job(&app).await;

    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/candidates",
            json!({ "job_id": job_id, "name": "A", "email": "not-an-email" }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/candidates",
            json!({
                "job_id": job_id,
                "name": "A",
                "email": "a@example.com",
                "resume_score": 150
            }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn patch_and_delete_on_missing_candidate_are_not_found() {
    let app = app(test_state());
    let missing = Uuid::new_v4();

    let resp = app
        .clone()
        .oneshot(json_request(
            "PATCH",
            &format!("/api/candidates/{}", missing),
            json!({ "name": "Nobody" }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/candidates/{}", missing))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_filters_by_job() {
    let app = app(test_state());
    let job_a = create_job(&app).await;
    let job_b = create_job(&app).await;
    create_candidate(&app, &job_a, json!({ "email": "a@example.com" })).await;
    create_candidate(&app, &job_b, json!({ "email": "b@example.com" })).await;

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/api/candidates?job_id={}", job_a))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = body_json(resp).await;
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["job_id"].as_str().unwrap(), job_a);
}
