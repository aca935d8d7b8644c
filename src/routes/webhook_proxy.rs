use axum::{
    extract::{Multipart, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use crate::{
    error::{Error, Result},
    services::automation_service::{ApplicationSubmission, ResumeFile},
    AppState,
};

/// CORS bridge: re-posts the application form (candidate fields plus the
/// résumé file) to the automation webhook and relays the upstream answer
/// verbatim. Required fields are checked before anything leaves the
/// process.
#[axum::debug_handler]
pub async fn submit_application(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response> {
    let mut fields: Vec<(String, String)> = Vec::new();
    let mut resume: Option<ResumeFile> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        tracing::error!("Failed to read multipart field: {}", e);
        Error::BadRequest(e.to_string())
    })? {
        let name = field.name().unwrap_or_default().to_string();

        if name == "resume" {
            let filename = field.file_name().unwrap_or("resume.bin").to_string();
            let content_type = field
                .content_type()
                .unwrap_or("application/octet-stream")
                .to_string();
            let data = field.bytes().await.map_err(|e| {
                tracing::error!("Failed to read resume bytes: {}", e);
                Error::BadRequest("Failed to read file upload".into())
            })?;
            if !data.is_empty() {
                resume = Some(ResumeFile {
                    filename,
                    content_type,
                    data,
                });
            }
        } else {
            fields.push((name, field.text().await.unwrap_or_default()));
        }
    }

    let value_of = |key: &str| {
        fields
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.trim())
            .unwrap_or("")
    };
    if value_of("candidate_name").is_empty() {
        return Err(Error::BadRequest("candidate_name is required".into()));
    }
    if value_of("email").is_empty() {
        return Err(Error::BadRequest("email is required".into()));
    }
    let resume = resume.ok_or_else(|| Error::BadRequest("Resume file is required".into()))?;

    tracing::info!(
        candidate = value_of("candidate_name"),
        job_id = value_of("job_id"),
        resume = %resume.filename,
        "Forwarding application to automation webhook"
    );

    let reply = state
        .automation_service
        .forward_application(ApplicationSubmission { fields, resume })
        .await?;

    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::BAD_GATEWAY);
    let mut response = (status, reply.body).into_response();
    if let Some(content_type) = reply.content_type {
        if let Ok(value) = HeaderValue::from_str(&content_type) {
            response.headers_mut().insert(header::CONTENT_TYPE, value);
        }
    }
    Ok(response)
}

#[axum::debug_handler]
pub async fn test_proxy(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "upstream_configured": state.automation_service.is_enabled(),
    }))
}
