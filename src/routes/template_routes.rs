use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::template_dto::{CreateTemplatePayload, TemplateResponse, UpdateTemplatePayload},
    dto::workflow_dto::SendEmailsPayload,
    error::Result,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/email-templates",
    responses(
        (status = 200, description = "List of email templates", body = Json<Vec<TemplateResponse>>)
    )
)]
#[axum::debug_handler]
pub async fn list_templates(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let templates = state.template_service.list().await?;
    let items: Vec<TemplateResponse> = templates.into_iter().map(Into::into).collect();
    Ok(Json(items))
}

#[utoipa::path(
    get,
    path = "/api/email-templates/{id}",
    params(
        ("id" = Uuid, Path, description = "Template ID")
    ),
    responses(
        (status = 200, description = "Template found", body = Json<TemplateResponse>),
        (status = 404, description = "Template not found")
    )
)]
#[axum::debug_handler]
pub async fn get_template(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let template = state.template_service.get(id).await?;
    Ok(Json(TemplateResponse::from(template)))
}

#[utoipa::path(
    post,
    path = "/api/email-templates",
    request_body = CreateTemplatePayload,
    responses(
        (status = 201, description = "Template created successfully", body = Json<TemplateResponse>),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn create_template(
    State(state): State<AppState>,
    Json(payload): Json<CreateTemplatePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let template = state.template_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(TemplateResponse::from(template))))
}

#[utoipa::path(
    patch,
    path = "/api/email-templates/{id}",
    params(
        ("id" = Uuid, Path, description = "Template ID")
    ),
    request_body = UpdateTemplatePayload,
    responses(
        (status = 200, description = "Template updated successfully", body = Json<TemplateResponse>),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Template not found")
    )
)]
#[axum::debug_handler]
pub async fn update_template(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateTemplatePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let template = state.template_service.update(id, payload).await?;
    Ok(Json(TemplateResponse::from(template)))
}

#[utoipa::path(
    delete,
    path = "/api/email-templates/{id}",
    params(
        ("id" = Uuid, Path, description = "Template ID")
    ),
    responses(
        (status = 204, description = "Template deleted successfully"),
        (status = 404, description = "Template not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_template(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    state.template_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/emails/send",
    request_body = SendEmailsPayload,
    responses(
        (status = 200, description = "Per-candidate send outcome"),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Template not found")
    )
)]
#[axum::debug_handler]
pub async fn send_emails(
    State(state): State<AppState>,
    Json(payload): Json<SendEmailsPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let outcome = state.template_service.send_bulk(payload).await?;
    Ok(Json(outcome))
}
