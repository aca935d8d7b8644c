use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::interview_dto::InterviewResponse,
    dto::workflow_dto::SchedulePayload,
    error::Result,
    models::interview::InterviewType,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/interviews",
    responses(
        (status = 200, description = "List of interviews", body = Json<Vec<InterviewResponse>>)
    )
)]
#[axum::debug_handler]
pub async fn list_interviews(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let interviews = state.interview_service.list().await?;
    let items: Vec<InterviewResponse> = interviews.into_iter().map(Into::into).collect();
    Ok(Json(items))
}

#[utoipa::path(
    get,
    path = "/api/interviews/{id}",
    params(
        ("id" = Uuid, Path, description = "Interview ID")
    ),
    responses(
        (status = 200, description = "Interview found", body = Json<InterviewResponse>),
        (status = 404, description = "Interview not found")
    )
)]
#[axum::debug_handler]
pub async fn get_interview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let interview = state.interview_service.get(id).await?;
    Ok(Json(InterviewResponse::from(interview)))
}

#[utoipa::path(
    post,
    path = "/api/interviews/schedule",
    request_body = SchedulePayload,
    responses(
        (status = 200, description = "Per-candidate scheduling outcome"),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn schedule_interviews(
    State(state): State<AppState>,
    Json(payload): Json<SchedulePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let outcome = state
        .interview_service
        .schedule_batch(InterviewType::Interview, payload)
        .await?;
    Ok(Json(outcome))
}

#[utoipa::path(
    post,
    path = "/api/prescreen/schedule",
    request_body = SchedulePayload,
    responses(
        (status = 200, description = "Per-candidate scheduling outcome"),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn schedule_prescreens(
    State(state): State<AppState>,
    Json(payload): Json<SchedulePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let outcome = state
        .interview_service
        .schedule_batch(InterviewType::Prescreen, payload)
        .await?;
    Ok(Json(outcome))
}
