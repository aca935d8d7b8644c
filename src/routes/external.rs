use axum::{
    extract::State,
    response::{IntoResponse, Json},
};

use crate::{
    dto::candidate_dto::CandidateResponse, dto::job_dto::JobResponse, error::Result, AppState,
};

/// Jobs from the hosted data backend, already mapped to the canonical
/// shape at the adapter boundary.
#[utoipa::path(
    get,
    path = "/api/external/jobs",
    responses(
        (status = 200, description = "Jobs from the external backend", body = Json<Vec<JobResponse>>),
        (status = 502, description = "External backend not configured or unreachable")
    )
)]
#[axum::debug_handler]
pub async fn list_external_jobs(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let jobs = state.external_service.fetch_jobs().await?;
    let items: Vec<JobResponse> = jobs.into_iter().map(Into::into).collect();
    Ok(Json(items))
}

#[utoipa::path(
    get,
    path = "/api/external/candidates",
    responses(
        (status = 200, description = "Candidates from the external backend", body = Json<Vec<CandidateResponse>>),
        (status = 502, description = "External backend not configured or unreachable")
    )
)]
#[axum::debug_handler]
pub async fn list_external_candidates(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let candidates = state.external_service.fetch_candidates().await?;
    let items: Vec<CandidateResponse> = candidates.into_iter().map(Into::into).collect();
    Ok(Json(items))
}
