use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::candidate::{Candidate, CandidateStatus, Recommendation};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCandidatePayload {
    pub job_id: Uuid,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub phone: Option<String>,
    #[validate(range(min = 0, max = 100))]
    pub resume_score: Option<i32>,
    pub rationale: Option<String>,
    pub recommendation: Option<Recommendation>,
    pub status: Option<CandidateStatus>,
    pub applied_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateCandidatePayload {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub phone: Option<String>,
    #[validate(range(min = 0, max = 100))]
    pub resume_score: Option<i32>,
    pub rationale: Option<String>,
    pub recommendation: Option<Recommendation>,
    pub status: Option<CandidateStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CandidateListQuery {
    pub job_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateResponse {
    pub id: Uuid,
    pub job_id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub resume_score: Option<i32>,
    pub rationale: Option<String>,
    pub recommendation: Option<Recommendation>,
    pub status: CandidateStatus,
    pub applied_date: NaiveDate,
    pub last_updated: NaiveDate,
}

impl From<Candidate> for CandidateResponse {
    fn from(value: Candidate) -> Self {
        Self {
            id: value.id,
            job_id: value.job_id,
            name: value.name,
            email: value.email,
            phone: value.phone,
            resume_score: value.resume_score,
            rationale: value.rationale,
            recommendation: value.recommendation,
            status: value.status,
            applied_date: value.applied_date,
            last_updated: value.last_updated,
        }
    }
}
