use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::job::{Job, JobStatus, JobType};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateJobPayload {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub department: String,
    pub description: String,
    pub requirements: String,
    #[validate(length(min = 1))]
    pub location: String,
    pub job_type: JobType,
    pub status: Option<JobStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateJobPayload {
    #[validate(length(min = 1))]
    pub title: Option<String>,
    #[validate(length(min = 1))]
    pub department: Option<String>,
    pub description: Option<String>,
    pub requirements: Option<String>,
    #[validate(length(min = 1))]
    pub location: Option<String>,
    pub job_type: Option<JobType>,
    pub status: Option<JobStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobResponse {
    pub id: uuid::Uuid,
    pub title: String,
    pub department: String,
    pub description: String,
    pub requirements: String,
    pub location: String,
    pub job_type: JobType,
    pub status: JobStatus,
    pub applicants_count: i32,
    pub created_at: DateTime<Utc>,
}

impl From<Job> for JobResponse {
    fn from(value: Job) -> Self {
        Self {
            id: value.id,
            title: value.title,
            department: value.department,
            description: value.description,
            requirements: value.requirements,
            location: value.location,
            job_type: value.job_type,
            status: value.status,
            applicants_count: value.applicants_count,
            created_at: value.created_at,
        }
    }
}
