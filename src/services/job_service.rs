use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::dto::job_dto::{CreateJobPayload, UpdateJobPayload};
use crate::error::{Error, Result};
use crate::models::job::{Job, JobStatus};
use crate::store::Store;

#[derive(Clone)]
pub struct JobService {
    store: Arc<dyn Store>,
}

impl JobService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// `applicants_count` starts at zero no matter what the caller sends;
    /// the counter is derived and only the candidate lifecycle moves it.
    pub async fn create(&self, payload: CreateJobPayload) -> Result<Job> {
        let job = Job {
            id: Uuid::new_v4(),
            title: payload.title,
            department: payload.department,
            description: payload.description,
            requirements: payload.requirements,
            location: payload.location,
            job_type: payload.job_type,
            status: payload.status.unwrap_or(JobStatus::Active),
            applicants_count: 0,
            created_at: Utc::now(),
        };
        self.store.insert_job(job).await
    }

    pub async fn list(&self) -> Result<Vec<Job>> {
        self.store.list_jobs().await
    }

    pub async fn get(&self, id: Uuid) -> Result<Job> {
        self.store
            .get_job(id)
            .await?
            .ok_or_else(|| Error::NotFound("Job not found".into()))
    }

    pub async fn update(&self, id: Uuid, payload: UpdateJobPayload) -> Result<Job> {
        let mut job = self.get(id).await?;

        if let Some(title) = payload.title {
            job.title = title;
        }
        if let Some(department) = payload.department {
            job.department = department;
        }
        if let Some(description) = payload.description {
            job.description = description;
        }
        if let Some(requirements) = payload.requirements {
            job.requirements = requirements;
        }
        if let Some(location) = payload.location {
            job.location = location;
        }
        if let Some(job_type) = payload.job_type {
            job.job_type = job_type;
        }
        if let Some(status) = payload.status {
            job.status = status;
        }

        self.store.save_job(job).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        if !self.store.delete_job(id).await? {
            return Err(Error::NotFound("Job not found".into()));
        }
        Ok(())
    }
}
