use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::candidate::{Candidate, CandidateStatus};
use crate::models::job::{Job, JobStatus, JobType};

/// Row shape of the hosted data backend's `jobs` table. Field names and
/// id/timestamp conventions are the backend's own (`ai_score`, numeric
/// ids, `applied_at`); nothing outside this module sees them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalJobRow {
    pub id: i64,
    pub title: String,
    pub department: Option<String>,
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub location: Option<String>,
    pub employment_type: Option<String>,
    pub status: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalCandidateRow {
    pub id: i64,
    pub job_id: Option<i64>,
    pub full_name: String,
    pub email: String,
    pub whatsapp_number: Option<String>,
    pub ai_score: Option<i32>,
    pub ai_reasoning: Option<String>,
    pub ai_recommendation: Option<String>,
    pub status: Option<String>,
    pub applied_at: Option<DateTime<Utc>>,
}

/// External numeric ids are mapped onto stable v5 UUIDs so the same row
/// always lands on the same canonical id.
pub fn external_job_id(id: i64) -> Uuid {
    Uuid::new_v5(
        &Uuid::NAMESPACE_OID,
        format!("hireflow-job-{}", id).as_bytes(),
    )
}

pub fn external_candidate_id(id: i64) -> Uuid {
    Uuid::new_v5(
        &Uuid::NAMESPACE_OID,
        format!("hireflow-candidate-{}", id).as_bytes(),
    )
}

impl From<ExternalJobRow> for Job {
    fn from(row: ExternalJobRow) -> Self {
        Job {
            id: external_job_id(row.id),
            title: row.title,
            department: row.department.unwrap_or_default(),
            description: row.description.unwrap_or_default(),
            requirements: row.requirements.unwrap_or_default(),
            location: row.location.unwrap_or_default(),
            job_type: row
                .employment_type
                .as_deref()
                .and_then(|t| t.parse().ok())
                .unwrap_or(JobType::FullTime),
            status: row
                .status
                .as_deref()
                .and_then(|s| s.parse().ok())
                .unwrap_or(JobStatus::Active),
            applicants_count: 0,
            created_at: row.created_at.unwrap_or_else(Utc::now),
        }
    }
}

impl From<ExternalCandidateRow> for Candidate {
    fn from(row: ExternalCandidateRow) -> Self {
        let applied = row
            .applied_at
            .map(|at| at.date_naive())
            .unwrap_or_else(|| Utc::now().date_naive());
        Candidate {
            id: external_candidate_id(row.id),
            job_id: row.job_id.map(external_job_id).unwrap_or_else(Uuid::nil),
            name: row.full_name,
            email: row.email,
            phone: row.whatsapp_number,
            resume_score: row.ai_score,
            rationale: row.ai_reasoning,
            recommendation: row
                .ai_recommendation
                .as_deref()
                .and_then(|r| r.parse().ok()),
            status: row
                .status
                .as_deref()
                .and_then(|s| s.parse().ok())
                .unwrap_or(CandidateStatus::Pending),
            applied_date: applied,
            last_updated: applied,
        }
    }
}

/// Read-only client over the hosted backend's REST interface. The rows
/// never leak: everything is converted to the canonical models at this
/// boundary.
#[derive(Clone)]
pub struct ExternalService {
    client: Client,
    base_url: Option<String>,
    api_key: Option<String>,
}

impl ExternalService {
    pub fn new(base_url: Option<String>, api_key: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client for external backend");

        let base_url = base_url.filter(|url| !url.trim().is_empty());
        if let Some(ref url) = base_url {
            info!("External backend enabled: {}", url);
        } else {
            info!("External backend disabled (EXTERNAL_API_URL not set)");
        }

        Self {
            client,
            base_url,
            api_key,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.base_url.is_some()
    }

    fn base_url(&self) -> Result<&str> {
        self.base_url
            .as_deref()
            .ok_or_else(|| Error::Upstream("external backend is not configured".into()))
    }

    async fn fetch_rows<T: serde::de::DeserializeOwned>(&self, table: &str) -> Result<Vec<T>> {
        let url = format!(
            "{}/rest/v1/{}?select=*",
            self.base_url()?.trim_end_matches('/'),
            table
        );
        let mut request = self.client.get(&url);
        if let Some(key) = &self.api_key {
            request = request
                .header("apikey", key)
                .header(reqwest::header::AUTHORIZATION, format!("Bearer {}", key));
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(Error::Upstream(format!(
                "external backend returned {} for {}",
                response.status(),
                table
            )));
        }
        Ok(response.json::<Vec<T>>().await?)
    }

    pub async fn fetch_jobs(&self) -> Result<Vec<Job>> {
        let rows: Vec<ExternalJobRow> = self.fetch_rows("jobs").await?;
        Ok(rows.into_iter().map(Job::from).collect())
    }

    pub async fn fetch_candidates(&self) -> Result<Vec<Candidate>> {
        let rows: Vec<ExternalCandidateRow> = self.fetch_rows("candidates").await?;
        Ok(rows.into_iter().map(Candidate::from).collect())
    }
}
