use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::postgres::PgPoolOptions;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::Store;
use crate::error::{Error, Result};
use crate::models::candidate::Candidate;
use crate::models::email_template::EmailTemplate;
use crate::models::interview::Interview;
use crate::models::job::Job;
use crate::models::user::User;

pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(50)
        .acquire_timeout(std::time::Duration::from_secs(30))
        .connect(database_url)
        .await?;
    Ok(pool)
}

/// Postgres-backed store. Enum-valued columns are plain TEXT; rows go
/// through the row structs below and the enums' `FromStr` on the way out,
/// so a hand-edited row with an unknown status surfaces as an internal
/// error instead of a panic.
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct JobRow {
    id: Uuid,
    title: String,
    department: String,
    description: String,
    requirements: String,
    location: String,
    job_type: String,
    status: String,
    applicants_count: i32,
    created_at: DateTime<Utc>,
}

impl TryFrom<JobRow> for Job {
    type Error = Error;

    fn try_from(row: JobRow) -> Result<Self> {
        Ok(Job {
            id: row.id,
            title: row.title,
            department: row.department,
            description: row.description,
            requirements: row.requirements,
            location: row.location,
            job_type: row.job_type.parse().map_err(Error::Internal)?,
            status: row.status.parse().map_err(Error::Internal)?,
            applicants_count: row.applicants_count,
            created_at: row.created_at,
        })
    }
}

#[derive(FromRow)]
struct CandidateRow {
    id: Uuid,
    job_id: Uuid,
    name: String,
    email: String,
    phone: Option<String>,
    resume_score: Option<i32>,
    rationale: Option<String>,
    recommendation: Option<String>,
    status: String,
    applied_date: NaiveDate,
    last_updated: NaiveDate,
}

impl TryFrom<CandidateRow> for Candidate {
    type Error = Error;

    fn try_from(row: CandidateRow) -> Result<Self> {
        Ok(Candidate {
            id: row.id,
            job_id: row.job_id,
            name: row.name,
            email: row.email,
            phone: row.phone,
            resume_score: row.resume_score,
            rationale: row.rationale,
            recommendation: row
                .recommendation
                .map(|r| r.parse().map_err(Error::Internal))
                .transpose()?,
            status: row.status.parse().map_err(Error::Internal)?,
            applied_date: row.applied_date,
            last_updated: row.last_updated,
        })
    }
}

#[derive(FromRow)]
struct InterviewRow {
    id: Uuid,
    candidate_id: Uuid,
    job_id: Uuid,
    interview_type: String,
    scheduled_date: NaiveDate,
    scheduled_time: String,
    message: Option<String>,
    channels: String,
    status: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<InterviewRow> for Interview {
    type Error = Error;

    fn try_from(row: InterviewRow) -> Result<Self> {
        Ok(Interview {
            id: row.id,
            candidate_id: row.candidate_id,
            job_id: row.job_id,
            interview_type: row.interview_type.parse().map_err(Error::Internal)?,
            scheduled_date: row.scheduled_date,
            scheduled_time: row.scheduled_time,
            message: row.message,
            channels: row
                .channels
                .split(',')
                .filter(|c| !c.is_empty())
                .map(str::to_string)
                .collect(),
            status: row.status.parse().map_err(Error::Internal)?,
            created_at: row.created_at,
        })
    }
}

#[derive(FromRow)]
struct TemplateRow {
    id: Uuid,
    name: String,
    subject: String,
    body: String,
    template_type: String,
}

impl From<TemplateRow> for EmailTemplate {
    fn from(row: TemplateRow) -> Self {
        EmailTemplate {
            id: row.id,
            name: row.name,
            subject: row.subject,
            body: row.body,
            template_type: row.template_type,
        }
    }
}

#[derive(FromRow)]
struct UserRow {
    id: Uuid,
    username: String,
    password: String,
    company_name: Option<String>,
    role: String,
    email: Option<String>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            username: row.username,
            password: row.password,
            company_name: row.company_name,
            role: row.role,
            email: row.email,
        }
    }
}

const JOB_COLUMNS: &str =
    "id, title, department, description, requirements, location, job_type, status, applicants_count, created_at";
const CANDIDATE_COLUMNS: &str =
    "id, job_id, name, email, phone, resume_score, rationale, recommendation, status, applied_date, last_updated";
const INTERVIEW_COLUMNS: &str =
    "id, candidate_id, job_id, interview_type, scheduled_date, scheduled_time, message, channels, status, created_at";

#[async_trait]
impl Store for PgStore {
    async fn list_jobs(&self) -> Result<Vec<Job>> {
        let rows = sqlx::query_as::<_, JobRow>(&format!(
            "SELECT {} FROM jobs ORDER BY created_at DESC",
            JOB_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(Job::try_from).collect()
    }

    async fn get_job(&self, id: Uuid) -> Result<Option<Job>> {
        let row = sqlx::query_as::<_, JobRow>(&format!(
            "SELECT {} FROM jobs WHERE id = $1",
            JOB_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(Job::try_from).transpose()
    }

    async fn insert_job(&self, job: Job) -> Result<Job> {
        sqlx::query(
            "INSERT INTO jobs (id, title, department, description, requirements, location, job_type, status, applicants_count, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)",
        )
        .bind(job.id)
        .bind(&job.title)
        .bind(&job.department)
        .bind(&job.description)
        .bind(&job.requirements)
        .bind(&job.location)
        .bind(job.job_type.as_str())
        .bind(job.status.as_str())
        .bind(job.applicants_count)
        .bind(job.created_at)
        .execute(&self.pool)
        .await?;
        Ok(job)
    }

    async fn save_job(&self, job: Job) -> Result<Job> {
        sqlx::query(
            "UPDATE jobs SET title = $2, department = $3, description = $4, requirements = $5,
             location = $6, job_type = $7, status = $8, applicants_count = $9 WHERE id = $1",
        )
        .bind(job.id)
        .bind(&job.title)
        .bind(&job.department)
        .bind(&job.description)
        .bind(&job.requirements)
        .bind(&job.location)
        .bind(job.job_type.as_str())
        .bind(job.status.as_str())
        .bind(job.applicants_count)
        .execute(&self.pool)
        .await?;
        Ok(job)
    }

    async fn delete_job(&self, id: Uuid) -> Result<bool> {
        let res = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }

    async fn adjust_job_applicants(&self, id: Uuid, delta: i32) -> Result<()> {
        sqlx::query(
            "UPDATE jobs SET applicants_count = GREATEST(0, applicants_count + $2) WHERE id = $1",
        )
        .bind(id)
        .bind(delta)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn list_candidates(&self) -> Result<Vec<Candidate>> {
        let rows = sqlx::query_as::<_, CandidateRow>(&format!(
            "SELECT {} FROM candidates ORDER BY applied_date DESC",
            CANDIDATE_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(Candidate::try_from).collect()
    }

    async fn candidates_for_job(&self, job_id: Uuid) -> Result<Vec<Candidate>> {
        let rows = sqlx::query_as::<_, CandidateRow>(&format!(
            "SELECT {} FROM candidates WHERE job_id = $1 ORDER BY applied_date DESC",
            CANDIDATE_COLUMNS
        ))
        .bind(job_id)
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(Candidate::try_from).collect()
    }

    async fn get_candidate(&self, id: Uuid) -> Result<Option<Candidate>> {
        let row = sqlx::query_as::<_, CandidateRow>(&format!(
            "SELECT {} FROM candidates WHERE id = $1",
            CANDIDATE_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(Candidate::try_from).transpose()
    }

    async fn insert_candidate(&self, candidate: Candidate) -> Result<Candidate> {
        sqlx::query(
            "INSERT INTO candidates (id, job_id, name, email, phone, resume_score, rationale, recommendation, status, applied_date, last_updated)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)",
        )
        .bind(candidate.id)
        .bind(candidate.job_id)
        .bind(&candidate.name)
        .bind(&candidate.email)
        .bind(&candidate.phone)
        .bind(candidate.resume_score)
        .bind(&candidate.rationale)
        .bind(candidate.recommendation.map(|r| r.as_str()))
        .bind(candidate.status.as_str())
        .bind(candidate.applied_date)
        .bind(candidate.last_updated)
        .execute(&self.pool)
        .await?;
        Ok(candidate)
    }

    async fn save_candidate(&self, candidate: Candidate) -> Result<Candidate> {
        sqlx::query(
            "UPDATE candidates SET job_id = $2, name = $3, email = $4, phone = $5, resume_score = $6,
             rationale = $7, recommendation = $8, status = $9, applied_date = $10, last_updated = $11
             WHERE id = $1",
        )
        .bind(candidate.id)
        .bind(candidate.job_id)
        .bind(&candidate.name)
        .bind(&candidate.email)
        .bind(&candidate.phone)
        .bind(candidate.resume_score)
        .bind(&candidate.rationale)
        .bind(candidate.recommendation.map(|r| r.as_str()))
        .bind(candidate.status.as_str())
        .bind(candidate.applied_date)
        .bind(candidate.last_updated)
        .execute(&self.pool)
        .await?;
        Ok(candidate)
    }

    async fn delete_candidate(&self, id: Uuid) -> Result<Option<Candidate>> {
        let row = sqlx::query_as::<_, CandidateRow>(&format!(
            "DELETE FROM candidates WHERE id = $1 RETURNING {}",
            CANDIDATE_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(Candidate::try_from).transpose()
    }

    async fn list_interviews(&self) -> Result<Vec<Interview>> {
        let rows = sqlx::query_as::<_, InterviewRow>(&format!(
            "SELECT {} FROM interviews ORDER BY created_at DESC",
            INTERVIEW_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(Interview::try_from).collect()
    }

    async fn get_interview(&self, id: Uuid) -> Result<Option<Interview>> {
        let row = sqlx::query_as::<_, InterviewRow>(&format!(
            "SELECT {} FROM interviews WHERE id = $1",
            INTERVIEW_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(Interview::try_from).transpose()
    }

    async fn insert_interview(&self, interview: Interview) -> Result<Interview> {
        sqlx::query(
            "INSERT INTO interviews (id, candidate_id, job_id, interview_type, scheduled_date, scheduled_time, message, channels, status, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)",
        )
        .bind(interview.id)
        .bind(interview.candidate_id)
        .bind(interview.job_id)
        .bind(interview.interview_type.as_str())
        .bind(interview.scheduled_date)
        .bind(&interview.scheduled_time)
        .bind(&interview.message)
        .bind(interview.channels_display())
        .bind(interview.status.as_str())
        .bind(interview.created_at)
        .execute(&self.pool)
        .await?;
        Ok(interview)
    }

    async fn list_templates(&self) -> Result<Vec<EmailTemplate>> {
        let rows = sqlx::query_as::<_, TemplateRow>(
            "SELECT id, name, subject, body, template_type FROM email_templates ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(EmailTemplate::from).collect())
    }

    async fn get_template(&self, id: Uuid) -> Result<Option<EmailTemplate>> {
        let row = sqlx::query_as::<_, TemplateRow>(
            "SELECT id, name, subject, body, template_type FROM email_templates WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(EmailTemplate::from))
    }

    async fn insert_template(&self, template: EmailTemplate) -> Result<EmailTemplate> {
        sqlx::query(
            "INSERT INTO email_templates (id, name, subject, body, template_type)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(template.id)
        .bind(&template.name)
        .bind(&template.subject)
        .bind(&template.body)
        .bind(&template.template_type)
        .execute(&self.pool)
        .await?;
        Ok(template)
    }

    async fn save_template(&self, template: EmailTemplate) -> Result<EmailTemplate> {
        sqlx::query(
            "UPDATE email_templates SET name = $2, subject = $3, body = $4, template_type = $5 WHERE id = $1",
        )
        .bind(template.id)
        .bind(&template.name)
        .bind(&template.subject)
        .bind(&template.body)
        .bind(&template.template_type)
        .execute(&self.pool)
        .await?;
        Ok(template)
    }

    async fn delete_template(&self, id: Uuid) -> Result<bool> {
        let res = sqlx::query("DELETE FROM email_templates WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(
            "SELECT id, username, password, company_name, role, email FROM users ORDER BY username",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn user_by_username(&self, username: &str) -> Result<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, username, password, company_name, role, email FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(User::from))
    }

    async fn insert_user(&self, user: User) -> Result<User> {
        sqlx::query(
            "INSERT INTO users (id, username, password, company_name, role, email)
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(user.id)
        .bind(&user.username)
        .bind(&user.password)
        .bind(&user.company_name)
        .bind(&user.role)
        .bind(&user.email)
        .execute(&self.pool)
        .await?;
        Ok(user)
    }
}
