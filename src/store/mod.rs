pub mod memory;
pub mod postgres;
pub mod seed;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::models::candidate::Candidate;
use crate::models::email_template::EmailTemplate;
use crate::models::interview::Interview;
use crate::models::job::Job;
use crate::models::user::User;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Persistence boundary. Plain CRUD per entity; invariants (applicant
/// counters, `last_updated` stamping, status transitions, username
/// uniqueness) live in the service layer so both backends behave
/// identically.
///
/// `save_*` overwrites the full record; partial-merge semantics are
/// resolved by the caller before saving.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Store: Send + Sync {
    async fn list_jobs(&self) -> Result<Vec<Job>>;
    async fn get_job(&self, id: Uuid) -> Result<Option<Job>>;
    async fn insert_job(&self, job: Job) -> Result<Job>;
    async fn save_job(&self, job: Job) -> Result<Job>;
    async fn delete_job(&self, id: Uuid) -> Result<bool>;
    /// Applies `delta` to the job's applicant counter, clamped at zero.
    async fn adjust_job_applicants(&self, id: Uuid, delta: i32) -> Result<()>;

    async fn list_candidates(&self) -> Result<Vec<Candidate>>;
    async fn candidates_for_job(&self, job_id: Uuid) -> Result<Vec<Candidate>>;
    async fn get_candidate(&self, id: Uuid) -> Result<Option<Candidate>>;
    async fn insert_candidate(&self, candidate: Candidate) -> Result<Candidate>;
    async fn save_candidate(&self, candidate: Candidate) -> Result<Candidate>;
    /// Returns the removed record so the caller can settle the job counter.
    async fn delete_candidate(&self, id: Uuid) -> Result<Option<Candidate>>;

    async fn list_interviews(&self) -> Result<Vec<Interview>>;
    async fn get_interview(&self, id: Uuid) -> Result<Option<Interview>>;
    async fn insert_interview(&self, interview: Interview) -> Result<Interview>;

    async fn list_templates(&self) -> Result<Vec<EmailTemplate>>;
    async fn get_template(&self, id: Uuid) -> Result<Option<EmailTemplate>>;
    async fn insert_template(&self, template: EmailTemplate) -> Result<EmailTemplate>;
    async fn save_template(&self, template: EmailTemplate) -> Result<EmailTemplate>;
    async fn delete_template(&self, id: Uuid) -> Result<bool>;

    async fn list_users(&self) -> Result<Vec<User>>;
    async fn user_by_username(&self, username: &str) -> Result<Option<User>>;
    async fn insert_user(&self, user: User) -> Result<User>;
}
