use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use super::Store;
use crate::error::Result;
use crate::models::candidate::Candidate;
use crate::models::email_template::EmailTemplate;
use crate::models::interview::Interview;
use crate::models::job::Job;
use crate::models::user::User;

/// Map-backed store: five independent id-keyed maps behind one lock.
/// State is lost on restart; the process variant is seeded with demo
/// fixtures (see [`super::seed`]).
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Maps>,
}

#[derive(Default)]
struct Maps {
    jobs: HashMap<Uuid, Job>,
    candidates: HashMap<Uuid, Candidate>,
    interviews: HashMap<Uuid, Interview>,
    templates: HashMap<Uuid, EmailTemplate>,
    users: HashMap<Uuid, User>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn list_jobs(&self) -> Result<Vec<Job>> {
        let maps = self.inner.read().expect("store lock poisoned");
        let mut jobs: Vec<Job> = maps.jobs.values().cloned().collect();
        jobs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(jobs)
    }

    async fn get_job(&self, id: Uuid) -> Result<Option<Job>> {
        let maps = self.inner.read().expect("store lock poisoned");
        Ok(maps.jobs.get(&id).cloned())
    }

    async fn insert_job(&self, job: Job) -> Result<Job> {
        let mut maps = self.inner.write().expect("store lock poisoned");
        maps.jobs.insert(job.id, job.clone());
        Ok(job)
    }

    async fn save_job(&self, job: Job) -> Result<Job> {
        let mut maps = self.inner.write().expect("store lock poisoned");
        maps.jobs.insert(job.id, job.clone());
        Ok(job)
    }

    async fn delete_job(&self, id: Uuid) -> Result<bool> {
        let mut maps = self.inner.write().expect("store lock poisoned");
        Ok(maps.jobs.remove(&id).is_some())
    }

    async fn adjust_job_applicants(&self, id: Uuid, delta: i32) -> Result<()> {
        let mut maps = self.inner.write().expect("store lock poisoned");
        if let Some(job) = maps.jobs.get_mut(&id) {
            job.applicants_count = (job.applicants_count + delta).max(0);
        }
        Ok(())
    }

    async fn list_candidates(&self) -> Result<Vec<Candidate>> {
        let maps = self.inner.read().expect("store lock poisoned");
        let mut candidates: Vec<Candidate> = maps.candidates.values().cloned().collect();
        candidates.sort_by(|a, b| b.applied_date.cmp(&a.applied_date));
        Ok(candidates)
    }

    async fn candidates_for_job(&self, job_id: Uuid) -> Result<Vec<Candidate>> {
        let maps = self.inner.read().expect("store lock poisoned");
        let mut candidates: Vec<Candidate> = maps
            .candidates
            .values()
            .filter(|c| c.job_id == job_id)
            .cloned()
            .collect();
        candidates.sort_by(|a, b| b.applied_date.cmp(&a.applied_date));
        Ok(candidates)
    }

    async fn get_candidate(&self, id: Uuid) -> Result<Option<Candidate>> {
        let maps = self.inner.read().expect("store lock poisoned");
        Ok(maps.candidates.get(&id).cloned())
    }

    async fn insert_candidate(&self, candidate: Candidate) -> Result<Candidate> {
        let mut maps = self.inner.write().expect("store lock poisoned");
        maps.candidates.insert(candidate.id, candidate.clone());
        Ok(candidate)
    }

    async fn save_candidate(&self, candidate: Candidate) -> Result<Candidate> {
        let mut maps = self.inner.write().expect("store lock poisoned");
        maps.candidates.insert(candidate.id, candidate.clone());
        Ok(candidate)
    }

    async fn delete_candidate(&self, id: Uuid) -> Result<Option<Candidate>> {
        let mut maps = self.inner.write().expect("store lock poisoned");
        Ok(maps.candidates.remove(&id))
    }

    async fn list_interviews(&self) -> Result<Vec<Interview>> {
        let maps = self.inner.read().expect("store lock poisoned");
        let mut interviews: Vec<Interview> = maps.interviews.values().cloned().collect();
        interviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(interviews)
    }

    async fn get_interview(&self, id: Uuid) -> Result<Option<Interview>> {
        let maps = self.inner.read().expect("store lock poisoned");
        Ok(maps.interviews.get(&id).cloned())
    }

    async fn insert_interview(&self, interview: Interview) -> Result<Interview> {
        let mut maps = self.inner.write().expect("store lock poisoned");
        maps.interviews.insert(interview.id, interview.clone());
        Ok(interview)
    }

    async fn list_templates(&self) -> Result<Vec<EmailTemplate>> {
        let maps = self.inner.read().expect("store lock poisoned");
        let mut templates: Vec<EmailTemplate> = maps.templates.values().cloned().collect();
        templates.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(templates)
    }

    async fn get_template(&self, id: Uuid) -> Result<Option<EmailTemplate>> {
        let maps = self.inner.read().expect("store lock poisoned");
        Ok(maps.templates.get(&id).cloned())
    }

    async fn insert_template(&self, template: EmailTemplate) -> Result<EmailTemplate> {
        let mut maps = self.inner.write().expect("store lock poisoned");
        maps.templates.insert(template.id, template.clone());
        Ok(template)
    }

    async fn save_template(&self, template: EmailTemplate) -> Result<EmailTemplate> {
        let mut maps = self.inner.write().expect("store lock poisoned");
        maps.templates.insert(template.id, template.clone());
        Ok(template)
    }

    async fn delete_template(&self, id: Uuid) -> Result<bool> {
        let mut maps = self.inner.write().expect("store lock poisoned");
        Ok(maps.templates.remove(&id).is_some())
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        let maps = self.inner.read().expect("store lock poisoned");
        let mut users: Vec<User> = maps.users.values().cloned().collect();
        users.sort_by(|a, b| a.username.cmp(&b.username));
        Ok(users)
    }

    async fn user_by_username(&self, username: &str) -> Result<Option<User>> {
        let maps = self.inner.read().expect("store lock poisoned");
        Ok(maps
            .users
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn insert_user(&self, user: User) -> Result<User> {
        let mut maps = self.inner.write().expect("store lock poisoned");
        maps.users.insert(user.id, user.clone());
        Ok(user)
    }
}
