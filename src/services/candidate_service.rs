use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::dto::candidate_dto::{CreateCandidatePayload, UpdateCandidatePayload};
use crate::dto::workflow_dto::{BatchItem, BatchResponse};
use crate::error::{Error, Result};
use crate::models::candidate::{Candidate, CandidateStatus};
use crate::store::Store;

#[derive(Clone)]
pub struct CandidateService {
    store: Arc<dyn Store>,
}

impl CandidateService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    pub async fn list(&self, job_id: Option<Uuid>) -> Result<Vec<Candidate>> {
        match job_id {
            Some(job_id) => self.store.candidates_for_job(job_id).await,
            None => self.store.list_candidates().await,
        }
    }

    pub async fn get(&self, id: Uuid) -> Result<Candidate> {
        self.store
            .get_candidate(id)
            .await?
            .ok_or_else(|| Error::NotFound("Candidate not found".into()))
    }

    /// Requires the referenced job to exist, then settles its applicant
    /// counter.
    pub async fn create(&self, payload: CreateCandidatePayload) -> Result<Candidate> {
        if self.store.get_job(payload.job_id).await?.is_none() {
            return Err(Error::BadRequest(format!(
                "job {} does not exist",
                payload.job_id
            )));
        }

        let today = Utc::now().date_naive();
        let candidate = Candidate {
            id: Uuid::new_v4(),
            job_id: payload.job_id,
            name: payload.name,
            email: payload.email,
            phone: payload.phone,
            resume_score: payload.resume_score,
            rationale: payload.rationale,
            recommendation: payload.recommendation,
            status: payload.status.unwrap_or(CandidateStatus::Pending),
            applied_date: payload.applied_date.unwrap_or(today),
            last_updated: today,
        };

        let candidate = self.store.insert_candidate(candidate).await?;
        self.store
            .adjust_job_applicants(candidate.job_id, 1)
            .await?;
        Ok(candidate)
    }

    /// Partial merge; `last_updated` is stamped on every call, even when
    /// the payload changes nothing. A status change must be a legal
    /// pipeline transition.
    pub async fn update(&self, id: Uuid, payload: UpdateCandidatePayload) -> Result<Candidate> {
        let mut candidate = self.get(id).await?;

        if let Some(next) = payload.status {
            if !candidate.status.can_transition_to(next) {
                return Err(Error::Transition(format!(
                    "candidate {} cannot move from {} to {}",
                    id, candidate.status, next
                )));
            }
            candidate.status = next;
        }
        if let Some(name) = payload.name {
            candidate.name = name;
        }
        if let Some(email) = payload.email {
            candidate.email = email;
        }
        if let Some(phone) = payload.phone {
            candidate.phone = Some(phone);
        }
        if let Some(resume_score) = payload.resume_score {
            candidate.resume_score = Some(resume_score);
        }
        if let Some(rationale) = payload.rationale {
            candidate.rationale = Some(rationale);
        }
        if let Some(recommendation) = payload.recommendation {
            candidate.recommendation = Some(recommendation);
        }

        candidate.last_updated = Utc::now().date_naive();
        self.store.save_candidate(candidate).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let removed = self
            .store
            .delete_candidate(id)
            .await?
            .ok_or_else(|| Error::NotFound("Candidate not found".into()))?;
        self.store.adjust_job_applicants(removed.job_id, -1).await?;
        Ok(())
    }

    /// Moves a candidate along the pipeline, stamping `last_updated`.
    pub async fn transition(&self, id: Uuid, next: CandidateStatus) -> Result<Candidate> {
        let mut candidate = self.get(id).await?;
        if !candidate.status.can_transition_to(next) {
            return Err(Error::Transition(format!(
                "candidate {} cannot move from {} to {}",
                id, candidate.status, next
            )));
        }
        candidate.status = next;
        candidate.last_updated = Utc::now().date_naive();
        self.store.save_candidate(candidate).await
    }

    /// Flips every pending candidate of a job to `screened`. No scoring
    /// happens here; scores arrive from the external automation flow.
    /// Candidates that cannot legally move are reported per item.
    pub async fn screen_for_job(&self, job_id: Uuid) -> Result<BatchResponse> {
        if self.store.get_job(job_id).await?.is_none() {
            return Err(Error::NotFound("Job not found".into()));
        }

        let candidates = self.store.candidates_for_job(job_id).await?;
        let mut results = Vec::with_capacity(candidates.len());
        for mut candidate in candidates {
            if !candidate
                .status
                .can_transition_to(CandidateStatus::Screened)
            {
                results.push(BatchItem::failed(
                    candidate.id,
                    format!("cannot move from {} to screened", candidate.status),
                ));
                continue;
            }
            candidate.status = CandidateStatus::Screened;
            candidate.last_updated = Utc::now().date_naive();
            let id = candidate.id;
            self.store.save_candidate(candidate).await?;
            results.push(BatchItem::succeeded(id));
        }

        tracing::info!(
            job_id = %job_id,
            processed = results.len(),
            "Screening pass over job candidates finished"
        );
        Ok(BatchResponse::from_items(results))
    }
}
