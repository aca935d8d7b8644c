use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::dto::workflow_dto::{BatchItem, BatchResponse, SchedulePayload};
use crate::error::{Error, Result};
use crate::models::candidate::CandidateStatus;
use crate::models::interview::{Interview, InterviewStatus, InterviewType};
use crate::store::Store;

#[derive(Clone)]
pub struct InterviewService {
    store: Arc<dyn Store>,
}

impl InterviewService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<Interview>> {
        self.store.list_interviews().await
    }

    pub async fn get(&self, id: Uuid) -> Result<Interview> {
        self.store
            .get_interview(id)
            .await?
            .ok_or_else(|| Error::NotFound("Interview not found".into()))
    }

    /// Schedules one interview per candidate id. An unknown id or an
    /// illegal pipeline transition fails that item only; no interview
    /// record is written for a failed item.
    pub async fn schedule_batch(
        &self,
        interview_type: InterviewType,
        payload: SchedulePayload,
    ) -> Result<BatchResponse> {
        let target = match interview_type {
            InterviewType::Interview => CandidateStatus::InterviewScheduled,
            InterviewType::Prescreen => CandidateStatus::PrescreenScheduled,
        };
        let channels = payload.channels.unwrap_or_else(|| match interview_type {
            InterviewType::Interview => vec!["email".to_string()],
            InterviewType::Prescreen => vec!["whatsapp".to_string()],
        });

        let mut results = Vec::with_capacity(payload.candidate_ids.len());
        for candidate_id in payload.candidate_ids {
            let Some(mut candidate) = self.store.get_candidate(candidate_id).await? else {
                results.push(BatchItem::failed(candidate_id, "candidate not found"));
                continue;
            };
            if !candidate.status.can_transition_to(target) {
                results.push(BatchItem::failed(
                    candidate_id,
                    format!("cannot move from {} to {}", candidate.status, target),
                ));
                continue;
            }

            let interview = Interview {
                id: Uuid::new_v4(),
                candidate_id,
                job_id: candidate.job_id,
                interview_type,
                scheduled_date: payload.scheduled_date,
                scheduled_time: payload.scheduled_time.clone(),
                message: payload.message.clone(),
                channels: channels.clone(),
                status: InterviewStatus::Scheduled,
                created_at: Utc::now(),
            };
            self.store.insert_interview(interview).await?;

            candidate.status = target;
            candidate.last_updated = Utc::now().date_naive();
            self.store.save_candidate(candidate).await?;
            results.push(BatchItem::succeeded(candidate_id));
        }

        let response = BatchResponse::from_items(results);
        tracing::info!(
            kind = interview_type.as_str(),
            processed = response.processed,
            requested = response.results.len(),
            "Scheduling batch finished"
        );
        Ok(response)
    }
}
