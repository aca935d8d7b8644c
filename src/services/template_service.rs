use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::dto::template_dto::{CreateTemplatePayload, UpdateTemplatePayload};
use crate::dto::workflow_dto::{BatchItem, BatchResponse, SendEmailsPayload};
use crate::error::{Error, Result};
use crate::models::candidate::CandidateStatus;
use crate::models::email_template::EmailTemplate;
use crate::store::Store;

#[derive(Clone)]
pub struct TemplateService {
    store: Arc<dyn Store>,
}

impl TemplateService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<EmailTemplate>> {
        self.store.list_templates().await
    }

    pub async fn get(&self, id: Uuid) -> Result<EmailTemplate> {
        self.store
            .get_template(id)
            .await?
            .ok_or_else(|| Error::NotFound("Email template not found".into()))
    }

    pub async fn create(&self, payload: CreateTemplatePayload) -> Result<EmailTemplate> {
        let template = EmailTemplate {
            id: Uuid::new_v4(),
            name: payload.name,
            subject: payload.subject,
            body: payload.body,
            template_type: payload.template_type,
        };
        self.store.insert_template(template).await
    }

    pub async fn update(&self, id: Uuid, payload: UpdateTemplatePayload) -> Result<EmailTemplate> {
        let mut template = self.get(id).await?;

        if let Some(name) = payload.name {
            template.name = name;
        }
        if let Some(subject) = payload.subject {
            template.subject = subject;
        }
        if let Some(body) = payload.body {
            template.body = body;
        }
        if let Some(template_type) = payload.template_type {
            template.template_type = template_type;
        }

        self.store.save_template(template).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        if !self.store.delete_template(id).await? {
            return Err(Error::NotFound("Email template not found".into()));
        }
        Ok(())
    }

    /// Moves each listed candidate to `email_sent`, rendering the chosen
    /// template per candidate. Dispatch itself happens on the client path
    /// through the hosted backend's notification helpers, not here.
    pub async fn send_bulk(&self, payload: SendEmailsPayload) -> Result<BatchResponse> {
        let template = match payload.template_id {
            Some(template_id) => Some(self.get(template_id).await?),
            None => None,
        };

        let mut results = Vec::with_capacity(payload.candidate_ids.len());
        for candidate_id in payload.candidate_ids {
            let Some(mut candidate) = self.store.get_candidate(candidate_id).await? else {
                results.push(BatchItem::failed(candidate_id, "candidate not found"));
                continue;
            };
            if !candidate
                .status
                .can_transition_to(CandidateStatus::EmailSent)
            {
                results.push(BatchItem::failed(
                    candidate_id,
                    format!("cannot move from {} to email_sent", candidate.status),
                ));
                continue;
            }

            if let Some(template) = &template {
                let job_title = self
                    .store
                    .get_job(candidate.job_id)
                    .await?
                    .map(|job| job.title)
                    .unwrap_or_default();
                let (subject, _body) = template.render(&candidate.name, &job_title);
                tracing::info!(
                    candidate_id = %candidate_id,
                    template = %template.name,
                    subject = %subject,
                    "Rendered bulk email"
                );
            }

            candidate.status = CandidateStatus::EmailSent;
            candidate.last_updated = Utc::now().date_naive();
            self.store.save_candidate(candidate).await?;
            results.push(BatchItem::succeeded(candidate_id));
        }

        Ok(BatchResponse::from_items(results))
    }
}
