use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Per-item outcome of a batch operation. Nothing is skipped silently:
/// every requested candidate id shows up exactly once in `results`, and
/// `processed` counts the successes only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchResponse {
    pub processed: usize,
    pub results: Vec<BatchItem>,
}

impl BatchResponse {
    pub fn from_items(results: Vec<BatchItem>) -> Self {
        let processed = results
            .iter()
            .filter(|item| item.outcome == BatchOutcome::Succeeded)
            .count();
        Self { processed, results }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchItem {
    pub candidate_id: Uuid,
    pub outcome: BatchOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BatchItem {
    pub fn succeeded(candidate_id: Uuid) -> Self {
        Self {
            candidate_id,
            outcome: BatchOutcome::Succeeded,
            error: None,
        }
    }

    pub fn failed(candidate_id: Uuid, error: impl Into<String>) -> Self {
        Self {
            candidate_id,
            outcome: BatchOutcome::Failed,
            error: Some(error.into()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchOutcome {
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SchedulePayload {
    #[validate(length(min = 1))]
    pub candidate_ids: Vec<Uuid>,
    pub scheduled_date: NaiveDate,
    #[validate(length(min = 1))]
    pub scheduled_time: String,
    pub message: Option<String>,
    pub channels: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SendEmailsPayload {
    #[validate(length(min = 1))]
    pub candidate_ids: Vec<Uuid>,
    pub template_id: Option<Uuid>,
}
