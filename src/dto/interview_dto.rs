use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::interview::{Interview, InterviewStatus, InterviewType};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewResponse {
    pub id: Uuid,
    pub candidate_id: Uuid,
    pub job_id: Uuid,
    pub interview_type: InterviewType,
    pub scheduled_date: NaiveDate,
    pub scheduled_time: String,
    pub message: Option<String>,
    pub channels: Vec<String>,
    pub channel: String,
    pub status: InterviewStatus,
    pub created_at: DateTime<Utc>,
}

impl From<Interview> for InterviewResponse {
    fn from(value: Interview) -> Self {
        let channel = value.channels_display();
        Self {
            id: value.id,
            candidate_id: value.candidate_id,
            job_id: value.job_id,
            interview_type: value.interview_type,
            scheduled_date: value.scheduled_date,
            scheduled_time: value.scheduled_time,
            message: value.message,
            channels: value.channels,
            channel,
            status: value.status,
            created_at: value.created_at,
        }
    }
}
