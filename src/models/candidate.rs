use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Pipeline stage of a candidate. The set is closed; arbitrary strings are
/// unrepresentable and every move between stages goes through
/// [`CandidateStatus::can_transition_to`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateStatus {
    Pending,
    Screened,
    InterviewScheduled,
    PrescreenScheduled,
    EmailSent,
    Hired,
    Rejected,
}

impl CandidateStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CandidateStatus::Pending => "pending",
            CandidateStatus::Screened => "screened",
            CandidateStatus::InterviewScheduled => "interview_scheduled",
            CandidateStatus::PrescreenScheduled => "prescreen_scheduled",
            CandidateStatus::EmailSent => "email_sent",
            CandidateStatus::Hired => "hired",
            CandidateStatus::Rejected => "rejected",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, CandidateStatus::Hired | CandidateStatus::Rejected)
    }

    /// Pipeline order: pending -> screened -> {interview_scheduled |
    /// prescreen_scheduled | email_sent} -> {hired | rejected}.
    /// Same-stage writes are no-ops; rejection is reachable from any
    /// non-terminal stage.
    pub fn can_transition_to(&self, next: CandidateStatus) -> bool {
        if *self == next {
            return true;
        }
        match (self, next) {
            (CandidateStatus::Pending, CandidateStatus::Screened) => true,
            (
                CandidateStatus::Screened,
                CandidateStatus::InterviewScheduled
                | CandidateStatus::PrescreenScheduled
                | CandidateStatus::EmailSent,
            ) => true,
            (
                CandidateStatus::InterviewScheduled
                | CandidateStatus::PrescreenScheduled
                | CandidateStatus::EmailSent,
                CandidateStatus::Hired,
            ) => true,
            (current, CandidateStatus::Rejected) if !current.is_terminal() => true,
            _ => false,
        }
    }
}

impl FromStr for CandidateStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(CandidateStatus::Pending),
            "screened" => Ok(CandidateStatus::Screened),
            "interview_scheduled" => Ok(CandidateStatus::InterviewScheduled),
            "prescreen_scheduled" => Ok(CandidateStatus::PrescreenScheduled),
            "email_sent" => Ok(CandidateStatus::EmailSent),
            "hired" => Ok(CandidateStatus::Hired),
            "rejected" => Ok(CandidateStatus::Rejected),
            other => Err(format!("unknown candidate status: {}", other)),
        }
    }
}

impl std::fmt::Display for CandidateStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Categorical screening outcome, distinct from the pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Recommendation {
    Interview,
    OnHold,
    Reject,
}

impl Recommendation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::Interview => "interview",
            Recommendation::OnHold => "on-hold",
            Recommendation::Reject => "reject",
        }
    }
}

impl FromStr for Recommendation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "interview" => Ok(Recommendation::Interview),
            "on-hold" => Ok(Recommendation::OnHold),
            "reject" => Ok(Recommendation::Reject),
            other => Err(format!("unknown recommendation: {}", other)),
        }
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `last_updated` is stamped to the current date on every mutation,
/// whatever the fields touched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub id: Uuid,
    pub job_id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub resume_score: Option<i32>,
    pub rationale: Option<String>,
    pub recommendation: Option<Recommendation>,
    pub status: CandidateStatus,
    pub applied_date: NaiveDate,
    pub last_updated: NaiveDate,
}
