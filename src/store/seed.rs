use chrono::{Duration, Utc};
use uuid::Uuid;

use super::{MemoryStore, Store};
use crate::models::candidate::{Candidate, CandidateStatus, Recommendation};
use crate::models::email_template::EmailTemplate;
use crate::models::job::{Job, JobStatus, JobType};
use crate::models::user::User;

/// Builds the demo store used when no database is configured. Counters on
/// the seeded jobs match the seeded candidates, so the derived-count
/// invariant holds from the first request.
pub async fn seeded_store() -> MemoryStore {
    let store = MemoryStore::new();
    seed(&store).await;
    store
}

async fn seed(store: &MemoryStore) {
    let now = Utc::now();
    let today = now.date_naive();

    let backend_job = Job {
        id: Uuid::new_v4(),
        title: "Senior Backend Engineer".into(),
        department: "Engineering".into(),
        description: "Own the services behind the candidate pipeline.".into(),
        requirements: "5+ years building production APIs; Postgres; on-call rotation.".into(),
        location: "Remote".into(),
        job_type: JobType::FullTime,
        status: JobStatus::Active,
        applicants_count: 2,
        created_at: now - Duration::days(21),
    };
    let designer_job = Job {
        id: Uuid::new_v4(),
        title: "Product Designer".into(),
        department: "Design".into(),
        description: "Design the recruiter-facing dashboards end to end.".into(),
        requirements: "Portfolio of shipped B2B work; Figma; systems thinking.".into(),
        location: "Berlin".into(),
        job_type: JobType::FullTime,
        status: JobStatus::Active,
        applicants_count: 1,
        created_at: now - Duration::days(14),
    };
    let intern_job = Job {
        id: Uuid::new_v4(),
        title: "Data Analyst Intern".into(),
        department: "Analytics".into(),
        description: "Support the hiring-funnel reporting for a summer term.".into(),
        requirements: "SQL basics; curiosity about hiring metrics.".into(),
        location: "Remote".into(),
        job_type: JobType::Internship,
        status: JobStatus::Draft,
        applicants_count: 0,
        created_at: now - Duration::days(3),
    };

    let candidates = vec![
        Candidate {
            id: Uuid::new_v4(),
            job_id: backend_job.id,
            name: "Amina Rahimova".into(),
            email: "amina.rahimova@example.com".into(),
            phone: Some("+992901112233".into()),
            resume_score: Some(87),
            rationale: Some(
                "Eight years of API work, two of them running a payments platform on Postgres."
                    .into(),
            ),
            recommendation: Some(Recommendation::Interview),
            status: CandidateStatus::Screened,
            applied_date: today - Duration::days(12),
            last_updated: today - Duration::days(5),
        },
        Candidate {
            id: Uuid::new_v4(),
            job_id: backend_job.id,
            name: "Jonas Keller".into(),
            email: "jonas.keller@example.com".into(),
            phone: None,
            resume_score: Some(54),
            rationale: Some("Mostly frontend history; backend exposure limited to tutorials.".into()),
            recommendation: Some(Recommendation::OnHold),
            status: CandidateStatus::Pending,
            applied_date: today - Duration::days(9),
            last_updated: today - Duration::days(9),
        },
        Candidate {
            id: Uuid::new_v4(),
            job_id: designer_job.id,
            name: "Priya Natarajan".into(),
            email: "priya.n@example.com".into(),
            phone: Some("+4915788990011".into()),
            resume_score: Some(91),
            rationale: Some("Led design for two recruiting products; strong systems portfolio.".into()),
            recommendation: Some(Recommendation::Interview),
            status: CandidateStatus::InterviewScheduled,
            applied_date: today - Duration::days(7),
            last_updated: today - Duration::days(1),
        },
    ];

    let templates = vec![
        EmailTemplate {
            id: Uuid::new_v4(),
            name: "Rejection — after screening".into(),
            subject: "Your application for {{job_title}}".into(),
            body: "Hi {{candidate_name}},\n\nThank you for taking the time to apply for {{job_title}}. After reviewing your background we have decided not to move forward at this stage.\n\nBest regards,\nThe Hiring Team".into(),
            template_type: "rejection".into(),
        },
        EmailTemplate {
            id: Uuid::new_v4(),
            name: "Interview invitation".into(),
            subject: "Interview invitation — {{job_title}}".into(),
            body: "Hi {{candidate_name}},\n\nWe enjoyed reviewing your application for {{job_title}} and would like to invite you to an interview. You will receive scheduling details shortly.\n\nBest regards,\nThe Hiring Team".into(),
            template_type: "interview_invite".into(),
        },
    ];

    let hr_user = User {
        id: Uuid::new_v4(),
        username: "hr_admin".into(),
        password: String::new(),
        company_name: Some("Hireflow Demo GmbH".into()),
        role: "hr".into(),
        email: Some("hr@hireflow.example".into()),
    };

    for job in [backend_job, designer_job, intern_job] {
        let _ = store.insert_job(job).await;
    }
    for candidate in candidates {
        let _ = store.insert_candidate(candidate).await;
    }
    for template in templates {
        let _ = store.insert_template(template).await;
    }
    let _ = store.insert_user(hr_user).await;

    tracing::info!("Seeded in-memory store with demo jobs, candidates and templates");
}
