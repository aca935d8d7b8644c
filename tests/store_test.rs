use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use hireflow_backend::error::Error;
use hireflow_backend::models::candidate::{CandidateStatus, Recommendation};
use hireflow_backend::models::email_template::EmailTemplate;
use hireflow_backend::models::job::{Job, JobStatus, JobType};
use hireflow_backend::services::external_service::{
    external_candidate_id, ExternalCandidateRow, ExternalJobRow,
};
use hireflow_backend::services::user_service::UserService;
use hireflow_backend::store::{seed, MemoryStore, Store};

fn sample_job() -> Job {
    Job {
        id: Uuid::new_v4(),
        title: "Backend Engineer".into(),
        department: "Eng".into(),
        description: "d".into(),
        requirements: "r".into(),
        location: "Remote".into(),
        job_type: JobType::FullTime,
        status: JobStatus::Active,
        applicants_count: 0,
        created_at: Utc::now(),
    }
}

#[test]
fn applicant_counter_never_goes_negative() {
    tokio_test::block_on(async {
        let store = MemoryStore::new();
        let job = store.insert_job(sample_job()).await.unwrap();

        store.adjust_job_applicants(job.id, -1).await.unwrap();
        store.adjust_job_applicants(job.id, -1).await.unwrap();
        let stored = store.get_job(job.id).await.unwrap().unwrap();
        assert_eq!(stored.applicants_count, 0);

        store.adjust_job_applicants(job.id, 1).await.unwrap();
        let stored = store.get_job(job.id).await.unwrap().unwrap();
        assert_eq!(stored.applicants_count, 1);
    });
}

#[tokio::test]
async fn seeded_store_counters_match_seeded_candidates() {
    let store = seed::seeded_store().await;

    let candidates = store.list_candidates().await.unwrap();
    let mut per_job: HashMap<Uuid, i32> = HashMap::new();
    for candidate in &candidates {
        *per_job.entry(candidate.job_id).or_insert(0) += 1;
    }

    for job in store.list_jobs().await.unwrap() {
        let expected = per_job.get(&job.id).copied().unwrap_or(0);
        assert_eq!(
            job.applicants_count, expected,
            "seed counter drift on job {}",
            job.title
        );
    }

    assert!(!store.list_templates().await.unwrap().is_empty());
    assert!(store
        .user_by_username("hr_admin")
        .await
        .unwrap()
        .is_some());
}

#[tokio::test]
async fn duplicate_username_is_a_conflict() {
    let service = UserService::new(Arc::new(MemoryStore::new()));

    service
        .create("recruiter".into(), None, "hr".into(), None)
        .await
        .unwrap();
    let err = service
        .create("recruiter".into(), None, "hr".into(), None)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Conflict(_)));
}

#[test]
fn template_render_substitutes_placeholders() {
    let template = EmailTemplate {
        id: Uuid::new_v4(),
        name: "Rejection".into(),
        subject: "Your application for {{job_title}}".into(),
        body: "Hi {{candidate_name}}, thanks for applying to {{job_title}}.".into(),
        template_type: "rejection".into(),
    };

    let (subject, body) = template.render("Alice", "Backend Engineer");
    assert_eq!(subject, "Your application for Backend Engineer");
    assert_eq!(body, "Hi Alice, thanks for applying to Backend Engineer.");
}

#[test]
fn transition_table_matches_pipeline_order() {
    use CandidateStatus::*;

    assert!(Pending.can_transition_to(Screened));
    assert!(Pending.can_transition_to(Rejected));
    assert!(!Pending.can_transition_to(Hired));
    assert!(!Pending.can_transition_to(InterviewScheduled));

    assert!(Screened.can_transition_to(InterviewScheduled));
    assert!(Screened.can_transition_to(PrescreenScheduled));
    assert!(Screened.can_transition_to(EmailSent));
    assert!(!Screened.can_transition_to(Hired));

    assert!(InterviewScheduled.can_transition_to(Hired));
    assert!(EmailSent.can_transition_to(Rejected));

    // terminal stages admit nothing but themselves
    assert!(!Hired.can_transition_to(Rejected));
    assert!(!Rejected.can_transition_to(Screened));
    assert!(Rejected.can_transition_to(Rejected));
}

#[test]
fn external_rows_map_onto_canonical_models() {
    let row = ExternalCandidateRow {
        id: 7,
        job_id: Some(3),
        full_name: "Alice Example".into(),
        email: "alice@example.com".into(),
        whatsapp_number: Some("+49157".into()),
        ai_score: Some(82),
        ai_reasoning: Some("Strong backend history".into()),
        ai_recommendation: Some("interview".into()),
        status: Some("screened".into()),
        applied_at: None,
    };

    let candidate: hireflow_backend::models::candidate::Candidate = row.clone().into();
    assert_eq!(candidate.resume_score, Some(82));
    assert_eq!(candidate.rationale.as_deref(), Some("Strong backend history"));
    assert_eq!(candidate.recommendation, Some(Recommendation::Interview));
    assert_eq!(candidate.status, CandidateStatus::Screened);
    assert_eq!(candidate.name, "Alice Example");

    // the numeric-id mapping is deterministic
    let again: hireflow_backend::models::candidate::Candidate = row.into();
    assert_eq!(candidate.id, again.id);
    assert_eq!(candidate.id, external_candidate_id(7));

    let job_row = ExternalJobRow {
        id: 3,
        title: "Backend Engineer".into(),
        department: None,
        description: None,
        requirements: None,
        location: None,
        employment_type: Some("part-time".into()),
        status: Some("unrecognized-state".into()),
        created_at: None,
    };
    let job: Job = job_row.into();
    assert_eq!(job.job_type, JobType::PartTime);
    // unknown external vocabulary falls back to the default
    assert_eq!(job.status, JobStatus::Active);
    assert_eq!(job.applicants_count, 0);
    assert_eq!(candidate.job_id, job.id);
}
