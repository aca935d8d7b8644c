pub mod config;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;

use std::sync::Arc;

use crate::services::{
    automation_service::AutomationService, candidate_service::CandidateService,
    external_service::ExternalService, interview_service::InterviewService,
    job_service::JobService, template_service::TemplateService, user_service::UserService,
};
use crate::store::Store;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub job_service: JobService,
    pub candidate_service: CandidateService,
    pub interview_service: InterviewService,
    pub template_service: TemplateService,
    pub user_service: UserService,
    pub automation_service: AutomationService,
    pub external_service: ExternalService,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>) -> Self {
        let config = crate::config::get_config();

        let job_service = JobService::new(store.clone());
        let candidate_service = CandidateService::new(store.clone());
        let interview_service = InterviewService::new(store.clone());
        let template_service = TemplateService::new(store.clone());
        let user_service = UserService::new(store.clone());
        let automation_service = AutomationService::new(config.automation_webhook_url.clone());
        let external_service = ExternalService::new(
            config.external_api_url.clone(),
            config.external_api_key.clone(),
        );

        Self {
            store,
            job_service,
            candidate_service,
            interview_service,
            template_service,
            user_service,
            automation_service,
            external_service,
        }
    }
}
