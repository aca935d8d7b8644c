pub mod automation_service;
pub mod candidate_service;
pub mod external_service;
pub mod interview_service;
pub mod job_service;
pub mod template_service;
pub mod user_service;
