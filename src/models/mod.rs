pub mod candidate;
pub mod email_template;
pub mod interview;
pub mod job;
pub mod user;
