use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::email_template::EmailTemplate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTemplatePayload {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub subject: String,
    pub body: String,
    #[validate(length(min = 1))]
    pub template_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateTemplatePayload {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    #[validate(length(min = 1))]
    pub subject: Option<String>,
    pub body: Option<String>,
    #[validate(length(min = 1))]
    pub template_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateResponse {
    pub id: Uuid,
    pub name: String,
    pub subject: String,
    pub body: String,
    pub template_type: String,
}

impl From<EmailTemplate> for TemplateResponse {
    fn from(value: EmailTemplate) -> Self {
        Self {
            id: value.id,
            name: value.name,
            subject: value.subject,
            body: value.body,
            template_type: value.template_type,
        }
    }
}
