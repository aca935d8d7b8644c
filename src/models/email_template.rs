use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailTemplate {
    pub id: Uuid,
    pub name: String,
    pub subject: String,
    pub body: String,
    pub template_type: String,
}

impl EmailTemplate {
    /// Renders subject and body with the `{{candidate_name}}` and
    /// `{{job_title}}` placeholders substituted.
    pub fn render(&self, candidate_name: &str, job_title: &str) -> (String, String) {
        let fill = |text: &str| {
            text.replace("{{candidate_name}}", candidate_name)
                .replace("{{job_title}}", job_title)
        };
        (fill(&self.subject), fill(&self.body))
    }
}
