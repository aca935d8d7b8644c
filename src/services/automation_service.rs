use bytes::Bytes;
use reqwest::Client;
use tracing::info;

use crate::error::{Error, Result};

/// A parsed `submit-application` form, ready to be re-encoded for the
/// automation webhook.
#[derive(Debug)]
pub struct ApplicationSubmission {
    pub fields: Vec<(String, String)>,
    pub resume: ResumeFile,
}

#[derive(Debug)]
pub struct ResumeFile {
    pub filename: String,
    pub content_type: String,
    pub data: Bytes,
}

/// What the upstream answered; relayed verbatim to the original caller.
#[derive(Debug)]
pub struct UpstreamReply {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Bytes,
}

/// Relays application submissions to the external workflow-automation
/// webhook. The route exists to bridge browser cross-origin restrictions;
/// no business logic happens here.
#[derive(Clone)]
pub struct AutomationService {
    client: Client,
    webhook_url: Option<String>,
}

impl AutomationService {
    pub fn new(webhook_url: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client for automation service");

        let webhook_url = webhook_url.filter(|url| !url.trim().is_empty());

        if let Some(ref url) = webhook_url {
            info!("Automation webhook enabled, forwarding to: {}", url);
        } else {
            info!("Automation webhook disabled (AUTOMATION_WEBHOOK_URL not set)");
        }

        Self {
            client,
            webhook_url,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.webhook_url.is_some()
    }

    /// Re-encodes the submission as a fresh multipart form and POSTs it
    /// upstream, preserving the résumé's filename and content type.
    pub async fn forward_application(
        &self,
        submission: ApplicationSubmission,
    ) -> Result<UpstreamReply> {
        let url = self.webhook_url.as_ref().ok_or_else(|| {
            Error::Upstream("automation webhook is not configured (AUTOMATION_WEBHOOK_URL)".into())
        })?;

        let mut form = reqwest::multipart::Form::new();
        for (name, value) in submission.fields {
            form = form.text(name, value);
        }
        let part = reqwest::multipart::Part::bytes(submission.resume.data.to_vec())
            .file_name(submission.resume.filename)
            .mime_str(&submission.resume.content_type)?;
        form = form.part("resume", part);

        let response = self.client.post(url).multipart(form).send().await?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await?;

        info!(status, "Automation webhook replied");
        Ok(UpstreamReply {
            status,
            content_type,
            body,
        })
    }
}
