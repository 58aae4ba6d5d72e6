use reqwest::Client;

use crate::{
    mail::{template, EmailMessage, Mailer},
    types::VideoRef,
};

/// Transactional email client for the SendGrid v3 mail send API.
pub struct SendGridClient {
    client: Client,
    api_key: String,
    from: String,
    to: Vec<String>,
    base_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SendGridError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
}

impl SendGridClient {
    pub fn new(api_key: impl Into<String>, from: impl Into<String>, to: Vec<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            from: from.into(),
            to,
            base_url: "https://api.sendgrid.com".into(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub async fn send(&self, message: &EmailMessage) -> Result<(), SendGridError> {
        let recipients = message
            .to
            .iter()
            .map(|email| serde_json::json!({ "email": email }))
            .collect::<Vec<_>>();

        let body = serde_json::json!({
            "personalizations": [{ "to": recipients }],
            "from": { "email": message.from },
            "subject": message.subject,
            "content": [{ "type": "text/html", "value": message.html_body }],
        });

        let resp = self
            .client
            .post(format!("{}/v3/mail/send", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(SendGridError::Api { status, message });
        }

        Ok(())
    }

    fn message(&self, rendered: template::RenderedEmail) -> EmailMessage {
        EmailMessage {
            from: self.from.clone(),
            to: self.to.clone(),
            subject: rendered.subject,
            html_body: rendered.html,
        }
    }
}

impl Mailer for SendGridClient {
    type Error = SendGridError;

    #[tracing::instrument(skip(self))]
    async fn send_heartbeat(&self) -> Result<(), Self::Error> {
        self.send(&self.message(template::render_heartbeat())).await
    }

    #[tracing::instrument(skip_all, fields(video_id = %video.id))]
    async fn send_summary(&self, video: &VideoRef, summary: &str) -> Result<(), Self::Error> {
        let message = self.message(template::render_summary(video, summary));
        self.send(&message)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to send summary email"))
    }
}
