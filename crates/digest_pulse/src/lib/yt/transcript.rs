use reqwest::{Client, StatusCode};

use crate::{parser::parse_timedtext, yt::TranscriptFetcher};

/// Client for the timedtext caption endpoint.
///
/// The endpoint answers an empty body when the video has no caption track
/// in the requested language; that reads as `Ok(None)` here, not an error.
pub struct TimedTextClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum TimedTextError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error(transparent)]
    Parse(#[from] crate::Error),
}

impl TimedTextClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: "https://video.google.com".into(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

impl Default for TimedTextClient {
    fn default() -> Self {
        Self::new()
    }
}

impl TranscriptFetcher for TimedTextClient {
    type Error = TimedTextError;

    #[tracing::instrument(skip(self))]
    async fn fetch(&self, video_id: &str, lang: &str) -> Result<Option<String>, Self::Error> {
        let resp = self
            .client
            .get(format!("{}/timedtext", self.base_url))
            .query(&[("lang", lang), ("v", video_id)])
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if resp.status() == StatusCode::NOT_FOUND {
            tracing::warn!(video_id, lang, "No caption track for language");
            return Ok(None);
        }

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(TimedTextError::Api { status, message });
        }

        let body = resp.text().await?;
        if body.trim().is_empty() {
            tracing::warn!(video_id, lang, "Empty caption response for language");
            return Ok(None);
        }

        let text = parse_timedtext(&body)?;
        if text.is_empty() {
            return Ok(None);
        }

        Ok(Some(text))
    }
}
