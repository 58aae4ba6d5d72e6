use reqwest::Client;
use serde::Deserialize;

use crate::{Summarizer, SummaryResponse};

pub struct OpenAIClient {
    client: Client,
    api_key: String,
    base_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum OpenAIError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
}

impl OpenAIClient {
    const SYSTEM_PROMPT: &str = include_str!("./prompts/system_0.txt");
    const USER_PROMPT: &str = include_str!("./prompts/user_0.txt");
    const TEMPERATURE: f64 = 0.7;

    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: "https://api.openai.com/v1".into(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub async fn send_completion_request(
        &self,
        model_name: impl Into<String>,
        user_content: impl Into<String>,
    ) -> Result<CompletionResponse, OpenAIError> {
        let body = serde_json::json!({
            "model": model_name.into(),
            "temperature": Self::TEMPERATURE,
            "messages": [
                {
                    "role": "system",
                    "content": Self::SYSTEM_PROMPT
                },
                {
                    "role": "user",
                    "content": user_content.into()
                }
            ]
        });

        let resp = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(OpenAIError::Api { status, message });
        }

        Ok(resp.json::<CompletionResponse>().await?)
    }
}

#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    pub id: String,
    pub choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionChoice {
    pub index: u32,
    pub message: CompletionMessage,
    pub finish_reason: String,
}

#[derive(Debug, Deserialize)]
pub struct CompletionMessage {
    pub role: String,
    pub content: Option<String>,
}

impl Summarizer for OpenAIClient {
    const SUMMARIZER_MODEL: &'static str = "gpt-4o";
    type Error = OpenAIError;

    #[tracing::instrument(skip_all)]
    async fn summarize(&self, transcript: &str) -> Result<SummaryResponse, Self::Error> {
        // ~4 chars per token keeps the prompt inside the context window
        // without a tokenizer dependency
        let transcript = truncate_chars(transcript, Self::CONTEXT_WINDOW_LIMIT * 4);
        let user_content = Self::USER_PROMPT.replace("{transcript}", transcript);

        let response = self
            .send_completion_request(Self::SUMMARIZER_MODEL, user_content)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to summarize content"))?;

        let summary = response
            .choices
            .first()
            .and_then(|c| c.message.content.clone())
            .ok_or_else(|| OpenAIError::Api {
                status: 0,
                message: "No content in response".into(),
            })?;

        Ok(SummaryResponse { summary })
    }
}

fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
