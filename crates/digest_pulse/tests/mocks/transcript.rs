use std::sync::{Arc, Mutex};

use digest_pulse::yt::TranscriptFetcher;

#[derive(Clone)]
pub struct MockTranscriptFetcher {
    pub text: Option<String>,
    pub calls: Arc<Mutex<Vec<(String, String)>>>,
    pub fail_with: Option<String>,
}

impl MockTranscriptFetcher {
    pub fn new(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn unavailable() -> Self {
        Self {
            text: None,
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            text: None,
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(msg.to_string()),
        }
    }
}

impl TranscriptFetcher for MockTranscriptFetcher {
    type Error = anyhow::Error;

    async fn fetch(&self, video_id: &str, lang: &str) -> anyhow::Result<Option<String>> {
        self.calls
            .lock()
            .unwrap()
            .push((video_id.to_string(), lang.to_string()));
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        Ok(self.text.clone())
    }
}
