use std::sync::{Arc, Mutex};

use digest_pulse::{mail::Mailer, types::VideoRef};

#[derive(Clone)]
pub struct MockMailer {
    pub heartbeats: Arc<Mutex<usize>>,
    pub sent: Arc<Mutex<Vec<(VideoRef, String)>>>,
    pub fail_heartbeat_with: Option<String>,
    pub fail_summary_with: Option<String>,
}

impl Default for MockMailer {
    fn default() -> Self {
        Self {
            heartbeats: Arc::new(Mutex::new(0)),
            sent: Arc::new(Mutex::new(Vec::new())),
            fail_heartbeat_with: None,
            fail_summary_with: None,
        }
    }
}

impl MockMailer {
    pub fn failing_heartbeat(msg: &str) -> Self {
        Self {
            fail_heartbeat_with: Some(msg.to_string()),
            ..Default::default()
        }
    }

    pub fn failing_summary(msg: &str) -> Self {
        Self {
            fail_summary_with: Some(msg.to_string()),
            ..Default::default()
        }
    }
}

impl Mailer for MockMailer {
    type Error = anyhow::Error;

    async fn send_heartbeat(&self) -> anyhow::Result<()> {
        if let Some(ref msg) = self.fail_heartbeat_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        *self.heartbeats.lock().unwrap() += 1;
        Ok(())
    }

    async fn send_summary(&self, video: &VideoRef, summary: &str) -> anyhow::Result<()> {
        if let Some(ref msg) = self.fail_summary_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        self.sent
            .lock()
            .unwrap()
            .push((video.clone(), summary.to_string()));
        Ok(())
    }
}
