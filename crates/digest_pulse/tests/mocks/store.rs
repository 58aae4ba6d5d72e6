use std::sync::{Arc, Mutex};

use digest_store::DedupStore;

#[derive(Clone)]
pub struct MockDedupStore {
    pub processed: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<String>,
}

impl Default for MockDedupStore {
    fn default() -> Self {
        Self {
            processed: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }
}

impl MockDedupStore {
    pub fn with_processed(ids: &[&str]) -> Self {
        Self {
            processed: Arc::new(Mutex::new(ids.iter().map(|id| id.to_string()).collect())),
            ..Default::default()
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Default::default()
        }
    }
}

impl DedupStore for MockDedupStore {
    async fn is_processed(&self, video_id: &str) -> anyhow::Result<bool> {
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        Ok(self.processed.lock().unwrap().iter().any(|id| id == video_id))
    }

    async fn mark_processed(&self, video_id: &str) -> anyhow::Result<()> {
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        self.processed.lock().unwrap().push(video_id.to_string());
        Ok(())
    }
}
