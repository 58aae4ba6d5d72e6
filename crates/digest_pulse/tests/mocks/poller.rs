use std::sync::{Arc, Mutex};

use digest_pulse::{types::VideoRef, yt::ChannelPoller};

#[derive(Clone)]
pub struct MockPoller {
    pub video: Option<VideoRef>,
    pub duration_secs: Option<u64>,
    pub latest_calls: Arc<Mutex<usize>>,
    pub duration_calls: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<String>,
    pub fail_duration_with: Option<String>,
}

impl MockPoller {
    pub fn new(video_id: &str, duration_secs: u64) -> Self {
        Self {
            video: Some(VideoRef {
                id: video_id.to_string(),
                title: format!("Video {video_id}"),
                url: format!("https://www.youtube.com/watch?v={video_id}"),
            }),
            duration_secs: Some(duration_secs),
            latest_calls: Arc::new(Mutex::new(0)),
            duration_calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
            fail_duration_with: None,
        }
    }

    pub fn empty() -> Self {
        Self {
            video: None,
            duration_secs: None,
            latest_calls: Arc::new(Mutex::new(0)),
            duration_calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
            fail_duration_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Self::empty()
        }
    }

    pub fn with_unknown_duration(mut self) -> Self {
        self.duration_secs = None;
        self
    }

    pub fn with_duration_failure(mut self, msg: &str) -> Self {
        self.fail_duration_with = Some(msg.to_string());
        self
    }
}

impl ChannelPoller for MockPoller {
    type Error = anyhow::Error;

    async fn latest_video(&self) -> anyhow::Result<Option<VideoRef>> {
        *self.latest_calls.lock().unwrap() += 1;
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        Ok(self.video.clone())
    }

    async fn video_duration(&self, video_id: &str) -> anyhow::Result<Option<u64>> {
        self.duration_calls.lock().unwrap().push(video_id.to_string());
        if let Some(ref msg) = self.fail_duration_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        Ok(self.duration_secs)
    }
}
