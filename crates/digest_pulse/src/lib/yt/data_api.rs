use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::{
    parser::parse_iso8601_duration,
    types::{SearchResponse, VideoRef, VideosResponse},
    yt::ChannelPoller,
};

/// Key-authenticated client for the video metadata API (search and
/// per-video content details).
pub struct DataApiClient {
    client: Client,
    api_key: String,
    channel_id: String,
    base_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum DataApiError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
}

impl DataApiClient {
    const VIDEO_WATCH_URL: &str = "https://www.youtube.com/watch";

    pub fn new(api_key: impl Into<String>, channel_id: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            channel_id: channel_id.into(),
            base_url: "https://www.googleapis.com/youtube/v3".into(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, DataApiError> {
        let resp = self
            .client
            .get(format!("{}/{path}", self.base_url))
            .query(query)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(DataApiError::Api { status, message });
        }

        Ok(resp.json::<T>().await?)
    }
}

impl ChannelPoller for DataApiClient {
    type Error = DataApiError;

    #[tracing::instrument(skip(self))]
    async fn latest_video(&self) -> Result<Option<VideoRef>, Self::Error> {
        let response: SearchResponse = self
            .get_json(
                "search",
                &[
                    ("part", "snippet"),
                    ("channelId", &self.channel_id),
                    ("order", "date"),
                    ("maxResults", "1"),
                    ("type", "video"),
                ],
            )
            .await?;

        let video = response.items.into_iter().find_map(|item| {
            let id = item.id.video_id?;
            Some(VideoRef {
                url: format!("{}?v={id}", Self::VIDEO_WATCH_URL),
                title: item.snippet.title,
                id,
            })
        });

        Ok(video)
    }

    #[tracing::instrument(skip(self))]
    async fn video_duration(&self, video_id: &str) -> Result<Option<u64>, Self::Error> {
        let response: VideosResponse = self
            .get_json("videos", &[("part", "contentDetails"), ("id", video_id)])
            .await?;

        let duration = response
            .items
            .first()
            .and_then(|item| parse_iso8601_duration(&item.content_details.duration));

        if duration.is_none() {
            tracing::warn!(video_id, "No parseable duration in video metadata");
        }

        Ok(duration)
    }
}
