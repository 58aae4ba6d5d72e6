pub mod data_api;
pub mod transcript;

use std::{fmt::Debug, future::Future};

use crate::types::VideoRef;

pub trait ChannelPoller {
    type Error: Debug;

    /// Most recently published video on the configured channel, if any.
    fn latest_video(&self) -> impl Future<Output = Result<Option<VideoRef>, Self::Error>> + Send;

    /// Runtime of a video in seconds. `None` when the metadata is missing
    /// or the duration cannot be parsed.
    fn video_duration(
        &self,
        video_id: &str,
    ) -> impl Future<Output = Result<Option<u64>, Self::Error>> + Send;
}

pub trait TranscriptFetcher {
    type Error: Debug;

    /// Plain-text transcript of a video in the requested language.
    /// `Ok(None)` means no transcript exists in that language.
    fn fetch(
        &self,
        video_id: &str,
        lang: &str,
    ) -> impl Future<Output = Result<Option<String>, Self::Error>> + Send;
}
