use serde::Deserialize;

/// Identifier, title and watch URL for one published video.
///
/// Created by the channel poller and passed by value through the pipeline;
/// only the id is ever persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoRef {
    pub id: String,
    pub title: String,
    pub url: String,
}

/// `search.list` response from the video metadata API.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
pub struct SearchItem {
    pub id: SearchItemId,
    pub snippet: Snippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchItemId {
    // absent for channel/playlist results
    pub video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Snippet {
    pub title: String,
}

/// `videos.list` response carrying per-video content details.
#[derive(Debug, Deserialize)]
pub struct VideosResponse {
    #[serde(default)]
    pub items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoItem {
    pub content_details: ContentDetails,
}

#[derive(Debug, Deserialize)]
pub struct ContentDetails {
    /// ISO-8601 duration, e.g. `PT1H13M2S`.
    pub duration: String,
}
