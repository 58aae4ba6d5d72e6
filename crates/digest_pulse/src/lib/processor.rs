pub mod builder;

use anyhow::Context;
use digest_store::DedupStore;

use crate::{
    mail::Mailer,
    yt::{ChannelPoller, TranscriptFetcher},
    Summarizer,
};

/// Terminal state of one pipeline run. Every variant maps to a clean exit;
/// anything that aborts the run surfaces as an error instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Summary emailed and the video id recorded in the dedup store.
    Summarized { video_id: String },
    /// The latest upload was already handled by an earlier run.
    AlreadyProcessed { video_id: String },
    /// Duration missing, zero or above the ceiling; nothing was summarized.
    SkippedDuration {
        video_id: String,
        duration_secs: Option<u64>,
    },
}

// The core channel digest processor
#[derive(Debug)]
pub struct DigestProcessor<D, P, T, S, M>
where
    D: DedupStore + Send + Sync + 'static,
    P: ChannelPoller + Send + Sync + 'static,
    T: TranscriptFetcher + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
    M: Mailer + Send + Sync + 'static,
{
    store: D,
    poller: P,
    transcripts: T,
    summarizer: S,
    mailer: M,
    max_duration_secs: u64,
    transcript_lang: String,
}

impl<D, P, T, S, M> DigestProcessor<D, P, T, S, M>
where
    D: DedupStore + Send + Sync + 'static,
    P: ChannelPoller + Send + Sync + 'static,
    T: TranscriptFetcher + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
    M: Mailer + Send + Sync + 'static,
{
    /// Fail closed: a video with no determinable runtime is never summarized.
    fn is_processable(&self, duration_secs: Option<u64>) -> bool {
        matches!(duration_secs, Some(secs) if secs > 0 && secs <= self.max_duration_secs)
    }

    #[tracing::instrument(skip(self))]
    pub async fn run(self) -> anyhow::Result<RunOutcome> {
        // Liveness signal goes out before any pipeline work; a broken mail
        // path fails the run here, visibly.
        self.mailer
            .send_heartbeat()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to send heartbeat email: {e:?}"))?;

        let video = self
            .poller
            .latest_video()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to query channel for latest video: {e:?}"))?;
        let Some(video) = video else {
            anyhow::bail!("No videos found on channel");
        };
        tracing::info!(video_id = %video.id, title = %video.title, "Latest upload");

        if self
            .store
            .is_processed(&video.id)
            .await
            .context("Failed to read dedup store")?
        {
            tracing::info!(video_id = %video.id, "Already processed, skipping");
            return Ok(RunOutcome::AlreadyProcessed { video_id: video.id });
        }

        let duration_secs = match self.poller.video_duration(&video.id).await {
            Ok(duration) => duration,
            Err(e) => {
                tracing::warn!(error = ?e, video_id = %video.id, "Failed to fetch video duration");
                None
            }
        };
        if !self.is_processable(duration_secs) {
            tracing::info!(
                video_id = %video.id,
                duration_secs,
                max_duration_secs = self.max_duration_secs,
                "Skipping video, duration missing or over ceiling"
            );
            return Ok(RunOutcome::SkippedDuration {
                video_id: video.id,
                duration_secs,
            });
        }

        let transcript = self
            .transcripts
            .fetch(&video.id, &self.transcript_lang)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to fetch transcript: {e:?}"))?;
        let Some(transcript) = transcript else {
            anyhow::bail!(
                "No '{}' transcript available for video {}",
                self.transcript_lang,
                video.id
            );
        };
        tracing::info!(chars = transcript.len(), "Transcript fetched");

        let summary = self
            .summarizer
            .summarize(&transcript)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to summarize transcript: {e:?}"))?;

        // A failed send leaves the id unrecorded so the next run retries
        // the same video.
        self.mailer
            .send_summary(&video, &summary.summary)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to send summary email: {e:?}"))?;

        self.store
            .mark_processed(&video.id)
            .await
            .context("Failed to mark video as processed")?;
        tracing::info!(video_id = %video.id, "Summary sent and video marked as processed");

        Ok(RunOutcome::Summarized { video_id: video.id })
    }
}
