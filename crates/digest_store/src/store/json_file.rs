use std::path::PathBuf;

use anyhow::Context;

use crate::store::DedupStore;

/// Flat-file store holding a JSON array of processed video ids.
///
/// Writes are read-modify-write on the whole file. There is no locking;
/// the deployment assumption is a single run per host at a time.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    async fn read_ids(&self) -> anyhow::Result<Vec<String>> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .inspect_err(
                    |e| tracing::error!(error = ?e, path = ?self.path, "Failed to parse store file"),
                )
                .context("Failed to parse dedup store file"),
            // absent store reads as the empty set
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e).context("Failed to read dedup store file"),
        }
    }
}

impl DedupStore for JsonFileStore {
    async fn is_processed(&self, video_id: &str) -> anyhow::Result<bool> {
        let ids = self.read_ids().await?;
        Ok(ids.iter().any(|id| id == video_id))
    }

    async fn mark_processed(&self, video_id: &str) -> anyhow::Result<()> {
        let mut ids = self.read_ids().await?;
        if ids.iter().any(|id| id == video_id) {
            tracing::debug!(video_id, "Id already recorded");
            return Ok(());
        }
        ids.push(video_id.to_string());

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .context("Failed to create dedup store directory")?;
            }
        }

        let json = serde_json::to_vec(&ids).context("Failed to serialize dedup store")?;
        tokio::fs::write(&self.path, json)
            .await
            .inspect_err(
                |e| tracing::error!(error = ?e, path = ?self.path, "Failed to write store file"),
            )
            .context("Failed to write dedup store file")?;

        Ok(())
    }
}
