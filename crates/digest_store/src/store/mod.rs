use std::future::Future;

pub mod json_file;

pub trait DedupStore {
    fn is_processed(&self, video_id: &str) -> impl Future<Output = anyhow::Result<bool>> + Send;

    fn mark_processed(&self, video_id: &str) -> impl Future<Output = anyhow::Result<()>> + Send;
}

impl<T: DedupStore + Send + Sync> DedupStore for &T {
    async fn is_processed(&self, video_id: &str) -> anyhow::Result<bool> {
        (**self).is_processed(video_id).await
    }

    async fn mark_processed(&self, video_id: &str) -> anyhow::Result<()> {
        (**self).mark_processed(video_id).await
    }
}
