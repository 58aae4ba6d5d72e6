use std::{fmt::Debug, future::Future};

use serde::Deserialize;

pub trait Summarizer {
    /// Token budget a prompt must fit in, model context minus headroom for
    /// the instructions and the completion.
    const CONTEXT_WINDOW_LIMIT: usize = 128_000 - 18_000;
    const SUMMARIZER_MODEL: &'static str;

    type Error: Debug;

    fn summarize(
        &self,
        transcript: &str,
    ) -> impl Future<Output = Result<SummaryResponse, Self::Error>> + Send;
}

#[derive(Debug, Deserialize)]
pub struct SummaryResponse {
    pub summary: String,
}
