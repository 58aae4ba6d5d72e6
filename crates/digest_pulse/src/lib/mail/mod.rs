pub mod sendgrid;
pub mod template;

use std::{fmt::Debug, future::Future};

use crate::types::VideoRef;

/// One outbound email, constructed per send and never persisted.
#[derive(Debug, Clone)]
pub struct EmailMessage {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html_body: String,
}

pub trait Mailer {
    type Error: Debug;

    /// Unconditional liveness notification, sent once at the start of every
    /// run regardless of pipeline outcome.
    fn send_heartbeat(&self) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Renders and dispatches the summary email for one video.
    fn send_summary(
        &self,
        video: &VideoRef,
        summary: &str,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;
}
