pub mod mailer;
pub mod poller;
pub mod store;
pub mod summarizer;
pub mod transcript;
