mod error;
mod llm;
pub mod mail;
pub mod parser;
mod processor;
pub mod sections;
pub mod tracing;
pub mod types;
pub mod yt;

pub use error::Error;
pub use llm::openai;
pub use llm::summarizer::{Summarizer, SummaryResponse};
pub use processor::{builder::DigestProcessorBuilder, DigestProcessor, RunOutcome};
