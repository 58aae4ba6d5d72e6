use std::path::PathBuf;

use clap::Parser;
use digest_pulse::{
    mail::sendgrid::SendGridClient,
    openai::OpenAIClient,
    tracing::init_tracing_subscriber,
    yt::{data_api::DataApiClient, transcript::TimedTextClient},
    DigestProcessorBuilder, RunOutcome,
};
use digest_store::JsonFileStore;

#[derive(Parser)]
#[command(name = "digest-pulse", about = "Channel upload summary mailer")]
struct Cli {
    /// Video platform API key
    #[arg(long, env = "YOUTUBE_API_KEY")]
    youtube_api_key: String,

    /// OpenAI API key
    #[arg(long, env = "OPENAI_API_KEY")]
    openai_key: String,

    /// SendGrid API key
    #[arg(long, env = "SENDGRID_API_KEY")]
    sendgrid_key: String,

    /// Channel to poll for new uploads
    #[arg(long, env = "CHANNEL_ID")]
    channel_id: String,

    /// Sender address
    #[arg(long, env = "FROM_EMAIL")]
    from_email: String,

    /// Recipient addresses, comma separated
    #[arg(long, env = "TO_EMAILS", value_delimiter = ',')]
    to_emails: Vec<String>,

    /// Longest upload that will be summarized, in seconds
    #[arg(long, env = "MAX_VIDEO_DURATION_SECS", default_value = "3600")]
    max_video_duration_secs: u64,

    /// Transcript language code
    #[arg(long, env = "TRANSCRIPT_LANG", default_value = "en")]
    transcript_lang: String,

    /// Path of the processed-video id file
    #[arg(long, env = "DEDUP_STORE_PATH", default_value = "processed_videos.json")]
    dedup_store_path: PathBuf,
}

struct Config {
    youtube_api_key: String,
    openai_key: String,
    sendgrid_key: String,
    channel_id: String,
    from_email: String,
    to_emails: Vec<String>,
    max_video_duration_secs: u64,
    transcript_lang: String,
    dedup_store_path: PathBuf,
}

async fn run_pipeline(config: &Config) -> anyhow::Result<RunOutcome> {
    let store = JsonFileStore::new(&config.dedup_store_path);
    let poller = DataApiClient::new(&config.youtube_api_key, &config.channel_id);
    let transcripts = TimedTextClient::new();
    let summarizer = OpenAIClient::new(&config.openai_key);
    let mailer = SendGridClient::new(
        &config.sendgrid_key,
        &config.from_email,
        config.to_emails.clone(),
    );

    let processor = DigestProcessorBuilder::new()
        .store(store)
        .poller(poller)
        .transcript_fetcher(transcripts)
        .summarizer(summarizer)
        .mailer(mailer)
        .max_duration_secs(config.max_video_duration_secs)
        .transcript_lang(&config.transcript_lang)
        .build();

    processor.run().await
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let _guard = sentry::init((
        std::env::var("SENTRY_DSN").unwrap_or_default(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: Some("production".into()),
            ..Default::default()
        },
    ));

    let cli = Cli::parse();
    init_tracing_subscriber()?;

    let config = Config {
        youtube_api_key: cli.youtube_api_key,
        openai_key: cli.openai_key,
        sendgrid_key: cli.sendgrid_key,
        channel_id: cli.channel_id,
        from_email: cli.from_email,
        to_emails: cli.to_emails,
        max_video_duration_secs: cli.max_video_duration_secs,
        transcript_lang: cli.transcript_lang,
        dedup_store_path: cli.dedup_store_path,
    };

    match run_pipeline(&config).await? {
        RunOutcome::Summarized { video_id } => {
            tracing::info!(video_id = %video_id, "Run complete, summary delivered");
        }
        RunOutcome::AlreadyProcessed { video_id } => {
            tracing::info!(video_id = %video_id, "Run complete, nothing new to do");
        }
        RunOutcome::SkippedDuration {
            video_id,
            duration_secs,
        } => {
            tracing::info!(video_id = %video_id, duration_secs, "Run complete, video skipped");
        }
    }

    Ok(())
}
