//! Telemetry setup shared by the binary and integration harnesses.

use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Registry};

/// Installs the global subscriber: env-filtered, bunyan-formatted JSON on
/// stdout, with error events forwarded to sentry.
///
/// Call once at process start.
pub fn init_tracing_subscriber() -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let formatting_layer = BunyanFormattingLayer::new("digest-pulse".into(), std::io::stdout);

    let subscriber = Registry::default()
        .with(env_filter)
        .with(sentry_tracing::layer())
        .with(JsonStorageLayer)
        .with(formatting_layer);

    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}
