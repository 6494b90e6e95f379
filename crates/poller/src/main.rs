//! Homework review bot binary entrypoint.

use std::time::Duration;

use chrono::Utc;

use review_common::config::AppConfig;
use review_notifier::TelegramNotifier;
use review_poller::client::PracticumClient;
use review_poller::logging::{self, LogSink};
use review_poller::poller::StatusPoller;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    let sink = LogSink::from_lookup(|key| std::env::var(key).ok());
    logging::init(&sink)?;

    tracing::info!("Homework review bot starting...");

    // Load configuration; missing tokens stop the process here
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Startup aborted");
            return Err(e);
        }
    };

    let notifier = TelegramNotifier::new(
        config.telegram_api_url.clone(),
        config.telegram_token.clone(),
        config.telegram_chat_id.clone(),
    );
    let client = PracticumClient::new(config.endpoint.clone(), config.practicum_token.clone());

    let mut poller = StatusPoller::new(
        client,
        notifier,
        Duration::from_secs(config.retry_period_secs),
        Utc::now().timestamp(),
    );

    // Run with graceful shutdown on Ctrl+C
    tokio::select! {
        _ = poller.run() => {}
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Received shutdown signal, stopping...");
        }
    }

    tracing::info!("Homework review bot stopped.");
    Ok(())
}
