//! Notification delivery.
//!
//! The polling loop talks to a [`Notifier`]; [`TelegramNotifier`] delivers
//! plain-text messages through the Telegram Bot API `sendMessage` method.
//! [`send_message`] is the loop-facing entry point: it logs and swallows any
//! delivery failure.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while delivering a notification.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// Always built from an error stripped of its URL, which carries the bot token.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Telegram rejected the message ({status}): {description}")]
    Rejected { status: u16, description: String },
}

/// A destination that can receive plain-text notifications.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver `text` to the configured destination.
    async fn send(&self, text: &str) -> Result<(), NotifyError>;

    /// Human-readable name for logs (e.g., "telegram").
    fn name(&self) -> &'static str;
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct TelegramResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

/// Telegram Bot API notifier bound to a single chat.
pub struct TelegramNotifier {
    client: reqwest::Client,
    api_url: String,
    token: String,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(api_url: impl Into<String>, token: impl Into<String>, chat_id: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: api_url.into(),
            token: token.into(),
            chat_id: chat_id.into(),
        }
    }

    fn send_message_url(&self) -> String {
        format!(
            "{}/bot{}/sendMessage",
            self.api_url.trim_end_matches('/'),
            self.token
        )
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, text: &str) -> Result<(), NotifyError> {
        let response = self
            .client
            .post(self.send_message_url())
            .json(&SendMessageRequest {
                chat_id: &self.chat_id,
                text,
            })
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        let status = response.status();
        // Telegram answers errors with a JSON body too; fall back to the status line.
        let body: Option<TelegramResponse> = response.json().await.ok();

        match body {
            Some(TelegramResponse { ok: true, .. }) if status.is_success() => Ok(()),
            Some(TelegramResponse { description, .. }) => Err(NotifyError::Rejected {
                status: status.as_u16(),
                description: description.unwrap_or_else(|| status.to_string()),
            }),
            None => Err(NotifyError::Rejected {
                status: status.as_u16(),
                description: status.to_string(),
            }),
        }
    }

    fn name(&self) -> &'static str {
        "telegram"
    }
}

/// Send `message` through `notifier`, swallowing any failure.
///
/// Returns `true` when the message was delivered.
pub async fn send_message(notifier: &dyn Notifier, message: &str) -> bool {
    match notifier.send(message).await {
        Ok(()) => {
            tracing::debug!(channel = notifier.name(), "Notification sent");
            true
        }
        Err(e) => {
            tracing::error!(channel = notifier.name(), error = %e, "Failed to send notification");
            false
        }
    }
}
