use std::time::Duration;

use review_common::error::ReviewError;
use review_engine::{check_response, parse_status};
use review_notifier::{Notifier, send_message};

use crate::client::ReviewSource;

/// What a single successful poll did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// A new message was delivered.
    Notified,
    /// The message equals the last one sent; nothing was delivered.
    Unchanged,
    /// A new message was produced but delivery failed.
    DeliveryFailed,
}

/// Mutable state carried between iterations. Never persisted.
#[derive(Debug, Clone, Default)]
pub struct LoopState {
    /// Text of the last message that was delivered.
    pub last_message: String,
}

/// Polls the review API on a fixed period and relays status changes.
pub struct StatusPoller<S, N> {
    source: S,
    notifier: N,
    retry_period: Duration,
    /// Cursor sent as `from_date`. Fixed at startup, see `poll_once`.
    timestamp: i64,
    state: LoopState,
}

impl<S, N> StatusPoller<S, N>
where
    S: ReviewSource,
    N: Notifier,
{
    pub fn new(source: S, notifier: N, retry_period: Duration, timestamp: i64) -> Self {
        Self {
            source,
            notifier,
            retry_period,
            timestamp,
            state: LoopState::default(),
        }
    }

    /// Start the polling loop. Runs until the task is dropped.
    pub async fn run(&mut self) {
        tracing::info!(
            from_date = self.timestamp,
            retry_period_secs = self.retry_period.as_secs(),
            notifier = self.notifier.name(),
            "Status poller started"
        );

        loop {
            self.run_iteration().await;
            tokio::time::sleep(self.retry_period).await;
        }
    }

    /// Run one poll and log its failure, if any. Never fails.
    pub async fn run_iteration(&mut self) -> Option<PollOutcome> {
        match self.poll_once().await {
            Ok(outcome) => Some(outcome),
            Err(e) => {
                tracing::error!(error = %e, "Program failure");
                None
            }
        }
    }

    /// Fetch, validate and extract the latest status, notifying on change.
    ///
    /// The cursor is not moved forward from the response's `current_date`:
    /// every poll asks for the same window starting at process start.
    pub async fn poll_once(&mut self) -> Result<PollOutcome, ReviewError> {
        let payload = self.source.get_api_answer(self.timestamp).await?;
        let response = check_response(payload)?;

        tracing::debug!(
            from_date = self.timestamp,
            current_date = ?response.current_date_secs(),
            homeworks = response.homeworks.len(),
            "Received homework statuses"
        );

        let Some(homework) = response.latest() else {
            tracing::error!("No homeworks in the API response");
            return Err(ReviewError::EmptyHomeworks);
        };

        let message = parse_status(homework)?;

        if message == self.state.last_message {
            tracing::debug!("Homework status unchanged");
            return Ok(PollOutcome::Unchanged);
        }

        if send_message(&self.notifier, &message).await {
            self.state.last_message = message;
            Ok(PollOutcome::Notified)
        } else {
            Ok(PollOutcome::DeliveryFailed)
        }
    }

    /// Text of the last delivered message.
    pub fn last_message(&self) -> &str {
        &self.state.last_message
    }

    /// Cursor sent with every request.
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }
}
