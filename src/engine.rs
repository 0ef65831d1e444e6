//! Engine: drives the poll loop and dispatches notifications

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tokio_util::sync::CancellationToken;

use crate::api::{now_epoch_secs, PracticumClient};
use crate::notifier::Notifier;
use crate::response::check_response;
use crate::status::parse_status;

/// Loop state carried between poll iterations
#[derive(Debug, Default)]
pub struct PollState {
    /// Timestamp the next request asks the API to report changes from
    pub cursor: Option<i64>,
    /// Last error text delivered to the chat, for duplicate suppression
    pub last_error: Option<String>,
}

/// The engine polls the homework API and reports changes to the notifier
pub struct Engine {
    client: PracticumClient,
    notifier: Arc<dyn Notifier>,
    poll_interval: Duration,
    cancel: CancellationToken,
}

impl Engine {
    pub fn new(
        client: PracticumClient,
        notifier: Arc<dyn Notifier>,
        poll_interval: Duration,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            client,
            notifier,
            poll_interval,
            cancel,
        }
    }

    /// Poll until the cancellation token is triggered
    ///
    /// Errors from a poll iteration are reported and never end the loop.
    pub async fn run(&self) {
        let mut state = PollState {
            cursor: Some(now_epoch_secs()),
            last_error: None,
        };

        tracing::info!("Homework poll loop started");

        loop {
            if let Err(e) = self.poll_once(&mut state).await {
                self.report_failure(&mut state, &e).await;
            }

            tokio::select! {
                _ = tokio::time::sleep(self.poll_interval) => {}
                _ = self.cancel.cancelled() => {
                    tracing::debug!("Poll loop cancelled");
                    break;
                }
            }
        }
    }

    /// One poll iteration: fetch, validate, notify on a status change
    pub async fn poll_once(&self, state: &mut PollState) -> crate::Result<()> {
        let response = self.client.get_api_answer(state.cursor).await?;

        // The cursor moves before validation. A response without a usable
        // current_date clears it, and the next request falls back to "now".
        state.cursor = response.get("current_date").and_then(Value::as_i64);

        let homeworks = check_response(response)?;

        match homeworks.first() {
            Some(homework) => {
                let message = parse_status(homework)?;
                self.dispatch(&message).await;
            }
            None => tracing::debug!("No new homework statuses"),
        }

        Ok(())
    }

    /// Log a poll failure and notify the chat once per distinct message
    pub async fn report_failure(&self, state: &mut PollState, error: &crate::BotError) {
        let message = format!("Сбой в работе программы: {}", error);
        tracing::error!("{}", message);

        if state.last_error.as_deref() == Some(message.as_str()) {
            tracing::debug!("Suppressing duplicate error notification");
            return;
        }

        state.last_error = Some(message.clone());
        self.dispatch(&message).await;
    }

    /// Deliver a message, logging and swallowing delivery failures
    async fn dispatch(&self, message: &str) {
        if let Err(e) = self.notifier.notify(message).await {
            tracing::error!(
                "Notification via '{}' failed: {}",
                self.notifier.type_name(),
                e
            );
        }
    }
}
