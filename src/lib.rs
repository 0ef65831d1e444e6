//! Homework bot - polls the Practicum review API and reports status changes
//!
//! Fetches homework review statuses on a fixed interval, renders a message
//! for the latest submission, and delivers it to a Telegram chat. Poll
//! failures are reported to the same chat, with identical consecutive
//! errors suppressed.

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod io;
pub mod notifier;
pub mod response;
pub mod status;
pub mod telegram;

pub use config::Config;
pub use error::{BotError, Result};

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::api::PracticumClient;
use crate::engine::Engine;
use crate::io::ReqwestHttpClient;
use crate::notifier::Notifier;
use crate::telegram::TelegramNotifier;

/// Run the bot with the given configuration
pub async fn run(config: Config) -> Result<()> {
    let http: Arc<dyn io::HttpClient> = Arc::new(ReqwestHttpClient::default());
    let cancel = CancellationToken::new();

    let client = PracticumClient::new(&config.practicum_token, Arc::clone(&http));
    let notifier: Arc<dyn Notifier> = Arc::new(TelegramNotifier::new(
        &config.telegram_token,
        &config.telegram_chat_id,
        Arc::clone(&http),
    ));

    let engine = Engine::new(client, notifier, config.poll_interval, cancel.clone());

    // Setup shutdown handler
    let cancel_for_signal = cancel.clone();
    tokio::spawn(async move {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to listen for ctrl-c");
        tracing::info!("Shutdown signal received");
        cancel_for_signal.cancel();
    });

    tracing::info!("Homework bot started");

    // Run the engine (blocks until cancelled)
    engine.run().await;

    tracing::info!("Homework bot stopped");

    Ok(())
}
