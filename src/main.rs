//! Homework bot CLI
//!
//! Command-line interface for the homework status notification service.

use clap::Parser;
use homework_bot::Config;
use tracing::Level;

#[derive(Parser)]
#[command(name = "homework-bot")]
#[command(about = "Polls the Practicum homework review API and reports status changes to Telegram")]
#[command(version)]
struct Args {
    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: Level,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .init();

    tracing::debug!(
        "Parsed command line arguments: log_level={:?}",
        args.log_level
    );

    // A .env file is honored when present, but is not required
    dotenvy::dotenv().ok();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Refusing to start: {}", e);
            return Err(e.into());
        }
    };

    tracing::info!("Starting homework bot");
    tracing::debug!(
        "Polling every {} seconds for chat {}",
        config.poll_interval.as_secs(),
        config.telegram_chat_id
    );

    homework_bot::run(config).await?;

    Ok(())
}
