//! Configuration from the process environment

use std::time::Duration;

const DEFAULT_POLL_INTERVAL_SECS: u64 = 600;

/// Bot configuration, loaded once at startup
#[derive(Debug, Clone)]
pub struct Config {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
    pub poll_interval: Duration,
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> crate::Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration from any name-to-value lookup
    pub fn from_lookup<F>(lookup: F) -> crate::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let practicum_token = require(&lookup, "PRACTICUM_TOKEN")?;
        let telegram_token = require(&lookup, "TELEGRAM_TOKEN")?;
        let telegram_chat_id = require(&lookup, "TELEGRAM_CHAT_ID")?;

        // A zero interval would poll in a tight loop, so it is rejected
        // together with unparsable values.
        let poll_interval_secs = match lookup("POLL_INTERVAL_SECS") {
            Some(value) => match value.parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(crate::BotError::Config(format!(
                        "POLL_INTERVAL_SECS must be a positive whole number of seconds, got '{}'",
                        value
                    )));
                }
            },
            None => DEFAULT_POLL_INTERVAL_SECS,
        };

        Ok(Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            poll_interval: Duration::from_secs(poll_interval_secs),
        })
    }
}

fn require<F>(lookup: &F, name: &str) -> crate::Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(crate::BotError::Config(format!(
            "{} environment variable is required",
            name
        ))),
    }
}
