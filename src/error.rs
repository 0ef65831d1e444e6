//! Error types for the homework bot

/// Errors that can occur while polling and notifying
#[derive(Debug, thiserror::Error)]
pub enum BotError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Endpoint unreachable: {0}")]
    EndpointUnreachable(String),

    #[error("Endpoint returned status {0}")]
    HttpStatusIncorrect(u16),

    #[error("Response is not valid JSON: {0}")]
    InvalidJsonTransform(String),

    #[error("API response is not a mapping: got {0}")]
    ApiResponseNotMapping(String),

    #[error("API response is missing required keys: {0}")]
    ApiResponseIncorrect(String),

    #[error("'homeworks' value is not a sequence: got {0}")]
    HomeworkValueIncorrect(String),

    #[error("Homework record has no 'homework_name' key")]
    HomeworkNameMissing,

    #[error("Unrecognized homework status: '{0}'")]
    UnrecognizedStatus(String),

    #[error("Notifier error: {0}")]
    Notifier(String),
}

/// Result type alias for bot operations
pub type Result<T> = std::result::Result<T, BotError>;
