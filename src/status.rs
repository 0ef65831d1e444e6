//! Homework review statuses and notification text

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

/// Review status of a homework submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    /// The fixed verdict phrase shown to the user for this status
    pub fn verdict(&self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            HomeworkStatus::Reviewing => "Работа взята на проверку ревьюером.",
            HomeworkStatus::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

impl fmt::Display for HomeworkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HomeworkStatus::Approved => write!(f, "approved"),
            HomeworkStatus::Reviewing => write!(f, "reviewing"),
            HomeworkStatus::Rejected => write!(f, "rejected"),
        }
    }
}

impl FromStr for HomeworkStatus {
    type Err = crate::BotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approved" => Ok(HomeworkStatus::Approved),
            "reviewing" => Ok(HomeworkStatus::Reviewing),
            "rejected" => Ok(HomeworkStatus::Rejected),
            other => Err(crate::BotError::UnrecognizedStatus(other.to_string())),
        }
    }
}

/// Render the notification text for one homework record
pub fn parse_status(homework: &Value) -> crate::Result<String> {
    let name = match homework.get("homework_name").and_then(Value::as_str) {
        Some(name) => name,
        None => {
            tracing::error!("Homework record has no 'homework_name' key");
            return Err(crate::BotError::HomeworkNameMissing);
        }
    };

    let raw_status = homework.get("status").and_then(Value::as_str).unwrap_or("");
    let status = match raw_status.parse::<HomeworkStatus>() {
        Ok(status) => status,
        Err(e) => {
            tracing::error!("{}", e);
            return Err(e);
        }
    };

    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        name,
        status.verdict()
    ))
}
