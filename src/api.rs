//! Client for the Practicum homework-status endpoint

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::Value;

use crate::io::HttpClient;

const ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Client for the homework review-status API
pub struct PracticumClient {
    token: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for PracticumClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PracticumClient")
            .field("endpoint", &ENDPOINT)
            .finish()
    }
}

impl PracticumClient {
    pub fn new(token: &str, http: Arc<dyn HttpClient>) -> Self {
        Self {
            token: token.to_string(),
            http,
        }
    }

    /// Fetch homework statuses changed since `from_date`
    ///
    /// `None` and zero both mean "from now".
    pub async fn get_api_answer(&self, from_date: Option<i64>) -> crate::Result<Value> {
        let from_date = from_date
            .filter(|&timestamp| timestamp != 0)
            .unwrap_or_else(now_epoch_secs);
        let url = format!("{}?from_date={}", ENDPOINT, from_date);
        let auth = format!("OAuth {}", self.token);

        tracing::debug!("Requesting homework statuses with from_date={}", from_date);

        let response = match self.http.get(&url, &[("Authorization", &auth)]).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("Homework endpoint is unreachable: {}", e);
                return Err(e);
            }
        };

        if response.status != 200 {
            tracing::error!("Homework endpoint returned status {}", response.status);
            return Err(crate::BotError::HttpStatusIncorrect(response.status));
        }

        match serde_json::from_str(&response.body) {
            Ok(value) => Ok(value),
            Err(e) => {
                tracing::error!("Homework endpoint body is not valid JSON: {}", e);
                Err(crate::BotError::InvalidJsonTransform(e.to_string()))
            }
        }
    }
}

pub(crate) fn now_epoch_secs() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64
}
