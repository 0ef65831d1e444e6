//! Shape validation for homework-status API responses

use serde_json::Value;

/// Normalize and validate a raw API response, returning the homework list
///
/// Some API revisions wrap the payload in a one-element sequence, so a
/// sequence is first replaced by its head before validation.
pub fn check_response(response: Value) -> crate::Result<Vec<Value>> {
    let response = match response {
        Value::Array(mut items) if !items.is_empty() => items.swap_remove(0),
        other => other,
    };

    let mut map = match response {
        Value::Object(map) => map,
        other => {
            tracing::error!(
                "API response is not a mapping: got {}",
                value_type_name(&other)
            );
            return Err(crate::BotError::ApiResponseNotMapping(
                value_type_name(&other).to_string(),
            ));
        }
    };

    let mut missing = Vec::new();
    if !map.contains_key("current_date") {
        missing.push("current_date");
    }
    if !map.contains_key("homeworks") {
        missing.push("homeworks");
    }
    if !missing.is_empty() {
        let detail = missing.join(", ");
        tracing::error!("API response is missing required keys: {}", detail);
        return Err(crate::BotError::ApiResponseIncorrect(detail));
    }

    match map.remove("homeworks") {
        Some(Value::Array(homeworks)) => Ok(homeworks),
        Some(other) => {
            tracing::error!(
                "'homeworks' value is not a sequence: got {}",
                value_type_name(&other)
            );
            Err(crate::BotError::HomeworkValueIncorrect(
                value_type_name(&other).to_string(),
            ))
        }
        None => Err(crate::BotError::ApiResponseIncorrect(
            "homeworks".to_string(),
        )),
    }
}

fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
