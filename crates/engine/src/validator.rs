//! Response validator — checks the shape of a homework status payload.
//!
//! Checks run in a fixed order and stop at the first violation:
//! 1. The payload is a JSON object
//! 2. Both `homeworks` and `current_date` keys are present
//! 3. `homeworks` is a JSON array

use serde_json::Value;

use review_common::error::ReviewError;
use review_common::types::{CURRENT_DATE_KEY, HOMEWORKS_KEY, ReviewResponse};

/// Validate a raw API payload and split it into its two known fields.
pub fn check_response(response: Value) -> Result<ReviewResponse, ReviewError> {
    let mut map = match response {
        Value::Object(map) => map,
        other => {
            tracing::error!(
                kind = json_kind(&other),
                "API response is not a JSON object"
            );
            return Err(ReviewError::WrongResponseDataType);
        }
    };

    for key in [HOMEWORKS_KEY, CURRENT_DATE_KEY] {
        if !map.contains_key(key) {
            tracing::error!(key, "Key is missing from the API response");
            return Err(ReviewError::KeyAbsence);
        }
    }

    let current_date = map.remove(CURRENT_DATE_KEY).unwrap_or(Value::Null);
    let homeworks = match map.remove(HOMEWORKS_KEY) {
        Some(Value::Array(homeworks)) => homeworks,
        other => {
            tracing::error!(
                kind = other.as_ref().map_or("missing", json_kind),
                "Value under the homeworks key is not a list"
            );
            return Err(ReviewError::WrongHomeworkDataType);
        }
    };

    Ok(ReviewResponse {
        homeworks,
        current_date,
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
