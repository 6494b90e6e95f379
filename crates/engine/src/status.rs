//! Status extractor — turns a homework record into a notification message.

use serde::Deserialize;
use serde_json::Value;

use review_common::error::ReviewError;
use review_common::types::{HOMEWORK_NAME_KEY, STATUS_KEY, Verdict};

/// Build the notification text for a single homework record.
///
/// Fails with [`ReviewError::KeyAbsence`] when the record has no name and
/// with [`ReviewError::UnknownVerdict`] when its status is not recognized.
pub fn parse_status(homework: &Value) -> Result<String, ReviewError> {
    let Some(name) = homework.get(HOMEWORK_NAME_KEY) else {
        tracing::error!("Homework record has no name");
        return Err(ReviewError::KeyAbsence);
    };

    let status = homework.get(STATUS_KEY);
    let Some(verdict) = status.and_then(|s| Verdict::deserialize(s).ok()) else {
        tracing::warn!(status = ?status, "Unexpected homework status");
        return Err(ReviewError::UnknownVerdict);
    };

    Ok(format_message(&display_name(name), verdict))
}

/// Notification text for a homework name and verdict.
pub fn format_message(name: &str, verdict: Verdict) -> String {
    format!(
        "Изменился статус проверки работы \"{}\". {}",
        name,
        verdict.text()
    )
}

// Names are strings in practice; anything else is shown as its JSON form.
fn display_name(name: &Value) -> String {
    match name {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
