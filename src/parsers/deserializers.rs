use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::models::RecordId;

/// Interpret a JSON value as a timestamp: integers are Unix milliseconds,
/// strings are RFC 3339
pub fn parse_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::Number(n) => n.as_i64().and_then(DateTime::from_timestamp_millis),
        Value::String(s) => s.trim().parse::<DateTime<Utc>>().ok(),
        _ => None,
    }
}

/// Interpret a JSON value as a record id; numbers keep their decimal form
pub fn parse_record_id(value: &Value) -> Option<RecordId> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() { None } else { Some(RecordId::new(trimmed)) }
        }
        Value::Number(n) => Some(RecordId::new(n.to_string())),
        _ => None,
    }
}
