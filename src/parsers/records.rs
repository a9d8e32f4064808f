use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::deserializers::{parse_record_id, parse_timestamp};
use super::text::repair_mojibake;
use crate::models::Record;

const ID_KEYS: &[&str] = &["id", "_id", "eventId", "event_id", "ID"];
const TITLE_KEYS: &[&str] = &["title", "name", "eventName", "event_name", "Title"];
const DESCRIPTION_KEYS: &[&str] = &["description", "desc", "summary", "Description"];
const CATEGORY_KEYS: &[&str] = &["category", "categoryName", "category_name", "Category"];
const LOCATION_KEYS: &[&str] = &["location", "venue", "address", "Location"];
const START_KEYS: &[&str] =
    &["startTime", "start_time", "startDate", "start_date", "startsAt", "date"];

/// Envelope keys that may hold the record array in a page response
const ENVELOPE_KEYS: &[&str] = &["data", "items", "events", "results", "records"];

/// Nested object keys that name a category
const CATEGORY_OBJECT_KEYS: &[&str] = &["name", "title"];
/// Nested object keys joined into a location string
const LOCATION_OBJECT_KEYS: &[&str] = &["name", "address", "city"];

/// Parse a page response body into canonical records.
///
/// Accepts a bare array or an object carrying the array under one of the
/// usual envelope keys (one level of nesting, e.g. `{"data": {"items": []}}`).
/// Entries without a usable id are skipped and counted in the log.
///
/// # Errors
///
/// Returns an error if the body is not JSON or holds no record array.
pub fn parse_records(body: &str) -> Result<Vec<Record>> {
    let value: Value = serde_json::from_str(body).context("Failed to parse records JSON")?;

    let Some(items) = find_record_array(&value) else {
        bail!("Response contains no record array");
    };

    let mut records = Vec::with_capacity(items.len());
    let mut skipped = 0;

    for (position, item) in items.iter().enumerate() {
        match adapt_record(item) {
            Some(record) => records.push(record),
            None => {
                warn!(position, "skipping record without a usable id");
                skipped += 1;
            }
        }
    }

    debug!(records = records.len(), skipped, "parsed record page");

    Ok(records)
}

fn find_record_array(value: &Value) -> Option<&Vec<Value>> {
    match value {
        Value::Array(items) => Some(items),
        Value::Object(map) => {
            let envelopes = || ENVELOPE_KEYS.iter().filter_map(|key| map.get(*key));
            envelopes().find_map(Value::as_array).or_else(|| {
                envelopes().filter_map(Value::as_object).find_map(|inner| {
                    ENVELOPE_KEYS.iter().filter_map(|key| inner.get(*key)).find_map(Value::as_array)
                })
            })
        }
        _ => None,
    }
}

/// Convert one wire object into a [`Record`].
///
/// Returns `None` when the value is not an object or has no id. Missing or
/// non-string text fields are left empty rather than rejecting the record.
pub fn adapt_record(value: &Value) -> Option<Record> {
    let map = value.as_object()?;

    let id = first_value(map, ID_KEYS).and_then(parse_record_id)?;
    let title = first_value(map, TITLE_KEYS).and_then(text_value).unwrap_or_default();

    Some(Record {
        id,
        title,
        description: first_value(map, DESCRIPTION_KEYS).and_then(text_value),
        category: first_value(map, CATEGORY_KEYS)
            .and_then(|v| text_or_object(v, CATEGORY_OBJECT_KEYS, false)),
        location: first_value(map, LOCATION_KEYS)
            .and_then(|v| text_or_object(v, LOCATION_OBJECT_KEYS, true)),
        starts_at: first_value(map, START_KEYS).and_then(parse_timestamp),
    })
}

fn first_value<'a>(map: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().filter_map(|key| map.get(*key)).find(|v| !v.is_null())
}

fn text_value(value: &Value) -> Option<String> {
    let text = value.as_str()?.trim();
    if text.is_empty() {
        return None;
    }
    Some(repair_mojibake(text).into_owned())
}

/// Text from a string, or from the named keys of a nested object.
/// With `join_all`, every present key contributes ("Hall A, Hà Nội").
fn text_or_object(value: &Value, keys: &[&str], join_all: bool) -> Option<String> {
    if let Some(text) = text_value(value) {
        return Some(text);
    }

    let map = value.as_object()?;
    let mut parts = keys.iter().filter_map(|key| map.get(*key)).filter_map(text_value);

    if join_all {
        let joined = parts.collect::<Vec<_>>().join(", ");
        if joined.is_empty() { None } else { Some(joined) }
    } else {
        parts.next()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_parse_bare_array() {
        let records = parse_records(r#"[{"id":1,"title":"Jazz"},{"id":"2","title":"Rock"}]"#).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id.as_str(), "1");
        assert_eq!(records[1].title, "Rock");
    }

    #[test]
    fn test_parse_enveloped_array() {
        let body = r#"{"success":true,"data":[{"_id":"a1","name":"Gala Dinner"}]}"#;
        let records = parse_records(body).unwrap();
        assert_eq!(records[0].id.as_str(), "a1");
        assert_eq!(records[0].title, "Gala Dinner");
    }

    #[test]
    fn test_parse_nested_envelope() {
        let body = r#"{"data":{"items":[{"eventId":9,"eventName":"Expo"}],"total":1}}"#;
        let records = parse_records(body).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id.as_str(), "9");
    }

    #[test]
    fn test_parse_without_array_fails() {
        assert!(parse_records(r#"{"message":"ok"}"#).is_err());
        assert!(parse_records("not json").is_err());
    }

    #[test]
    fn test_records_without_id_are_skipped() {
        let body = r#"[{"title":"No id"},{"id":2,"title":"Has id"},"junk"]"#;
        let records = parse_records(body).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id.as_str(), "2");
    }

    #[test]
    fn test_missing_title_becomes_empty() {
        let record = adapt_record(&json!({"id": 3, "description": "Only a description"})).unwrap();
        assert_eq!(record.title, "");
        assert_eq!(record.description.as_deref(), Some("Only a description"));
    }

    #[test]
    fn test_nested_category_and_location() {
        let record = adapt_record(&json!({
            "id": 4,
            "title": "Fest",
            "category": {"_id": "c1", "name": "Music"},
            "venue": {"name": "Nhà hát Lớn", "city": "Hà Nội"}
        }))
        .unwrap();

        assert_eq!(record.category.as_deref(), Some("Music"));
        assert_eq!(record.location.as_deref(), Some("Nhà hát Lớn, Hà Nội"));
    }

    #[test]
    fn test_start_time_aliases() {
        let record =
            adapt_record(&json!({"id": 5, "title": "T", "startDate": "2025-11-02T09:41:20Z"}))
                .unwrap();
        assert!(record.starts_at.is_some());

        let record = adapt_record(&json!({"id": 6, "title": "T", "start_time": 1762076480016_i64}))
            .unwrap();
        assert!(record.starts_at.is_some());
    }

    #[test]
    fn test_null_alias_falls_through() {
        let record = adapt_record(&json!({"id": null, "_id": "x", "title": null, "name": "N"})).unwrap();
        assert_eq!(record.id.as_str(), "x");
        assert_eq!(record.title, "N");
    }

    #[test]
    fn test_text_fields_are_repaired() {
        let record = adapt_record(&json!({"id": 1, "title": "CafÃ© crÃ¨me"})).unwrap();
        assert_eq!(record.title, "Café crème");
    }
}
