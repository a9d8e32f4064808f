//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;

/// Builder for a workspace holding an event listing and a data directory
pub struct FixtureBuilder {
    temp_dir: TempDir,
    events: Vec<Value>,
    envelope: Option<String>,
}

impl FixtureBuilder {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir, events: Vec::new(), envelope: None }
    }

    /// Add events built with [`EventBuilder`]
    pub fn with_events(mut self, events: &[EventBuilder]) -> Self {
        self.events.extend(events.iter().map(EventBuilder::to_json));
        self
    }

    /// Add a raw JSON event
    pub fn with_raw_event(mut self, event: Value) -> Self {
        self.events.push(event);
        self
    }

    /// Wrap the listing as `{ "<key>": [...] }` instead of a bare array
    pub fn with_envelope(mut self, key: &str) -> Self {
        self.envelope = Some(key.to_string());
        self
    }

    /// Write the listing and return the fixture
    pub fn build(self) -> Fixture {
        let listing = Value::Array(self.events);
        let body = match self.envelope {
            Some(key) => json!({ key: listing }),
            None => listing,
        };

        let events_path = self.temp_dir.path().join("events.json");
        fs::write(&events_path, body.to_string()).expect("Failed to write events.json");

        let data_dir = self.temp_dir.path().join("data");
        fs::create_dir(&data_dir).expect("Failed to create data dir");

        Fixture { temp_dir: self.temp_dir, events_path, data_dir }
    }
}

impl Default for FixtureBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A written fixture; files live as long as this value
pub struct Fixture {
    temp_dir: TempDir,
    pub events_path: PathBuf,
    pub data_dir: PathBuf,
}

impl Fixture {
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of a key's file in the data directory
    pub fn data_file(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", key))
    }
}

/// Builder for one listing entry in the backend's JSON shape
pub struct EventBuilder {
    id: Value,
    title: String,
    description: Option<String>,
    category: Option<String>,
    location: Option<String>,
    start_time: Option<String>,
}

impl EventBuilder {
    pub fn new(id: u64, title: &str) -> Self {
        Self {
            id: json!(id),
            title: title.to_string(),
            description: None,
            category: None,
            location: None,
            start_time: None,
        }
    }

    pub fn with_string_id(mut self, id: &str) -> Self {
        self.id = json!(id);
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    pub fn with_location(mut self, location: &str) -> Self {
        self.location = Some(location.to_string());
        self
    }

    pub fn with_start_time(mut self, start_time: &str) -> Self {
        self.start_time = Some(start_time.to_string());
        self
    }

    pub fn to_json(&self) -> Value {
        let mut event = json!({ "id": self.id, "title": self.title });
        if let Some(description) = &self.description {
            event["description"] = json!(description);
        }
        if let Some(category) = &self.category {
            event["category"] = json!({ "name": category });
        }
        if let Some(location) = &self.location {
            event["location"] = json!(location);
        }
        if let Some(start_time) = &self.start_time {
            event["startTime"] = json!(start_time);
        }
        event
    }
}

/// The listing used across scenarios
pub fn sample_events() -> Vec<EventBuilder> {
    vec![
        EventBuilder::new(1, "Đêm Nhạc Trịnh Công Sơn")
            .with_category("Âm nhạc")
            .with_location("Nhà hát Lớn Hà Nội"),
        EventBuilder::new(2, "Workshop Lập Trình Rust")
            .with_description("Học Rust cho người mới bắt đầu")
            .with_category("Công nghệ"),
        EventBuilder::new(3, "Lễ hội Hoa Đà Lạt").with_location("Đà Lạt"),
        EventBuilder::new(4, "Triển lãm Tranh").with_category("Nghệ thuật"),
        EventBuilder::new(5, "Jazz Night").with_location("Sài Gòn"),
        EventBuilder::new(6, "Marathon Đà Nẵng").with_category("Thể thao"),
    ]
}
