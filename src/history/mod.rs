//! Recently selected records, persisted across sessions
//!
//! # Error Handling Strategy
//!
//! - **Corrupted slot**: unparsable JSON is logged and treated as an empty
//!   history. The slot is left as-is and overwritten by the next write.
//! - **Write failures**: returned to the caller. The in-memory list is already
//!   updated, so the current session keeps working.

use std::collections::HashSet;

use anyhow::{Context, Result};
use tracing::warn;

use crate::models::{HistoryEntry, Record};
use crate::storage::KeyValueStore;

/// Default storage key for the recent-selections list
pub const DEFAULT_HISTORY_KEY: &str = "event-finder.search-history";
/// Default maximum number of remembered selections
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// Bounded, deduplicated, most-recent-first list of selected records
pub struct HistoryStore {
    store: Box<dyn KeyValueStore>,
    key: String,
    capacity: usize,
    entries: Vec<HistoryEntry>,
}

impl HistoryStore {
    /// Load history from `store`, starting empty if the slot is missing or corrupt
    pub fn load(store: Box<dyn KeyValueStore>, key: impl Into<String>, capacity: usize) -> Self {
        let key = key.into();
        let entries = match store.get(&key) {
            Ok(Some(raw)) => parse_entries(&raw, capacity, &key),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(key = %key, error = %e, "failed to read search history, starting empty");
                Vec::new()
            }
        };

        Self { store, key, capacity, entries }
    }

    /// Move `record` to the front, dropping any older entry with the same id
    pub fn record(&mut self, record: Record) -> Result<()> {
        self.entries.retain(|entry| entry.record.id != record.id);
        self.entries.insert(0, HistoryEntry::new(record));
        self.entries.truncate(self.capacity);
        self.persist()
    }

    /// Entries, most recent first
    pub fn list(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Forget every entry, in memory and in storage
    pub fn clear(&mut self) -> Result<()> {
        self.entries.clear();
        self.store.remove(&self.key).context("Failed to clear search history")
    }

    fn persist(&mut self) -> Result<()> {
        let json =
            serde_json::to_string(&self.entries).context("Failed to serialize search history")?;
        self.store.set(&self.key, &json).context("Failed to save search history")
    }
}

fn parse_entries(raw: &str, capacity: usize, key: &str) -> Vec<HistoryEntry> {
    let parsed: Vec<HistoryEntry> = match serde_json::from_str(raw) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(key = %key, error = %e, "discarding malformed search history");
            return Vec::new();
        }
    };

    // Hand-edited or older data may repeat ids; the first occurrence is the newest
    let mut seen = HashSet::new();
    let mut entries: Vec<HistoryEntry> =
        parsed.into_iter().filter(|entry| seen.insert(entry.record.id.clone())).collect();
    entries.truncate(capacity);
    entries
}
