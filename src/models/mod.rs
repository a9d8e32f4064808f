//! Data models for event search.
//!
//! - [`Record`] - Canonical searchable item, produced by the record adapter
//! - [`IndexedRecord`] - A record with its normalized search fields
//! - [`HistoryEntry`] - Snapshot of a selected record for the recent-selections list

pub mod history;
pub mod record;
pub mod search;

pub use history::HistoryEntry;
pub use record::{Record, RecordId, SearchField};
pub use search::IndexedRecord;
