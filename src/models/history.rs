use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::record::Record;

/// A previously selected record, snapshotted at selection time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub record: Record,
    pub selected_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(record: Record) -> Self {
        Self { record, selected_at: Utc::now() }
    }
}
