use super::record::{Record, SearchField};
use crate::search::normalize::normalize_opt;

/// A record plus the normalized text of each configured search field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedRecord {
    pub record: Record,
    pub normalized: Vec<(SearchField, String)>,
}

impl IndexedRecord {
    pub fn new(record: Record, fields: &[SearchField]) -> Self {
        let normalized =
            fields.iter().map(|&field| (field, normalize_opt(record.field(field)))).collect();
        Self { record, normalized }
    }

    /// Normalized text for `field`, `None` if the field was not indexed
    pub fn normalized(&self, field: SearchField) -> Option<&str> {
        self.normalized.iter().find(|(f, _)| *f == field).map(|(_, text)| text.as_str())
    }

    /// Whether any indexed field contains an already-normalized needle
    pub fn contains(&self, needle: &str) -> bool {
        self.normalized.iter().any(|(_, text)| text.contains(needle))
    }
}
