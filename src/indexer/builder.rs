//! Index builder for event records.
//!
//! Builds the normalized shadow copy of a record collection. Records missing
//! optional fields are kept; those fields index as empty strings and simply
//! never match a non-empty query.

use tracing::debug;

use crate::models::{IndexedRecord, Record, SearchField};

/// Build a search index over `records` for the given `fields`.
///
/// Output has the same length and order as the input.
///
/// # Examples
///
/// ```
/// use event_finder::build_index;
/// use event_finder::models::{Record, SearchField};
///
/// let records = vec![Record::new(1, "Đêm Nhạc"), Record::new(2, "Workshop AI")];
/// let index = build_index(&records, &SearchField::ALL);
/// assert_eq!(index.len(), 2);
/// assert_eq!(index[0].normalized(SearchField::Title), Some("dem nhac"));
/// ```
pub fn build_index(records: &[Record], fields: &[SearchField]) -> Vec<IndexedRecord> {
    let index: Vec<IndexedRecord> =
        records.iter().map(|record| IndexedRecord::new(record.clone(), fields)).collect();

    debug!(records = index.len(), fields = fields.len(), "built search index");

    index
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_index_preserves_length_and_order() {
        let records = vec![Record::new(3, "C"), Record::new(1, "A"), Record::new(2, "B")];
        let index = build_index(&records, &SearchField::ALL);

        let ids: Vec<&str> = index.iter().map(|e| e.record.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }

    #[test]
    fn test_missing_fields_normalize_to_empty() {
        let records = vec![Record::new(1, "Only Title")];
        let index = build_index(&records, &SearchField::ALL);

        assert_eq!(index[0].normalized(SearchField::Title), Some("only title"));
        assert_eq!(index[0].normalized(SearchField::Description), Some(""));
        assert_eq!(index[0].normalized(SearchField::Location), Some(""));
    }

    #[test]
    fn test_unconfigured_field_not_indexed() {
        let records = vec![Record::new(1, "Title").with_category("Music")];
        let index = build_index(&records, &[SearchField::Title]);

        assert_eq!(index[0].normalized(SearchField::Category), None);
    }

    #[test]
    fn test_empty_collection() {
        assert!(build_index(&[], &SearchField::ALL).is_empty());
    }
}
