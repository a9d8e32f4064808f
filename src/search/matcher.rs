//! Substring matching over an index of normalized records

use super::normalize::normalize;
use crate::models::{IndexedRecord, Record};

/// Default number of results returned for a non-empty query
pub const DEFAULT_RESULT_LIMIT: usize = 10;

/// Records whose normalized fields contain the normalized `query`.
///
/// Results keep index order and are truncated to `limit`. A query that is
/// empty after trimming matches nothing; callers show suggestions instead.
pub fn search<'a>(index: &'a [IndexedRecord], query: &str, limit: usize) -> Vec<&'a Record> {
    let Some(needle) = prepare_query(query) else {
        return Vec::new();
    };

    index
        .iter()
        .filter(|entry| entry.contains(&needle))
        .take(limit)
        .map(|entry| &entry.record)
        .collect()
}

/// Number of records matching `query`, before any limit is applied
pub fn count_matches(index: &[IndexedRecord], query: &str) -> usize {
    match prepare_query(query) {
        Some(needle) => index.iter().filter(|entry| entry.contains(&needle)).count(),
        None => 0,
    }
}

fn prepare_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(normalize(trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indexer::build_index;
    use crate::models::{Record, SearchField};

    fn sample_index() -> Vec<IndexedRecord> {
        let records = vec![
            Record::new(1, "Đêm Nhạc Trịnh").with_location("Hà Nội"),
            Record::new(2, "Workshop AI").with_category("Technology"),
            Record::new(3, "Jazz Night").with_description("Live nhạc jazz"),
            Record::new(4, "Startup Pitch").with_location("Đà Nẵng"),
        ];
        build_index(&records, &SearchField::ALL)
    }

    fn ids(results: &[&Record]) -> Vec<String> {
        results.iter().map(|r| r.id.to_string()).collect()
    }

    #[test]
    fn test_search_diacritic_insensitive() {
        let index = sample_index();
        assert_eq!(ids(&search(&index, "dem nhac", 10)), vec!["1"]);
    }

    #[test]
    fn test_search_matches_any_field_in_source_order() {
        let index = sample_index();
        // title of 1 and description of 3
        assert_eq!(ids(&search(&index, "NHAC", 10)), vec!["1", "3"]);
    }

    #[test]
    fn test_search_empty_query_returns_nothing() {
        let index = sample_index();
        assert!(search(&index, "", 10).is_empty());
        assert!(search(&index, "   \t", 10).is_empty());
    }

    #[test]
    fn test_search_truncates_to_limit() {
        let records: Vec<Record> = (0..25).map(|i| Record::new(i, format!("Concert {}", i))).collect();
        let index = build_index(&records, &SearchField::ALL);

        let results = search(&index, "concert", 10);
        assert_eq!(results.len(), 10);
        assert_eq!(results[0].id.as_str(), "0");
        assert_eq!(results[9].id.as_str(), "9");
        assert_eq!(count_matches(&index, "concert"), 25);
    }

    #[test]
    fn test_search_query_is_trimmed() {
        let index = sample_index();
        assert_eq!(ids(&search(&index, "  da nang  ", 10)), vec!["4"]);
    }

    #[test]
    fn test_search_respects_configured_fields() {
        let records = vec![Record::new(1, "Gala").with_location("Sài Gòn")];
        let index = build_index(&records, &[SearchField::Title]);
        assert!(search(&index, "sai gon", 10).is_empty());
        assert_eq!(search(&index, "gala", 10).len(), 1);
    }

    #[test]
    fn test_every_result_contains_query() {
        let index = sample_index();
        for query in ["a", "n", "nhac", "tech", "ha noi"] {
            let needle = normalize(query);
            let results = search(&index, query, usize::MAX);
            for record in &results {
                let haystack: String = SearchField::ALL
                    .iter()
                    .map(|&f| normalize(record.field(f).unwrap_or("")))
                    .collect::<Vec<_>>()
                    .join("\u{0}");
                assert!(haystack.contains(&needle), "{} should contain {}", record.id, query);
            }
            assert_eq!(results.len(), count_matches(&index, query));
        }
    }
}
