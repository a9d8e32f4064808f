//! Search behaviour settings

use crate::history::{DEFAULT_HISTORY_CAPACITY, DEFAULT_HISTORY_KEY};
use crate::models::SearchField;
use crate::search::DEFAULT_RESULT_LIMIT;
use crate::source::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};

/// Number of entries shown for an empty query
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;
/// Route prefix used when no selection sink is attached
pub const DEFAULT_DETAIL_ROUTE_PREFIX: &str = "/events";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Fields matched against the query, in index order
    pub fields: Vec<SearchField>,
    pub result_limit: usize,
    pub suggestion_limit: usize,
    pub history_capacity: usize,
    pub history_key: String,
    pub page: usize,
    pub page_size: usize,
    pub detail_route_prefix: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            fields: SearchField::ALL.to_vec(),
            result_limit: DEFAULT_RESULT_LIMIT,
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            history_key: DEFAULT_HISTORY_KEY.to_string(),
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
            detail_route_prefix: DEFAULT_DETAIL_ROUTE_PREFIX.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SearchConfig::default();
        assert_eq!(config.result_limit, 10);
        assert_eq!(config.suggestion_limit, 5);
        assert_eq!(config.history_capacity, 10);
        assert_eq!(config.page, 1);
        assert_eq!(config.page_size, 100);
        assert_eq!(config.history_key, "event-finder.search-history");
        assert_eq!(config.fields.len(), 4);
    }
}
