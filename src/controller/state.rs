/// What the dropdown is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    /// Dropdown closed
    Idle,
    /// Dropdown open with an empty query: history or sample suggestions
    Suggesting,
    /// Dropdown open with a non-empty query: matcher results
    Searching,
}

impl SearchState {
    /// State for the current query and dropdown visibility
    pub fn for_query(query: &str, open: bool) -> Self {
        if !open {
            SearchState::Idle
        } else if query.trim().is_empty() {
            SearchState::Suggesting
        } else {
            SearchState::Searching
        }
    }

    pub fn is_open(self) -> bool {
        !matches!(self, SearchState::Idle)
    }
}
