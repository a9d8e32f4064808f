//! Event Finder - Diacritic-insensitive autocomplete search over event listings
//!
//! This library provides the search pipeline behind an event autocomplete box:
//!
//! - Adapting heterogeneous event JSON into a canonical [`models::Record`]
//! - Folding case and diacritics (`"Đà Lạt"` matches `"da lat"`)
//! - Building a normalized index once per loaded collection
//! - Substring matching across title, description, category and location
//! - A bounded, persisted list of recently selected events
//! - A controller that decides what the dropdown shows and handles selection
//!
//! # Example
//!
//! ```
//! use event_finder::config::SearchConfig;
//! use event_finder::controller::SearchController;
//! use event_finder::models::Record;
//! use event_finder::storage::MemoryStore;
//!
//! let mut controller = SearchController::new(SearchConfig::default(), Box::new(MemoryStore::new()));
//! controller.set_records(vec![Record::new(1, "Đêm Nhạc Trịnh"), Record::new(2, "Workshop AI")]);
//!
//! controller.set_query("dem nhac");
//! let titles: Vec<&str> = controller.options().iter().map(|r| r.title.as_str()).collect();
//! assert_eq!(titles, vec!["Đêm Nhạc Trịnh"]);
//! ```

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod controller;
pub mod history;
pub mod indexer;
pub mod models;
pub mod parsers;
pub mod search;
pub mod source;
pub mod storage;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use clipboard::copy_to_clipboard;
pub use controller::{SearchController, SearchState, SelectionOutcome};
pub use indexer::build_index;
pub use models::{Record, RecordId};
pub use search::{normalize, search};
pub use utils::detail_path;
