//! Record sources: where the searchable collection comes from
//!
//! A source answers one paged request. The controller asks for a single page
//! large enough to cover the practical maximum and treats it as the whole
//! collection for the session.

pub mod file;
pub mod http;

use thiserror::Error;

pub use file::JsonFileSource;
pub use http::HttpRecordSource;

use crate::models::Record;

/// Page number requested on load (pages are 1-based)
pub const DEFAULT_PAGE: usize = 1;
/// Page size requested on load
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Failure to obtain a page of records
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("failed to read {path}: {message}")]
    Io { path: String, message: String },
    #[error("invalid record data: {0}")]
    Decode(String),
    #[error("invalid page request: page {page}, size {page_size}")]
    InvalidPage { page: usize, page_size: usize },
}

/// A paged collection of records
pub trait RecordSource {
    /// Fetch page `page` (1-based) of at most `page_size` records
    fn fetch_page(&self, page: usize, page_size: usize) -> Result<Vec<Record>, FetchError>;

    /// Short description for log messages
    fn describe(&self) -> String;
}

impl<S: RecordSource + ?Sized> RecordSource for Box<S> {
    fn fetch_page(&self, page: usize, page_size: usize) -> Result<Vec<Record>, FetchError> {
        (**self).fetch_page(page, page_size)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

pub(crate) fn validate_page(page: usize, page_size: usize) -> Result<(), FetchError> {
    if page == 0 || page_size == 0 {
        return Err(FetchError::InvalidPage { page, page_size });
    }
    Ok(())
}
