use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use super::{FetchError, RecordSource, validate_page};
use crate::models::Record;
use crate::parsers::parse_records;
use crate::utils::validate_file_size;

/// Records read from a local JSON file, in any shape the record adapter accepts
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, message: impl std::fmt::Display) -> FetchError {
        FetchError::Io { path: self.path.display().to_string(), message: message.to_string() }
    }

    fn read_all(&self) -> Result<Vec<Record>, FetchError> {
        // Open first and validate the handle to avoid TOCTOU on the size check
        let mut file = File::open(&self.path).map_err(|e| self.io_error(e))?;
        validate_file_size(&file, &self.path).map_err(|e| self.io_error(e))?;

        let mut body = String::new();
        file.read_to_string(&mut body).map_err(|e| self.io_error(e))?;

        parse_records(&body).map_err(|e| FetchError::Decode(format!("{:#}", e)))
    }
}

impl RecordSource for JsonFileSource {
    fn fetch_page(&self, page: usize, page_size: usize) -> Result<Vec<Record>, FetchError> {
        validate_page(page, page_size)?;
        let records = self.read_all()?;
        Ok(records.into_iter().skip((page - 1).saturating_mul(page_size)).take(page_size).collect())
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn write_records(dir: &TempDir, count: usize) -> PathBuf {
        let items: Vec<String> =
            (1..=count).map(|i| format!(r#"{{"id":{},"title":"Event {}"}}"#, i, i)).collect();
        let path = dir.path().join("events.json");
        fs::write(&path, format!("[{}]", items.join(","))).unwrap();
        path
    }

    #[test]
    fn test_first_page() {
        let dir = TempDir::new().unwrap();
        let source = JsonFileSource::new(write_records(&dir, 5));

        let records = source.fetch_page(1, 100).unwrap();
        assert_eq!(records.len(), 5);
    }

    #[test]
    fn test_later_page() {
        let dir = TempDir::new().unwrap();
        let source = JsonFileSource::new(write_records(&dir, 5));

        let records = source.fetch_page(2, 2).unwrap();
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "4"]);
        assert!(source.fetch_page(4, 2).unwrap().is_empty());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let source = JsonFileSource::new("/nonexistent/events.json");
        assert!(matches!(source.fetch_page(1, 10), Err(FetchError::Io { .. })));
    }

    #[test]
    fn test_malformed_file_is_decode_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("events.json");
        fs::write(&path, "{ not json").unwrap();

        let source = JsonFileSource::new(path);
        assert!(matches!(source.fetch_page(1, 10), Err(FetchError::Decode(_))));
    }

    #[test]
    fn test_zero_page_rejected() {
        let source = JsonFileSource::new("/unused");
        assert!(matches!(source.fetch_page(0, 10), Err(FetchError::InvalidPage { .. })));
    }
}
