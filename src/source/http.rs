use std::time::Duration;

use reqwest::blocking::Client;

use super::{FetchError, RecordSource, validate_page};
use crate::models::Record;
use crate::parsers::parse_records;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Records served by the events REST endpoint.
///
/// Requests `GET {endpoint}?page={page}&pageSize={page_size}`.
#[derive(Debug, Clone)]
pub struct HttpRecordSource {
    endpoint: String,
    client: Client,
}

impl HttpRecordSource {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { endpoint: endpoint.into(), client })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl RecordSource for HttpRecordSource {
    fn fetch_page(&self, page: usize, page_size: usize) -> Result<Vec<Record>, FetchError> {
        validate_page(page, page_size)?;

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("page", page), ("pageSize", page_size)])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text()?;
        parse_records(&body).map_err(|e| FetchError::Decode(format!("{:#}", e)))
    }

    fn describe(&self) -> String {
        format!("endpoint {}", self.endpoint)
    }
}
