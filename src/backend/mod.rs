//! Blocking client for the external bill-splitting backend.
//!
//! The backend owns authoritative receipt parsing and split computation;
//! this client only moves payloads. Any non-2xx status collapses to a
//! uniform per-endpoint failure, which the screens surface as a retryable
//! error message.

use std::path::Path;

use reqwest::blocking::{multipart, Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::core::services::{EqualSplitRequest, ItemSplitRequest};
use crate::domain::{BillItem, SplitResult};

/// Origin the backend listens on when nothing else is configured.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Items and optional tax recovered from a receipt photo.
#[derive(Debug, Clone, Deserialize)]
pub struct ParsedBill {
    pub items: Vec<BillItem>,
    #[serde(default)]
    pub tax: Option<f64>,
}

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("backend request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("backend returned status {0}")]
    Status(u16),
    #[error("could not read the upload: {0}")]
    Upload(#[from] std::io::Error),
}

pub struct BackendClient {
    base_url: String,
    http: Client,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Uploads a receipt photo for authoritative parsing.
    pub fn parse_bill(&self, photo: &Path) -> Result<ParsedBill, BackendError> {
        let url = self.endpoint("/parse-bill");
        debug!(%url, photo = %photo.display(), "uploading receipt");
        let form = multipart::Form::new().file("file", photo)?;
        let response = self.http.post(url).multipart(form).send()?;
        decode(response)
    }

    /// Requests the authoritative equal split.
    pub fn split_equal(&self, request: &EqualSplitRequest) -> Result<SplitResult, BackendError> {
        let url = self.endpoint("/split-equal");
        debug!(%url, people = request.people_count, "requesting equal split");
        let response = self.http.post(url).json(request).send()?;
        decode(response)
    }

    /// Requests the authoritative by-item split.
    pub fn split_by_item(&self, request: &ItemSplitRequest) -> Result<SplitResult, BackendError> {
        let url = self.endpoint("/split-by-item");
        debug!(%url, items = request.items.len(), "requesting by-item split");
        let response = self.http.post(url).json(request).send()?;
        decode(response)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn decode<T: DeserializeOwned>(response: Response) -> Result<T, BackendError> {
    let status = response.status();
    if !status.is_success() {
        return Err(BackendError::Status(status.as_u16()));
    }
    Ok(response.json()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_duplicate_slashes() {
        let client = BackendClient::new("http://localhost:8000/");
        assert_eq!(
            client.endpoint("/parse-bill"),
            "http://localhost:8000/parse-bill"
        );
    }

    #[test]
    fn parsed_bill_tolerates_a_missing_tax() {
        let json = r#"{"items":[{"name":"Soda","price":2.5,"quantity":1}]}"#;
        let parsed: ParsedBill = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.items.len(), 1);
        assert!(parsed.tax.is_none());
    }
}
