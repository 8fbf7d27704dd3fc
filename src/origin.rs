//! Origin Client
//!
//! Fetches whole collections from the remote origin service.
//!
//! Each record kind has a fixed endpoint path relative to the configured
//! base URL. The client performs the network call and decodes the JSON
//! body — persisting and caching the result is the store's job, not ours.

use std::time::Duration;

use tracing::debug;

use crate::error::{Result, StrataError};
use crate::model::Record;

/// HTTP client for the remote origin
#[derive(Debug, Clone)]
pub struct OriginClient {
    http: reqwest::Client,
    base_url: String,
}

impl OriginClient {
    /// Create a client for the given base URL with a per-request timeout
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| StrataError::Config(format!("origin client: {e}")))?;

        let base_url: String = base_url.into();
        let base_url = base_url.trim_end_matches('/').to_string();

        Ok(Self { http, base_url })
    }

    /// Fetch the full collection for a record kind
    ///
    /// Returns:
    /// - `Err(OriginUnavailable)` — transport failure, timeout, or non-2xx
    /// - `Err(Decode)` — response body is not a valid collection
    pub async fn fetch<T: Record>(&self) -> Result<Vec<T>> {
        let url = format!("{}{}", self.base_url, T::KIND.origin_path());
        debug!(kind = %T::KIND, %url, "fetching collection from origin");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| StrataError::OriginUnavailable(format!("GET {url}: {e}")))?
            .error_for_status()
            .map_err(|e| StrataError::OriginUnavailable(format!("GET {url}: {e}")))?;

        let body = response
            .bytes()
            .await
            .map_err(|e| StrataError::OriginUnavailable(format!("reading {url}: {e}")))?;

        serde_json::from_slice(&body).map_err(|e| StrataError::Decode {
            kind: T::KIND,
            source: e,
        })
    }
}
