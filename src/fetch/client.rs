//! HTTP client for downloading trace payloads.

use crate::utils::config::DEFAULT_FETCH_TIMEOUT;
use crate::utils::error::FetchError;
use log::{debug, info};
use reqwest::blocking::Client;
use std::time::Duration;

/// Blocking client for fetching trace CSVs from a URL
pub struct TraceFetcher {
    client: Client,
}

impl TraceFetcher {
    /// Create a new fetcher with the default timeout
    pub fn new() -> Result<Self, FetchError> {
        Self::with_timeout(DEFAULT_FETCH_TIMEOUT)
    }

    /// Create a fetcher with a custom timeout
    pub fn with_timeout(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(FetchError::RequestFailed)?;

        Ok(Self { client })
    }

    /// Download a trace payload
    ///
    /// # Errors
    /// * `FetchError::InvalidUrl` - URL is not http(s)
    /// * `FetchError::RequestFailed` - connection, timeout or body decode failure
    /// * `FetchError::BadStatus` - non-2xx response
    pub fn fetch(&self, url: &str) -> Result<String, FetchError> {
        validate_url(url)?;

        info!("Fetching trace from: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .map_err(FetchError::RequestFailed)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::BadStatus(status.as_u16()));
        }

        let body = response.text().map_err(FetchError::RequestFailed)?;
        debug!("Fetched {} bytes", body.len());

        Ok(body)
    }
}

/// Check that a URL can be fetched
pub fn validate_url(url: &str) -> Result<(), FetchError> {
    if url.is_empty() {
        return Err(FetchError::InvalidUrl("URL cannot be empty".to_string()));
    }

    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(FetchError::InvalidUrl(format!(
            "{} (must start with http:// or https://)",
            url
        )));
    }

    Ok(())
}
