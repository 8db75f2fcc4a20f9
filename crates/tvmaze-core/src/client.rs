//! HTTP client for the TVmaze catalog
//!
//! This module provides a thin HTTP client that issues single-shot GET
//! requests against the catalog and returns the response body. There is no
//! retry or throttling; every failure is returned to the caller.

use std::time::Duration;

use tracing::debug;

use crate::error::{Result, TvMazeError};

/// Base URL for the TVmaze catalog
pub const TVMAZE_BASE_URL: &str = "https://api.tvmaze.com";

/// Default User-Agent identifying this library
const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Configuration for the TVmaze HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Catalog base URL without a trailing slash (default: https://api.tvmaze.com)
    pub base_url: String,
    /// Request timeout in seconds (default: none)
    pub timeout_secs: Option<u64>,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: TVMAZE_BASE_URL.to_string(),
            timeout_secs: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Configuration pointing at a different catalog host, e.g. a mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

/// HTTP client for the TVmaze catalog
pub struct TvMazeClient {
    /// Underlying HTTP client
    client: reqwest::Client,
    /// Catalog base URL, trailing slash removed
    base_url: String,
}

impl TvMazeClient {
    /// Create a new client with default configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Catalog base URL used for every request
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the body of a catalog path
    ///
    /// # Arguments
    /// * `path` - Path and query relative to the base URL (e.g., "/search/shows?q=girls")
    ///
    /// # Errors
    /// - `TvMazeError::HttpError` - Network failure or unreadable body
    /// - `TvMazeError::NotFound` - Catalog returned 404
    /// - `TvMazeError::Status` - Any other non-success status
    pub async fn fetch(&self, path: &str) -> Result<String> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "GET");

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response.text().await?);
        }

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(TvMazeError::NotFound(url));
        }

        Err(TvMazeError::Status {
            status: status.as_u16(),
            url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://api.tvmaze.com");
        assert_eq!(config.timeout_secs, None);
        assert!(config.user_agent.starts_with("tvmaze-core/"));
    }

    #[test]
    fn test_client_creation() {
        let client = TvMazeClient::new();
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_with_timeout() {
        let config = ClientConfig {
            timeout_secs: Some(10),
            ..ClientConfig::default()
        };
        assert!(TvMazeClient::with_config(config).is_ok());
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = TvMazeClient::with_config(ClientConfig::with_base_url("http://localhost:8080/"))
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
    }
}
