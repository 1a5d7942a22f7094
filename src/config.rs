//! Client configuration.
//!
//! The only environment variable read is `CANDIDATES_API_URL`, the base URL
//! of the REST API. The collection endpoint is `{api_url}/candidates`.

use std::time::Duration;

/// Environment variable holding the base API URL.
pub const API_URL_ENV: &str = "CANDIDATES_API_URL";

const DEFAULT_API_URL: &str = "http://localhost:3000";
const DEFAULT_PAGE_SIZE: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base API URL, without a trailing slash.
    pub api_url: String,
    /// Rows per page in the derived view. Always at least 1.
    pub page_size: usize,
    /// Optional per-request timeout for the HTTP transport.
    pub request_timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            request_timeout: None,
        }
    }
}

impl Config {
    /// Defaults, with the API URL taken from `CANDIDATES_API_URL` when set.
    pub fn from_env() -> Self {
        let config = Self::default();
        match std::env::var(API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => config.with_api_url(url.trim()),
            _ => config,
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the page size. Zero is raised to 1.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// `{api_url}/candidates`
    pub fn collection_url(&self) -> String {
        format!("{}/candidates", self.api_url)
    }
}
