//! The [`Fetcher`] seam and its HTTP implementation.

use reqwest::blocking::Client;

use super::DownloadError;
use crate::config::SetupConfig;

// ---------------------------------------------------------------------------
// Fetcher trait
// ---------------------------------------------------------------------------

/// Blocking fetch of a whole resource into memory.
///
/// Object-safe so the runner can hold a `Box<dyn Fetcher>`.
pub trait Fetcher {
    /// Fetch `url` and return the response body.
    fn fetch(&self, url: &str) -> Result<Vec<u8>, DownloadError>;
}

// ---------------------------------------------------------------------------
// HttpFetcher
// ---------------------------------------------------------------------------

/// Plain `GET` over a blocking `reqwest` client.
///
/// Non-2xx responses are errors.  No retry, no resume.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a fetcher using the timeout from `config`.
    ///
    /// Falls back to a default client if the builder fails.
    pub fn from_config(config: &SetupConfig) -> Self {
        let client = Client::builder()
            .timeout(config.http_timeout())
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .unwrap_or_else(|e| {
                log::warn!("HTTP client builder failed ({e}); using defaults");
                Client::new()
            });

        Self { client }
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, DownloadError> {
        log::debug!("GET {url}");
        let response = self.client.get(url).send()?.error_for_status()?;
        let body = response.bytes()?;
        log::debug!("GET {url} -> {} bytes", body.len());
        Ok(body.to_vec())
    }
}

// ---------------------------------------------------------------------------
// MockFetcher (test only)
// ---------------------------------------------------------------------------

/// Serves canned bodies by URL; any other URL fails with HTTP 404.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MockFetcher {
    bodies: std::collections::HashMap<String, Vec<u8>>,
    requests: std::cell::RefCell<Vec<String>>,
}

#[cfg(test)]
impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` for `url`.
    pub fn with(mut self, url: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        self.bodies.insert(url.into(), body.into());
        self
    }

    /// URLs requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

#[cfg(test)]
impl Fetcher for MockFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, DownloadError> {
        self.requests.borrow_mut().push(url.to_string());
        self.bodies
            .get(url)
            .cloned()
            .ok_or_else(|| DownloadError::Status {
                status: 404,
                url: url.to_string(),
            })
    }
}
