//! Sample downloader.
//!
//! * [`Fetcher`] — blocking "GET this URL, give me the body" seam.
//! * [`HttpFetcher`] — production implementation over `reqwest::blocking`.
//! * [`download_all`] — walks the sample list, writes each body into the
//!   samples directory and keeps going past failures.
//! * [`DownloadError`] — per-item failure; never aborts the batch.

pub mod batch;
pub mod fetcher;

pub use batch::{download_all, download_one, DownloadReport};
pub use fetcher::{Fetcher, HttpFetcher};

#[cfg(test)]
pub use fetcher::MockFetcher;

use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// DownloadError
// ---------------------------------------------------------------------------

/// Errors that can occur while fetching one sample.
#[derive(Debug, Error)]
pub enum DownloadError {
    /// Transport or connection error.
    #[error("HTTP request failed: {0}")]
    Request(String),

    /// The request did not complete within the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// The server answered with a non-success status.
    #[error("HTTP {status} for {url}")]
    Status { status: u16, url: String },

    /// The body could not be written to disk.
    #[error("cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<reqwest::Error> for DownloadError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            DownloadError::Timeout
        } else if let Some(status) = e.status() {
            DownloadError::Status {
                status: status.as_u16(),
                url: e.url().map(|u| u.to_string()).unwrap_or_default(),
            }
        } else {
            DownloadError::Request(e.to_string())
        }
    }
}
