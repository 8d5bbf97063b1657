//! Batch download of the sample list.

use std::path::{Path, PathBuf};

use super::{DownloadError, Fetcher};
use crate::catalog::SampleSource;
use crate::console;

// ---------------------------------------------------------------------------
// DownloadReport
// ---------------------------------------------------------------------------

/// Outcome of [`download_all`].
#[derive(Debug, Default)]
pub struct DownloadReport {
    /// Number of entries attempted.
    pub attempted: usize,
    /// Files written successfully.
    pub downloaded: Vec<PathBuf>,
    /// `(file name, error)` for every failed entry, in list order.
    pub failures: Vec<(String, DownloadError)>,
}

impl DownloadReport {
    /// Number of successful fetches.
    pub fn succeeded(&self) -> usize {
        self.downloaded.len()
    }

    /// Returns `true` when every entry was downloaded.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

// ---------------------------------------------------------------------------
// download_one / download_all
// ---------------------------------------------------------------------------

/// Fetch `source` and write it to `dest_dir/<file_name>`, overwriting.
///
/// The body is fetched completely before anything is written, so a failed
/// transfer leaves no partial file behind.
pub fn download_one(
    fetcher: &dyn Fetcher,
    source: &SampleSource,
    dest_dir: &Path,
) -> Result<PathBuf, DownloadError> {
    let body = fetcher.fetch(&source.url)?;
    let path = dest_dir.join(&source.file_name);
    std::fs::write(&path, body).map_err(|e| DownloadError::Write {
        path: path.clone(),
        source: e,
    })?;
    Ok(path)
}

/// Download every entry of `sources` into `dest_dir`.
///
/// Failures are printed and recorded; the batch always runs to the end.
pub fn download_all(
    fetcher: &dyn Fetcher,
    sources: &[SampleSource],
    dest_dir: &Path,
) -> DownloadReport {
    let mut report = DownloadReport {
        attempted: sources.len(),
        ..DownloadReport::default()
    };

    for source in sources {
        console::item_start(&format!("Downloading {}", source.description));
        match download_one(fetcher, source, dest_dir) {
            Ok(path) => {
                console::item_ok();
                log::debug!("{} -> {}", source.url, path.display());
                report.downloaded.push(path);
            }
            Err(e) => {
                console::item_failed(&e.to_string());
                log::warn!("download of {} failed: {e}", source.url);
                report.failures.push((source.file_name.clone(), e));
            }
        }
    }

    report
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
