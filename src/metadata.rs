//! Writes and reads `test_cases.json`.
//!
//! Output is UTF-8 with two-space indentation and no trailing newline.
//! Arabic text is written literally, never as `\uXXXX` escapes.  The file is
//! overwritten on every run; serialisation is deterministic so an unchanged
//! catalog yields a byte-identical file.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::catalog::TestCaseManifest;

/// Errors raised while writing or reading the manifest.
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("cannot access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid test-case JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Render `manifest` exactly as it is written to disk.
pub fn render_test_cases(manifest: &TestCaseManifest) -> Result<String, MetadataError> {
    Ok(serde_json::to_string_pretty(manifest)?)
}

/// Serialise `manifest` to `path`, replacing any previous file.
pub fn write_test_cases(path: &Path, manifest: &TestCaseManifest) -> Result<(), MetadataError> {
    let json = render_test_cases(manifest)?;
    std::fs::write(path, json).map_err(|e| MetadataError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    log::info!(
        "wrote {} test cases to {}",
        manifest.len(),
        path.display()
    );
    Ok(())
}

/// Parse a manifest previously written by [`write_test_cases`].
pub fn read_test_cases(path: &Path) -> Result<TestCaseManifest, MetadataError> {
    let data = std::fs::read_to_string(path).map_err(|e| MetadataError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(serde_json::from_str(&data)?)
}
