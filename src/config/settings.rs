//! Setup settings and their defaults.
//!
//! The defaults *are* the program's behaviour; nothing is read from the
//! command line or from disk.  Tests build a [`SetupConfig`] pointing at a
//! temporary directory instead.

use std::path::PathBuf;
use std::time::Duration;

// ---------------------------------------------------------------------------
// SetupConfig
// ---------------------------------------------------------------------------

/// Top-level settings for one setup run.
#[derive(Debug, Clone, PartialEq)]
pub struct SetupConfig {
    /// Root of the generated corpus, relative to the working directory.
    pub base_dir: PathBuf,
    /// Program name (or path) of the external audio converter.
    pub converter_program: String,
    /// Per-request HTTP timeout in seconds.
    pub http_timeout_secs: u64,
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("test_audio"),
            converter_program: "ffmpeg".into(),
            // reqwest's blocking client default.
            http_timeout_secs: 30,
        }
    }
}

impl SetupConfig {
    /// Build a config rooted at `base_dir`, keeping every other default.
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            ..Self::default()
        }
    }

    /// HTTP timeout as a [`Duration`].
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
