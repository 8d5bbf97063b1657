//! Bundled catalog: the fixed sample download list and the fixed test-case
//! table.
//!
//! Both tables are TOML files under `data/` compiled into the binary, so the
//! corpus definition stays data rather than code.
//!
//! * [`SampleSource`] / [`bundled_samples`] — `(url, file name, description)`
//!   triples for the downloader.
//! * [`TestCase`] / [`TestCaseManifest`] / [`bundled_manifest`] — expected
//!   transcriptions written to `test_cases.json`.
//! * [`validate_arabic_text`] — integrity check for the expected transcripts.

pub mod arabic;
pub mod samples;
pub mod test_cases;

pub use arabic::validate_arabic_text;
pub use samples::{bundled_samples, parse_samples, SampleSource};
pub use test_cases::{
    bundled_manifest, parse_manifest, Category, TestCase, TestCaseManifest, VerseRef,
};

use thiserror::Error;

// ---------------------------------------------------------------------------
// CatalogError
// ---------------------------------------------------------------------------

/// Errors raised while loading a catalog table.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The TOML source could not be deserialised.
    #[error("malformed catalog: {0}")]
    Parse(#[from] toml::de::Error),

    /// A sample entry failed validation.
    #[error("invalid sample `{file_name}`: {reason}")]
    InvalidSample { file_name: String, reason: String },

    /// Two sample entries share the same destination file name.
    #[error("duplicate sample file name `{0}`")]
    DuplicateFileName(String),

    /// A test case failed validation.
    #[error("invalid test case `{file}`: {reason}")]
    InvalidTestCase { file: String, reason: String },

    /// A transcript is not Arabic text.
    #[error("text validation failed: {0}")]
    Validation(String),

    /// A verse reference is not of the form `chapter:verse`.
    #[error("invalid verse reference `{0}`")]
    InvalidReference(String),
}
