//! Sample download list.
//!
//! The bundled list covers Al-Fatihah (1:1–1:7), Ayat al-Kursi (2:255),
//! Al-Asr (103:1–103:3) and Al-Kawthar (108:1–108:3) by Alafasy, plus 1:1 by
//! Sudais, Husary and Minshawi.  All files come from everyayah.com.

use std::collections::HashSet;

use serde::Deserialize;

use super::CatalogError;

const BUNDLED_SAMPLES: &str = include_str!("../../data/samples.toml");

// ---------------------------------------------------------------------------
// SampleSource
// ---------------------------------------------------------------------------

/// One recitation to download.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SampleSource {
    /// Source URL of the MP3.
    pub url: String,
    /// Destination file name inside the samples directory.
    pub file_name: String,
    /// Human-readable label used in progress output.
    pub description: String,
}

#[derive(Debug, Deserialize)]
struct SampleTable {
    #[serde(rename = "sample", default)]
    samples: Vec<SampleSource>,
}

impl SampleSource {
    fn validate(&self) -> Result<(), CatalogError> {
        let invalid = |reason: &str| CatalogError::InvalidSample {
            file_name: self.file_name.clone(),
            reason: reason.into(),
        };

        if !(self.url.starts_with("https://") || self.url.starts_with("http://")) {
            return Err(invalid("url must be http(s)"));
        }
        if self.file_name.is_empty() || !self.file_name.ends_with(".mp3") {
            return Err(invalid("file name must end in .mp3"));
        }
        if self.file_name.contains(['/', '\\']) {
            return Err(invalid("file name must not contain a path separator"));
        }
        if self.description.trim().is_empty() {
            return Err(invalid("description must not be empty"));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Parse and validate a sample table from TOML source.
pub fn parse_samples(source: &str) -> Result<Vec<SampleSource>, CatalogError> {
    let table: SampleTable = toml::from_str(source)?;

    let mut seen = HashSet::new();
    for sample in &table.samples {
        sample.validate()?;
        if !seen.insert(sample.file_name.as_str()) {
            return Err(CatalogError::DuplicateFileName(sample.file_name.clone()));
        }
    }

    Ok(table.samples)
}

/// The sample list compiled into the binary.
pub fn bundled_samples() -> Result<Vec<SampleSource>, CatalogError> {
    parse_samples(BUNDLED_SAMPLES)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
