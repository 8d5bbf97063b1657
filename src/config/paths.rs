//! Corpus directory layout.
//!
//! Layout under the base directory (default `test_audio/`):
//!
//! ```text
//! test_audio/
//! ├── samples/          downloaded *.mp3 and converted *.wav
//! ├── noisy/            reserved, left empty
//! ├── processed/        reserved, left empty
//! └── test_cases.json   expected transcriptions
//! ```

use std::io;
use std::path::PathBuf;

use super::SetupConfig;

/// Holds all resolved corpus directory/file paths.
#[derive(Debug, Clone, PartialEq)]
pub struct SetupPaths {
    /// Root of the corpus.
    pub base_dir: PathBuf,
    /// Downloaded MP3s and their WAV conversions.
    pub samples_dir: PathBuf,
    /// Reserved for noise-augmented variants.
    pub noisy_dir: PathBuf,
    /// Reserved for pre-processed variants.
    pub processed_dir: PathBuf,
    /// Full path to `test_cases.json`.
    pub manifest_file: PathBuf,
}

impl SetupPaths {
    /// Resolves the layout from `config.base_dir`.
    pub fn new(config: &SetupConfig) -> Self {
        let base_dir = config.base_dir.clone();
        Self {
            samples_dir: base_dir.join("samples"),
            noisy_dir: base_dir.join("noisy"),
            processed_dir: base_dir.join("processed"),
            manifest_file: base_dir.join("test_cases.json"),
            base_dir,
        }
    }

    /// The three directories created by [`prepare_layout`](Self::prepare_layout).
    pub fn directories(&self) -> [&PathBuf; 3] {
        [&self.samples_dir, &self.noisy_dir, &self.processed_dir]
    }

    /// Create every directory of the layout, including missing parents.
    ///
    /// Idempotent: existing directories are left untouched and no distinction
    /// is made between "created" and "already there".
    pub fn prepare_layout(&self) -> io::Result<()> {
        for dir in self.directories() {
            std::fs::create_dir_all(dir)?;
            log::debug!("ensured directory {}", dir.display());
        }
        Ok(())
    }
}

impl Default for SetupPaths {
    fn default() -> Self {
        Self::new(&SetupConfig::default())
    }
}
