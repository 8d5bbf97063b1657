//! Discovery and batch conversion of MP3 samples.

use std::io;
use std::path::{Path, PathBuf};

use super::{AudioConverter, ConvertError};
use crate::console;

// ---------------------------------------------------------------------------
// Discovery
// ---------------------------------------------------------------------------

/// Every `*.mp3` directly inside `dir`, sorted by file name.
///
/// Picks up files from earlier runs too, not only the ones just downloaded.
/// The extension match is case-sensitive.
pub fn find_mp3_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "mp3") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Same directory and stem as `mp3`, with a `.wav` extension.
pub fn wav_path_for(mp3: &Path) -> PathBuf {
    mp3.with_extension("wav")
}

// ---------------------------------------------------------------------------
// ConversionReport
// ---------------------------------------------------------------------------

/// Outcome of [`convert_all`].
#[derive(Debug, Default)]
pub struct ConversionReport {
    /// Number of MP3 files found.
    pub attempted: usize,
    /// WAV files produced.
    pub converted: Vec<PathBuf>,
    /// Inputs that failed, with the reason.
    pub failures: Vec<(PathBuf, ConvertError)>,
}

impl ConversionReport {
    pub fn succeeded(&self) -> usize {
        self.converted.len()
    }
}

// ---------------------------------------------------------------------------
// convert_all
// ---------------------------------------------------------------------------

/// Convert each of `inputs` to a sibling `.wav`.
///
/// Failures are printed and recorded; the batch always runs to the end.
pub fn convert_all(converter: &dyn AudioConverter, inputs: &[PathBuf]) -> ConversionReport {
    let mut report = ConversionReport {
        attempted: inputs.len(),
        ..ConversionReport::default()
    };

    for input in inputs {
        let output = wav_path_for(input);
        let name = input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| input.display().to_string());

        console::item_start(&format!("Converting {name}"));
        match converter.convert(input, &output) {
            Ok(()) => {
                console::item_ok();
                report.converted.push(output);
            }
            Err(e) => {
                console::item_failed(&e.to_string());
                log::warn!("{e}");
                report.failures.push((input.clone(), e));
            }
        }
    }

    report
}
