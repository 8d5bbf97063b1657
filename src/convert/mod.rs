//! MP3 → WAV conversion through an external tool.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────┐
//! │             AudioConverter (trait)             │
//! │                                                │
//! │   is_available()  ── ffmpeg -version           │
//! │   convert(in, out) ── ffmpeg -i in -ar 16000   │
//! │                        -ac 1 -acodec pcm_s16le │
//! │                        out -y -loglevel error  │
//! └────────────────────────────────────────────────┘
//!              ▲
//!              │ one call per *.mp3
//!   find_mp3_files() ──▶ convert_all() ──▶ ConversionReport
//! ```

pub mod batch;
pub mod ffmpeg;

pub use batch::{convert_all, find_mp3_files, wav_path_for, ConversionReport};
pub use ffmpeg::{install_hint, AudioConverter, FfmpegConverter, TargetFormat};

#[cfg(test)]
pub use ffmpeg::MockConverter;

use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// ConvertError
// ---------------------------------------------------------------------------

/// Errors that can arise while converting one file.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The converter process could not be started.
    #[error("cannot run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The converter ran but reported failure.
    #[error("converting {} failed ({status}): {stderr}", .input.display())]
    Failed {
        input: PathBuf,
        status: String,
        stderr: String,
    },
}
