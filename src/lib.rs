//! Prepares a local corpus of Quranic recitation audio for speech-to-text
//! testing.
//!
//! One run downloads a fixed set of MP3 recitations, converts them to 16 kHz
//! mono 16-bit PCM WAV with `ffmpeg`, and writes `test_cases.json` pairing
//! each file with its expected Arabic transcript.
//!
//! ```rust,no_run
//! use quran_audio_setup::config::SetupConfig;
//! use quran_audio_setup::pipeline::SetupRunner;
//!
//! let mut runner = SetupRunner::from_config(&SetupConfig::default())?;
//! let summary = runner.run()?;
//! println!("{}", summary.render());
//! # Ok::<(), quran_audio_setup::pipeline::SetupError>(())
//! ```

pub mod catalog;
pub mod config;
pub mod console;
pub mod convert;
pub mod download;
pub mod metadata;
pub mod pipeline;
