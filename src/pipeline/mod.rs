//! Setup pipeline: prepare → download → probe converter → convert → metadata.
//!
//! # Flow
//!
//! ```text
//! SetupRunner::run()
//!   ├─ Preparing          SetupPaths::prepare_layout
//!   ├─ Downloading        download_all (failures counted, never fatal)
//!   ├─ CheckingConverter  AudioConverter::is_available
//!   │     └─ missing ──▶ Err(SetupError::ConverterMissing)   exit code 1
//!   ├─ Converting         find_mp3_files + convert_all
//!   ├─ WritingMetadata    write_test_cases
//!   └─ Complete           Ok(SetupSummary)
//! ```
//!
//! Everything runs on the calling thread, one blocking step at a time.

pub mod runner;
pub mod state;

pub use runner::{SetupError, SetupRunner};
pub use state::{SetupStage, SetupSummary};
