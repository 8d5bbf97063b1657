//! Configuration module for the test-audio setup utility.
//!
//! Provides [`SetupConfig`] (base directory, converter program, HTTP timeout)
//! and [`SetupPaths`], which resolves the on-disk corpus layout from it.

pub mod paths;
pub mod settings;

pub use paths::SetupPaths;
pub use settings::SetupConfig;
