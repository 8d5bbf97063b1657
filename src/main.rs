//! Entry point for the test-audio setup utility.
//!
//! Exit codes: `0` on completion (even with some failed downloads or
//! conversions), `1` when `ffmpeg` is missing or a fatal I/O error occurs.

use std::process::ExitCode;

use anyhow::Context;
use quran_audio_setup::{
    config::SetupConfig,
    console,
    pipeline::{SetupError, SetupRunner, SetupSummary},
};

fn run() -> anyhow::Result<SetupSummary> {
    let config = SetupConfig::default();
    let mut runner =
        SetupRunner::from_config(&config).context("failed to initialise setup runner")?;
    let summary = runner
        .run()
        .with_context(|| format!("setup stopped during stage `{}`", runner.stage().label()))?;
    Ok(summary)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    console::print_header("Quran Recitation - Test Audio Setup");

    match run() {
        Ok(summary) => {
            println!("{}", summary.render());
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e:#}");
            let code = e
                .downcast_ref::<SetupError>()
                .map_or(1, SetupError::exit_code);
            ExitCode::from(code)
        }
    }
}
