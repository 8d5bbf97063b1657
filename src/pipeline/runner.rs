//! [`SetupRunner`] — executes the setup stages in order.

use std::path::PathBuf;

use thiserror::Error;

use crate::catalog::{
    bundled_manifest, bundled_samples, CatalogError, Category, SampleSource, TestCaseManifest,
};
use crate::config::{SetupConfig, SetupPaths};
use crate::console;
use crate::convert::{
    convert_all, find_mp3_files, install_hint, AudioConverter, FfmpegConverter,
};
use crate::download::{download_all, Fetcher, HttpFetcher};
use crate::metadata::{write_test_cases, MetadataError};

use super::state::{SetupStage, SetupSummary};

// ---------------------------------------------------------------------------
// SetupError
// ---------------------------------------------------------------------------

/// Failures that stop the run.
///
/// Individual download and conversion failures are not here: they are
/// reported and counted, and the run continues.
#[derive(Debug, Error)]
pub enum SetupError {
    /// The bundled catalog is corrupt.
    #[error("bundled catalog: {0}")]
    Catalog(#[from] CatalogError),

    /// A corpus directory could not be created.
    #[error("cannot create directory layout under {}: {source}", .path.display())]
    Layout {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The samples directory could not be scanned for MP3s.
    #[error("cannot scan {}: {source}", .path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The external converter is not installed.
    #[error("{program} is not installed")]
    ConverterMissing { program: String },

    /// `test_cases.json` could not be written.
    #[error(transparent)]
    Metadata(#[from] MetadataError),
}

impl SetupError {
    /// Process exit code for this failure.
    ///
    /// Every fatal outcome exits with `1`; `0` is reserved for completed runs,
    /// including runs where some downloads or conversions failed.
    pub fn exit_code(&self) -> u8 {
        match self {
            SetupError::ConverterMissing { .. } => 1,
            SetupError::Catalog(_)
            | SetupError::Layout { .. }
            | SetupError::Scan { .. }
            | SetupError::Metadata(_) => 1,
        }
    }
}

// ---------------------------------------------------------------------------
// SetupRunner
// ---------------------------------------------------------------------------

/// Owns everything one run needs and drives it stage by stage.
pub struct SetupRunner {
    paths: SetupPaths,
    fetcher: Box<dyn Fetcher>,
    converter: Box<dyn AudioConverter>,
    samples: Vec<SampleSource>,
    manifest: TestCaseManifest,
    stage: SetupStage,
}

impl SetupRunner {
    pub fn new(
        paths: SetupPaths,
        fetcher: Box<dyn Fetcher>,
        converter: Box<dyn AudioConverter>,
        samples: Vec<SampleSource>,
        manifest: TestCaseManifest,
    ) -> Self {
        Self {
            paths,
            fetcher,
            converter,
            samples,
            manifest,
            stage: SetupStage::Idle,
        }
    }

    /// Production runner: bundled catalog, HTTP fetcher, `ffmpeg`.
    pub fn from_config(config: &SetupConfig) -> Result<Self, SetupError> {
        Ok(Self::new(
            SetupPaths::new(config),
            Box::new(HttpFetcher::from_config(config)),
            Box::new(FfmpegConverter::from_config(config)),
            bundled_samples()?,
            bundled_manifest()?,
        ))
    }

    /// The stage reached so far.  After a failed run this is the stage that
    /// failed.
    pub fn stage(&self) -> SetupStage {
        self.stage
    }

    pub fn paths(&self) -> &SetupPaths {
        &self.paths
    }

    fn enter(&mut self, stage: SetupStage) {
        log::info!("stage: {}", stage.label());
        self.stage = stage;
    }

    /// Run every stage.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::ConverterMissing`] when the converter probe
    /// fails; downloaded files are kept and nothing after the probe runs.
    /// I/O failures on the layout, the samples scan or the manifest write are
    /// also fatal.
    pub fn run(&mut self) -> Result<SetupSummary, SetupError> {
        // --- Directories ----------------------------------------------------
        self.enter(SetupStage::Preparing);
        println!("Creating directory structure...");
        self.paths
            .prepare_layout()
            .map_err(|e| SetupError::Layout {
                path: self.paths.base_dir.clone(),
                source: e,
            })?;
        println!("{} Directories created", console::OK);

        // --- Downloads ------------------------------------------------------
        self.enter(SetupStage::Downloading);
        console::print_section("Downloading audio files");
        let downloads = download_all(
            self.fetcher.as_ref(),
            &self.samples,
            &self.paths.samples_dir,
        );
        println!(
            "\n{} Downloaded {}/{} files",
            console::OK,
            downloads.succeeded(),
            downloads.attempted
        );
        if !downloads.is_complete() {
            let failed: Vec<&str> = downloads.failures.iter().map(|(f, _)| f.as_str()).collect();
            log::warn!("{} downloads failed: {}", failed.len(), failed.join(", "));
        }

        // --- Converter probe ------------------------------------------------
        self.enter(SetupStage::CheckingConverter);
        let program = self.converter.name().to_string();
        console::print_section(&format!("Checking {program} installation"));
        if !self.converter.is_available() {
            println!("{} {program} is not installed", console::FAIL);
            println!("\n{}", install_hint(&program));
            return Err(SetupError::ConverterMissing { program });
        }
        println!("{} {program} is installed", console::OK);

        // --- Conversion -----------------------------------------------------
        self.enter(SetupStage::Converting);
        console::print_section("Converting MP3 to WAV (16kHz, mono, 16-bit PCM)");
        let inputs = find_mp3_files(&self.paths.samples_dir).map_err(|e| SetupError::Scan {
            path: self.paths.samples_dir.clone(),
            source: e,
        })?;
        let conversions = convert_all(self.converter.as_ref(), &inputs);
        println!(
            "\n{} Converted {}/{} files",
            console::OK,
            conversions.succeeded(),
            conversions.attempted
        );

        // --- Metadata -------------------------------------------------------
        self.enter(SetupStage::WritingMetadata);
        console::print_section("Creating test metadata");
        for category in Category::ALL {
            log::debug!(
                "{:?}: {} test cases",
                category,
                self.manifest.in_category(category).count()
            );
        }
        write_test_cases(&self.paths.manifest_file, &self.manifest)?;
        println!(
            "{} Test metadata saved to {}",
            console::OK,
            self.paths.manifest_file.display()
        );

        self.enter(SetupStage::Complete);
        Ok(SetupSummary {
            downloaded: downloads.succeeded(),
            download_attempts: downloads.attempted,
            converted: conversions.succeeded(),
            conversion_attempts: conversions.attempted,
            test_cases: self.manifest.len(),
            manifest_path: self.paths.manifest_file.clone(),
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::{wav_path_for, MockConverter};
    use crate::download::MockFetcher;
    use crate::metadata::read_test_cases;
    use tempfile::{tempdir, TempDir};

    /// A fetcher that serves every bundled sample.
    fn serving_all(samples: &[SampleSource]) -> MockFetcher {
        samples
            .iter()
            .fold(MockFetcher::new(), |f, s| f.with(s.url.clone(), b"ID3".to_vec()))
    }

    fn runner(dir: &TempDir, fetcher: MockFetcher, converter: MockConverter) -> SetupRunner {
        let paths = SetupPaths::new(&SetupConfig::with_base_dir(dir.path().join("test_audio")));
        SetupRunner::new(
            paths,
            Box::new(fetcher),
            Box::new(converter),
            bundled_samples().expect("samples"),
            bundled_manifest().expect("manifest"),
        )
    }

    #[test]
    fn full_run_converts_every_sample() {
        let dir = tempdir().expect("temp dir");
        let samples = bundled_samples().expect("samples");
        let mut r = runner(&dir, serving_all(&samples), MockConverter::available());

        let summary = r.run().expect("run");

        assert_eq!(r.stage(), SetupStage::Complete);
        assert_eq!(summary.downloaded, 17);
        assert_eq!(summary.download_attempts, 17);
        assert_eq!(summary.converted, 17);
        assert_eq!(summary.test_cases, 17);

        let mp3s = find_mp3_files(&r.paths().samples_dir).expect("scan");
        assert_eq!(mp3s.len(), 17);
        for mp3 in &mp3s {
            assert!(wav_path_for(mp3).exists(), "{} has no wav", mp3.display());
        }
        assert!(r.paths().noisy_dir.is_dir());
        assert!(r.paths().processed_dir.is_dir());
        assert_eq!(read_test_cases(&summary.manifest_path).expect("read").len(), 17);
    }

    #[test]
    fn missing_converter_stops_after_downloads() {
        let dir = tempdir().expect("temp dir");
        let samples = bundled_samples().expect("samples");
        let mut r = runner(&dir, serving_all(&samples), MockConverter::missing());

        let err = r.run().unwrap_err();

        assert!(matches!(err, SetupError::ConverterMissing { .. }));
        assert_eq!(err.exit_code(), 1);
        assert_eq!(r.stage(), SetupStage::CheckingConverter);

        let samples_dir = &r.paths().samples_dir;
        assert_eq!(find_mp3_files(samples_dir).expect("scan").len(), 17);
        let wavs = std::fs::read_dir(samples_dir)
            .expect("read dir")
            .filter_map(Result::ok)
            .filter(|e| e.path().extension().is_some_and(|x| x == "wav"))
            .count();
        assert_eq!(wavs, 0);
        assert!(!r.paths().manifest_file.exists());
    }

    #[test]
    fn failed_download_does_not_stop_later_stages() {
        let dir = tempdir().expect("temp dir");
        let samples = bundled_samples().expect("samples");
        // Serve everything except the first entry.
        let fetcher = serving_all(&samples[1..]);
        let mut r = runner(&dir, fetcher, MockConverter::available());

        let summary = r.run().expect("run");

        assert_eq!(summary.downloaded, 16);
        assert!(summary.downloaded < summary.download_attempts);
        assert_eq!(summary.converted, 16);
        assert!(r.paths().manifest_file.exists());
        assert!(!r.paths().samples_dir.join(&samples[0].file_name).exists());
    }

    #[test]
    fn conversion_picks_up_leftover_mp3s() {
        let dir = tempdir().expect("temp dir");
        let mut r = runner(&dir, MockFetcher::new(), MockConverter::available());
        r.paths().prepare_layout().expect("prepare");
        std::fs::write(r.paths().samples_dir.join("old_run.mp3"), b"ID3").expect("seed");

        let summary = r.run().expect("run");

        assert_eq!(summary.downloaded, 0);
        assert_eq!(summary.conversion_attempts, 1);
        assert!(r.paths().samples_dir.join("old_run.wav").exists());
    }

    #[test]
    fn rerun_is_idempotent() {
        let dir = tempdir().expect("temp dir");
        let samples = bundled_samples().expect("samples");

        let mut first = runner(&dir, serving_all(&samples), MockConverter::available());
        let s1 = first.run().expect("first run");
        let json1 = std::fs::read(&s1.manifest_path).expect("read");

        let mut second = runner(&dir, serving_all(&samples), MockConverter::available());
        let s2 = second.run().expect("second run");
        let json2 = std::fs::read(&s2.manifest_path).expect("read");

        assert_eq!(s1, s2);
        assert_eq!(json1, json2);
    }

    #[test]
    fn conversion_failure_is_counted_not_fatal() {
        let dir = tempdir().expect("temp dir");
        let samples = bundled_samples().expect("samples");
        let converter = MockConverter::available().failing_on("002255.mp3");
        let mut r = runner(&dir, serving_all(&samples), converter);

        let summary = r.run().expect("run");

        assert_eq!(summary.conversion_attempts, 17);
        assert_eq!(summary.converted, 16);
        assert!(!r.paths().samples_dir.join("002255.wav").exists());
        assert!(r.paths().manifest_file.exists());
    }

    #[test]
    fn layout_failure_is_fatal() {
        let dir = tempdir().expect("temp dir");
        // A regular file where the base directory should be.
        std::fs::write(dir.path().join("test_audio"), b"").expect("seed");
        let mut r = runner(&dir, MockFetcher::new(), MockConverter::available());

        let err = r.run().unwrap_err();
        assert!(matches!(err, SetupError::Layout { .. }));
        assert_eq!(err.exit_code(), 1);
        assert_eq!(r.stage(), SetupStage::Preparing);
    }

    #[test]
    fn every_fatal_error_exits_with_one() {
        let io = || std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let errors = [
            SetupError::ConverterMissing {
                program: "ffmpeg".into(),
            },
            SetupError::Catalog(CatalogError::InvalidReference("x".into())),
            SetupError::Layout {
                path: PathBuf::from("test_audio"),
                source: io(),
            },
            SetupError::Scan {
                path: PathBuf::from("test_audio/samples"),
                source: io(),
            },
        ];
        for err in &errors {
            assert_eq!(err.exit_code(), 1, "{err}");
        }
    }

    #[test]
    fn exit_code_survives_anyhow_context() {
        let err = anyhow::Error::new(SetupError::ConverterMissing {
            program: "ffmpeg".into(),
        })
        .context("setup stopped");

        let code = err
            .downcast_ref::<SetupError>()
            .map(SetupError::exit_code);
        assert_eq!(code, Some(1));
    }

    #[test]
    fn from_config_loads_bundled_catalog() {
        let r = SetupRunner::from_config(&SetupConfig::default()).expect("runner");
        assert_eq!(r.samples.len(), 17);
        assert_eq!(r.manifest.len(), 17);
        assert_eq!(r.stage(), SetupStage::Idle);
    }
}
