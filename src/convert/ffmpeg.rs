//! The [`AudioConverter`] seam and its `ffmpeg` implementation.

use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};

use super::ConvertError;
use crate::config::SetupConfig;

// ---------------------------------------------------------------------------
// TargetFormat
// ---------------------------------------------------------------------------

/// Output parameters for converted audio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetFormat {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Channel count.
    pub channels: u16,
    /// ffmpeg codec name.
    pub codec: &'static str,
}

impl TargetFormat {
    /// 16 kHz, mono, 16-bit little-endian PCM.
    pub const PCM16_MONO_16K: TargetFormat = TargetFormat {
        sample_rate: 16_000,
        channels: 1,
        codec: "pcm_s16le",
    };
}

impl Default for TargetFormat {
    fn default() -> Self {
        Self::PCM16_MONO_16K
    }
}

// ---------------------------------------------------------------------------
// AudioConverter trait
// ---------------------------------------------------------------------------

/// Transcodes one audio file into another.
pub trait AudioConverter {
    /// Name shown to the user (e.g. `ffmpeg`).
    fn name(&self) -> &str;

    /// Whether the converter can be invoked on this host at all.
    fn is_available(&self) -> bool;

    /// Convert `input` into `output`, overwriting `output` if present.
    fn convert(&self, input: &Path, output: &Path) -> Result<(), ConvertError>;
}

const _: fn() = || {
    fn _assert_object_safe(_: Box<dyn AudioConverter>) {}
};

// ---------------------------------------------------------------------------
// FfmpegConverter
// ---------------------------------------------------------------------------

/// Shells out to `ffmpeg`.
#[derive(Debug, Clone)]
pub struct FfmpegConverter {
    program: String,
    format: TargetFormat,
}

impl FfmpegConverter {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            format: TargetFormat::default(),
        }
    }

    pub fn from_config(config: &SetupConfig) -> Self {
        Self::new(config.converter_program.clone())
    }

    /// Full argument list for converting `input` into `output`.
    pub fn args(&self, input: &Path, output: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = Vec::with_capacity(12);
        args.push("-i".into());
        args.push(input.into());
        args.push("-ar".into());
        args.push(self.format.sample_rate.to_string().into());
        args.push("-ac".into());
        args.push(self.format.channels.to_string().into());
        args.push("-acodec".into());
        args.push(self.format.codec.into());
        args.push(output.into());
        args.push("-y".into());
        args.push("-loglevel".into());
        args.push("error".into());
        args
    }
}

impl Default for FfmpegConverter {
    fn default() -> Self {
        Self::new("ffmpeg")
    }
}

impl AudioConverter for FfmpegConverter {
    fn name(&self) -> &str {
        &self.program
    }

    fn is_available(&self) -> bool {
        match Command::new(&self.program)
            .arg("-version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
        {
            Ok(status) => status.success(),
            Err(e) => {
                log::debug!("{} -version failed: {e}", self.program);
                false
            }
        }
    }

    fn convert(&self, input: &Path, output: &Path) -> Result<(), ConvertError> {
        log::debug!("{} {:?}", self.program, self.args(input, output));

        let out = Command::new(&self.program)
            .args(self.args(input, output))
            .stdin(Stdio::null())
            .output()
            .map_err(|e| ConvertError::Spawn {
                program: self.program.clone(),
                source: e,
            })?;

        if !out.status.success() {
            return Err(ConvertError::Failed {
                input: input.to_path_buf(),
                status: out.status.to_string(),
                stderr: String::from_utf8_lossy(&out.stderr).trim().to_string(),
            });
        }

        Ok(())
    }
}

/// Installation guidance printed when the converter is missing.
pub fn install_hint(program: &str) -> String {
    format!(
        "Install {program}:\n  \
         macOS:   brew install ffmpeg\n  \
         Ubuntu:  sudo apt-get install ffmpeg\n  \
         Windows: choco install ffmpeg\n\n\
         After installing {program}, run this again to convert audio files."
    )
}

// ---------------------------------------------------------------------------
// MockConverter (test only)
// ---------------------------------------------------------------------------

/// Writes a placeholder WAV instead of running a real tool.
#[cfg(test)]
#[derive(Debug)]
pub struct MockConverter {
    available: bool,
    fail_on: Vec<String>,
}

#[cfg(test)]
impl MockConverter {
    /// A converter that is installed and always succeeds.
    pub fn available() -> Self {
        Self {
            available: true,
            fail_on: Vec::new(),
        }
    }

    /// A converter that is not installed.
    pub fn missing() -> Self {
        Self {
            available: false,
            fail_on: Vec::new(),
        }
    }

    /// Fail whenever the input file name equals `file_name`.
    pub fn failing_on(mut self, file_name: &str) -> Self {
        self.fail_on.push(file_name.to_string());
        self
    }
}

#[cfg(test)]
impl AudioConverter for MockConverter {
    fn name(&self) -> &str {
        "mock-ffmpeg"
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn convert(&self, input: &Path, output: &Path) -> Result<(), ConvertError> {
        let name = input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if !self.available || self.fail_on.contains(&name) {
            return Err(ConvertError::Failed {
                input: input.to_path_buf(),
                status: "exit status: 1".into(),
                stderr: "mock failure".into(),
            });
        }
        std::fs::write(output, b"RIFF").map_err(|e| ConvertError::Spawn {
            program: "mock".into(),
            source: e,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_follow_target_format() {
        let conv = FfmpegConverter::default();
        let args = conv.args(Path::new("in/001001.mp3"), Path::new("in/001001.wav"));
        let args: Vec<_> = args.iter().map(|a| a.to_string_lossy()).collect();
        assert_eq!(
            args,
            [
                "-i",
                "in/001001.mp3",
                "-ar",
                "16000",
                "-ac",
                "1",
                "-acodec",
                "pcm_s16le",
                "in/001001.wav",
                "-y",
                "-loglevel",
                "error",
            ]
        );
    }

    #[test]
    fn from_config_uses_configured_program() {
        let mut cfg = SetupConfig::default();
        cfg.converter_program = "/opt/bin/ffmpeg".into();
        assert_eq!(FfmpegConverter::from_config(&cfg).name(), "/opt/bin/ffmpeg");
    }

    #[test]
    fn nonexistent_program_is_unavailable() {
        let conv = FfmpegConverter::new("definitely-not-an-installed-converter-7f3a");
        assert!(!conv.is_available());
    }

    #[test]
    fn nonexistent_program_convert_is_spawn_error() {
        let conv = FfmpegConverter::new("definitely-not-an-installed-converter-7f3a");
        let err = conv
            .convert(Path::new("a.mp3"), Path::new("a.wav"))
            .unwrap_err();
        assert!(matches!(err, ConvertError::Spawn { .. }));
    }

    #[test]
    fn install_hint_covers_three_platforms() {
        let hint = install_hint("ffmpeg");
        assert!(hint.contains("brew install ffmpeg"));
        assert!(hint.contains("sudo apt-get install ffmpeg"));
        assert!(hint.contains("choco install ffmpeg"));
    }

    #[test]
    fn default_format_is_pcm16_mono_16k() {
        let f = TargetFormat::default();
        assert_eq!(f.sample_rate, 16_000);
        assert_eq!(f.channels, 1);
        assert_eq!(f.codec, "pcm_s16le");
    }
}
