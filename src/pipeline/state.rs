//! Pipeline stage tracking and the end-of-run summary.

use std::path::PathBuf;

use crate::catalog::Category;
use crate::console;

// ---------------------------------------------------------------------------
// SetupStage
// ---------------------------------------------------------------------------

/// Stages of a setup run, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum SetupStage {
    /// Nothing has run yet.
    #[default]
    Idle,
    /// Creating the corpus directories.
    Preparing,
    /// Fetching samples.
    Downloading,
    /// Probing for the external converter.
    CheckingConverter,
    /// Transcoding MP3 → WAV.
    Converting,
    /// Writing `test_cases.json`.
    WritingMetadata,
    /// All stages finished.
    Complete,
}

impl SetupStage {
    /// A short label for log lines.
    pub fn label(&self) -> &'static str {
        match self {
            SetupStage::Idle => "Idle",
            SetupStage::Preparing => "Preparing directories",
            SetupStage::Downloading => "Downloading",
            SetupStage::CheckingConverter => "Checking converter",
            SetupStage::Converting => "Converting",
            SetupStage::WritingMetadata => "Writing metadata",
            SetupStage::Complete => "Complete",
        }
    }
}

// ---------------------------------------------------------------------------
// SetupSummary
// ---------------------------------------------------------------------------

/// Aggregate counters of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupSummary {
    pub downloaded: usize,
    pub download_attempts: usize,
    pub converted: usize,
    pub conversion_attempts: usize,
    pub test_cases: usize,
    pub manifest_path: PathBuf,
}

impl SetupSummary {
    /// The "Setup Complete!" report printed at the end of a run.
    pub fn render(&self) -> String {
        let mut out = console::header("Setup Complete!");
        out.push('\n');
        out.push_str("Summary:\n");
        out.push_str(&format!("  • Downloaded: {} MP3 files\n", self.downloaded));
        out.push_str(&format!("  • Converted: {} WAV files\n", self.converted));
        out.push_str(&format!(
            "  • Test cases: {}\n\n",
            self.manifest_path.display()
        ));

        out.push_str("Audio format:\n");
        out.push_str("  • Sample rate: 16kHz\n");
        out.push_str("  • Channels: Mono\n");
        out.push_str("  • Format: 16-bit PCM WAV\n\n");

        out.push_str("Next steps:\n");
        out.push_str("  1. Set up Azure Speech Service (see docs/test-azure-stt.md)\n");
        out.push_str("  2. Get your Azure API key\n");
        out.push_str("  3. Run: dart scripts/test_azure_stt.dart\n\n");

        out.push_str("Test categories:\n");
        for category in Category::ALL {
            out.push_str(&format!("  • {}\n", category.label()));
        }
        out
    }
}
