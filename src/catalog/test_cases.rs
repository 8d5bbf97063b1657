//! Expected transcriptions and the `test_cases.json` document shape.
//!
//! The JSON document is `{"test_cases": [ ... ]}`; each entry serialises its
//! fields in declaration order (`file`, `expected`, `reference`, `category`,
//! `reciter`, `note`) and omits `note` when absent.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{validate_arabic_text, CatalogError};

const BUNDLED_TEST_CASES: &str = include_str!("../../data/test_cases.toml");

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Coarse grouping of test cases used for manual triage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Clear recitations of Al-Fatihah.
    Clear,
    /// Long verses (Ayat al-Kursi).
    Long,
    /// Short verses (Al-Asr, Al-Kawthar).
    Short,
    /// The same verse by different reciters.
    DifferentReciters,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 4] = [
        Category::Clear,
        Category::Long,
        Category::Short,
        Category::DifferentReciters,
    ];

    /// A short human-readable label for the completion summary.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Clear => "Clear recitations (7 verses from Al-Fatihah)",
            Category::Long => "Long verses (Ayat al-Kursi)",
            Category::Short => "Short verses (Al-Asr, Al-Kawthar)",
            Category::DifferentReciters => {
                "Different reciters (Alafasy, Sudais, Husary, Minshawi)"
            }
        }
    }
}

// ---------------------------------------------------------------------------
// VerseRef
// ---------------------------------------------------------------------------

/// A `chapter:verse` identifier such as `2:255`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VerseRef {
    pub chapter: u16,
    pub verse: u16,
}

impl FromStr for VerseRef {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CatalogError::InvalidReference(s.to_string());
        let (chapter, verse) = s.split_once(':').ok_or_else(invalid)?;
        let chapter: u16 = chapter.parse().map_err(|_| invalid())?;
        let verse: u16 = verse.parse().map_err(|_| invalid())?;
        if chapter == 0 || verse == 0 {
            return Err(invalid());
        }
        Ok(Self { chapter, verse })
    }
}

impl fmt::Display for VerseRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.chapter, self.verse)
    }
}

// ---------------------------------------------------------------------------
// TestCase
// ---------------------------------------------------------------------------

/// One expected transcription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    /// Path of the converted WAV, relative to the working directory.
    pub file: String,
    /// Ground-truth transcript (vocalised Arabic).
    pub expected: String,
    /// Verse reference, `chapter:verse`.
    pub reference: String,
    /// Triage category.
    pub category: Category,
    /// Reciter name.
    pub reciter: String,
    /// Optional free-text remark.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl TestCase {
    /// Parsed [`VerseRef`] of this case.
    pub fn verse(&self) -> Result<VerseRef, CatalogError> {
        self.reference.parse()
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let invalid = |reason: String| CatalogError::InvalidTestCase {
            file: self.file.clone(),
            reason,
        };

        if !self.file.ends_with(".wav") {
            return Err(invalid("file must point at a .wav".into()));
        }
        if self.reciter.trim().is_empty() {
            return Err(invalid("reciter must not be empty".into()));
        }
        validate_arabic_text(&self.expected).map_err(|e| invalid(e.to_string()))?;
        self.verse().map_err(|e| invalid(e.to_string()))?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// TestCaseManifest
// ---------------------------------------------------------------------------

/// The `test_cases.json` document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TestCaseManifest {
    pub test_cases: Vec<TestCase>,
}

impl TestCaseManifest {
    /// Number of test cases.
    pub fn len(&self) -> usize {
        self.test_cases.len()
    }

    /// Returns `true` when there are no test cases.
    pub fn is_empty(&self) -> bool {
        self.test_cases.is_empty()
    }

    /// Test cases belonging to `category`.
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &TestCase> {
        self.test_cases
            .iter()
            .filter(move |c| c.category == category)
    }
}

#[derive(Debug, Deserialize)]
struct TestCaseTable {
    #[serde(rename = "test_case", default)]
    test_cases: Vec<TestCase>,
}

/// Parse and validate a test-case table from TOML source.
pub fn parse_manifest(source: &str) -> Result<TestCaseManifest, CatalogError> {
    let table: TestCaseTable = toml::from_str(source)?;
    for case in &table.test_cases {
        case.validate()?;
    }
    Ok(TestCaseManifest {
        test_cases: table.test_cases,
    })
}

/// The test-case table compiled into the binary.
pub fn bundled_manifest() -> Result<TestCaseManifest, CatalogError> {
    parse_manifest(BUNDLED_TEST_CASES)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::bundled_samples;

    fn refs(chapter: u16, verses: std::ops::RangeInclusive<u16>) -> Vec<VerseRef> {
        verses.map(|verse| VerseRef { chapter, verse }).collect()
    }

    #[test]
    fn bundled_manifest_has_seventeen_cases() {
        let manifest = bundled_manifest().expect("bundled manifest parses");
        assert_eq!(manifest.len(), 17);
    }

    #[test]
    fn bundled_references_match_corpus() {
        let manifest = bundled_manifest().expect("parse");
        let mut actual: Vec<VerseRef> = manifest
            .test_cases
            .iter()
            .map(|c| c.verse().expect("valid reference"))
            .collect();
        actual.sort();

        let mut expected = refs(1, 1..=7);
        expected.extend(refs(1, 1..=1).repeat(3));
        expected.extend(refs(2, 255..=255));
        expected.extend(refs(103, 1..=3));
        expected.extend(refs(108, 1..=3));
        expected.sort();

        assert_eq!(actual, expected);
    }

    #[test]
    fn category_counts() {
        let manifest = bundled_manifest().expect("parse");
        assert_eq!(manifest.in_category(Category::Clear).count(), 7);
        assert_eq!(manifest.in_category(Category::Long).count(), 1);
        assert_eq!(manifest.in_category(Category::Short).count(), 6);
        assert_eq!(manifest.in_category(Category::DifferentReciters).count(), 3);
    }

    #[test]
    fn only_ayat_al_kursi_carries_a_note() {
        let manifest = bundled_manifest().expect("parse");
        let noted: Vec<_> = manifest
            .test_cases
            .iter()
            .filter(|c| c.note.is_some())
            .collect();
        assert_eq!(noted.len(), 1);
        assert_eq!(noted[0].reference, "2:255");
    }

    #[test]
    fn alternate_reciters_share_the_basmala() {
        let manifest = bundled_manifest().expect("parse");
        let basmalas: Vec<_> = manifest
            .test_cases
            .iter()
            .filter(|c| c.reference == "1:1")
            .map(|c| c.expected.as_str())
            .collect();
        assert_eq!(basmalas.len(), 4);
        assert!(basmalas.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn every_case_has_a_matching_sample() {
        let samples = bundled_samples().expect("samples");
        let manifest = bundled_manifest().expect("manifest");
        for case in &manifest.test_cases {
            let stem = case
                .file
                .rsplit('/')
                .next()
                .and_then(|name| name.strip_suffix(".wav"))
                .expect("wav file name");
            assert!(
                samples
                    .iter()
                    .any(|s| s.file_name.strip_suffix(".mp3") == Some(stem)),
                "no sample for {}",
                case.file
            );
        }
    }

    #[test]
    fn verse_ref_parsing() {
        let v: VerseRef = "2:255".parse().expect("parse");
        assert_eq!(v, VerseRef { chapter: 2, verse: 255 });
        assert_eq!(v.to_string(), "2:255");

        assert!("2".parse::<VerseRef>().is_err());
        assert!("0:1".parse::<VerseRef>().is_err());
        assert!("a:b".parse::<VerseRef>().is_err());
    }

    #[test]
    fn category_serialises_as_snake_case() {
        let json = serde_json::to_string(&Category::DifferentReciters).expect("json");
        assert_eq!(json, "\"different_reciters\"");
    }

    #[test]
    fn rejects_non_arabic_expected_text() {
        let src = r#"
            [[test_case]]
            file = "test_audio/samples/x.wav"
            expected = "in the name of god"
            reference = "1:1"
            category = "clear"
            reciter = "Someone"
        "#;
        assert!(matches!(
            parse_manifest(src),
            Err(CatalogError::InvalidTestCase { .. })
        ));
    }

    #[test]
    fn rejects_unknown_category() {
        let src = r#"
            [[test_case]]
            file = "test_audio/samples/x.wav"
            expected = "وَالْعَصْرِ"
            reference = "103:1"
            category = "noisy"
            reciter = "Someone"
        "#;
        assert!(matches!(parse_manifest(src), Err(CatalogError::Parse(_))));
    }
}
