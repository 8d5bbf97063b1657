//! Arabic-text validation for expected transcripts.
//!
//! A transcript is accepted when:
//!
//! 1. it is **non-empty**,
//! 2. it contains **at least one Arabic letter or mark**,
//! 3. every character is **Arabic or whitespace**.
//!
//! Diacritics (harakat, shadda, sukun, superscript alef) all live inside the
//! Arabic blocks, so fully vocalised Quranic text passes unchanged.

use super::CatalogError;

// ---------------------------------------------------------------------------
// Unicode ranges
// ---------------------------------------------------------------------------

/// Arabic, Arabic Supplement, Arabic Extended-A and the two presentation-form
/// blocks.
const ARABIC_RANGES: &[(char, char)] = &[
    ('\u{0600}', '\u{06FF}'),
    ('\u{0750}', '\u{077F}'),
    ('\u{08A0}', '\u{08FF}'),
    ('\u{FB50}', '\u{FDFF}'),
    ('\u{FE70}', '\u{FEFF}'),
];

/// Returns `true` when `c` falls inside one of the Arabic blocks.
pub fn is_arabic(c: char) -> bool {
    ARABIC_RANGES.iter().any(|&(lo, hi)| (lo..=hi).contains(&c))
}

/// Validate that `text` is a usable Arabic transcript.
///
/// # Errors
///
/// Returns [`CatalogError::Validation`] describing the first rule that fails.
///
/// ```
/// use quran_audio_setup::catalog::validate_arabic_text;
///
/// assert!(validate_arabic_text("وَالْعَصْرِ").is_ok());
/// assert!(validate_arabic_text("").is_err());
/// assert!(validate_arabic_text("by the time").is_err());
/// ```
pub fn validate_arabic_text(text: &str) -> Result<(), CatalogError> {
    if text.trim().is_empty() {
        return Err(CatalogError::Validation("text must not be empty".into()));
    }

    if !text.chars().any(is_arabic) {
        return Err(CatalogError::Validation(
            "text contains no Arabic characters".into(),
        ));
    }

    if let Some(bad) = text.chars().find(|&c| !is_arabic(c) && !c.is_whitespace()) {
        return Err(CatalogError::Validation(format!(
            "unexpected character {bad:?} (U+{:04X})",
            bad as u32
        )));
    }

    Ok(())
}
