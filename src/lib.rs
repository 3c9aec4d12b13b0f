//! Legible: readability and color-contrast analysis for text authoring tools
//!
//! This library provides the two pure computation engines behind a live
//! writing aid: WCAG contrast checking for a foreground/background color
//! pair, and readability statistics plus heuristic style suggestions for
//! the typed text. Both engines are stateless functions of their input;
//! the presentation layer calls them synchronously on every change.

pub mod analyzer;
pub mod config;
pub mod contrast;
pub mod reporter;

use serde::{Deserialize, Serialize};

/// The combined result of analyzing the current text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextAnalysis {
    /// Readability statistics for the full text
    pub readability: ReadabilityStats,
    /// Style findings: sentence-level first, then word-level
    pub suggestions: Vec<Suggestion>,
}

impl TextAnalysis {
    /// True when the input had no words. Hosts use this to distinguish
    /// "no text yet" from "no issues found" when `suggestions` is empty.
    pub fn is_empty(&self) -> bool {
        self.readability.word_count == 0
    }
}

/// Readability statistics derived from the current text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadabilityStats {
    /// Number of whitespace-delimited words
    pub word_count: usize,
    /// Number of sentences, floored at 1
    pub sentence_count: usize,
    /// Total syllables across all words (each word counts at least 1)
    pub syllable_count: usize,
    /// Flesch-Kincaid grade, absent when the text has no words
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<FleschKincaid>,
    /// Estimated reading time in whole minutes (0 for empty text)
    pub reading_time_minutes: usize,
    /// Position in [0, 100] for a readability gauge pointer
    pub gauge_position: f64,
}

/// Flesch-Kincaid readability grade
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FleschKincaid {
    /// Raw formula output, kept for precise display
    pub score: f64,
    /// Display grade: round(score) clamped to zero
    pub grade_level: u32,
}

/// A single style finding with an actionable fix
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    /// Heuristic that produced this finding
    pub rule: StyleRule,
    /// 1-indexed sentence the finding refers to (None for word-level findings)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentence: Option<usize>,
    /// Human-readable description of the problem
    pub issue: String,
    /// Actionable tip for resolving it
    pub fix: String,
}

/// Style heuristics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleRule {
    /// Sentence exceeds the configured character budget
    SentenceTooLong,
    /// Sentence does not start with a capital letter
    MissingCapitalization,
    /// Sentence does not end with `.`, `!`, or `?`
    MissingPunctuation,
    /// Token contains characters outside the allowed set
    UnusualCharacters,
}

impl std::fmt::Display for StyleRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StyleRule::SentenceTooLong => write!(f, "sentence-too-long"),
            StyleRule::MissingCapitalization => write!(f, "missing-capitalization"),
            StyleRule::MissingPunctuation => write!(f, "missing-punctuation"),
            StyleRule::UnusualCharacters => write!(f, "unusual-characters"),
        }
    }
}

/// Public API: analyze a text snapshot with the default configuration.
///
/// Recomputes everything from scratch; call it on each text change.
pub fn analyze_text(text: &str) -> TextAnalysis {
    analyzer::AnalysisEngine::new().analyze(text)
}

/// Public API: check the WCAG contrast of a foreground/background pair
/// given as hex strings (`#rrggbb` or `rrggbb`, case-insensitive).
pub fn check_contrast(
    fg: &str,
    bg: &str,
) -> Result<contrast::ContrastResult, contrast::ColorParseError> {
    let fg: contrast::Rgb = fg.parse()?;
    let bg: contrast::Rgb = bg.parse()?;
    Ok(contrast::ContrastResult::between(fg, bg))
}
