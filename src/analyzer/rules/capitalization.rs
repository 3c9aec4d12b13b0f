//! Sentences should open with a capital letter.

use super::SentenceRule;
use crate::config::AnalysisConfig;
use crate::{StyleRule, Suggestion};

/// Rule flagging sentences whose first character is not uppercase
pub struct CapitalizationRule;

impl CapitalizationRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CapitalizationRule {
    fn default() -> Self {
        Self::new()
    }
}

/// A character passes when it equals its own uppercase mapping, so digits
/// and punctuation pass trivially. That is the accepted heuristic, not a
/// defect to tighten.
fn is_capitalized(first: char) -> bool {
    let mut upper = first.to_uppercase();
    upper.next() == Some(first) && upper.next().is_none()
}

impl SentenceRule for CapitalizationRule {
    fn name(&self) -> &'static str {
        "missing-capitalization"
    }

    fn check(&self, sentence: &str, index: usize, _config: &AnalysisConfig) -> Option<Suggestion> {
        let first = sentence.chars().next()?;
        if is_capitalized(first) {
            return None;
        }
        Some(Suggestion {
            rule: StyleRule::MissingCapitalization,
            sentence: Some(index),
            issue: format!("Sentence {}: Should start with a capital letter.", index),
            fix: "Capitalize the first letter of this sentence.".to_string(),
        })
    }
}
