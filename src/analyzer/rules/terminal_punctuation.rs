//! Sentences should end with a terminator.

use super::SentenceRule;
use crate::config::AnalysisConfig;
use crate::{StyleRule, Suggestion};

const TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Rule flagging sentences that do not end with `.`, `!`, or `?`
pub struct TerminalPunctuationRule;

impl TerminalPunctuationRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalPunctuationRule {
    fn default() -> Self {
        Self::new()
    }
}

impl SentenceRule for TerminalPunctuationRule {
    fn name(&self) -> &'static str {
        "missing-punctuation"
    }

    fn check(&self, sentence: &str, index: usize, _config: &AnalysisConfig) -> Option<Suggestion> {
        let last = sentence.chars().last()?;
        if TERMINATORS.contains(&last) {
            return None;
        }
        Some(Suggestion {
            rule: StyleRule::MissingPunctuation,
            sentence: Some(index),
            issue: format!("Sentence {}: Missing proper punctuation at the end.", index),
            fix: "Add a period, exclamation mark, or question mark at the end.".to_string(),
        })
    }
}
