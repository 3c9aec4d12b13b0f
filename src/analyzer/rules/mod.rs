//! Style heuristics for sentences and tokens.
//!
//! Sentence rules run once per logical sentence; the order returned by
//! [`sentence_rules`] is the order findings are emitted for a sentence.
//! The word-format check runs over the raw token stream of the full text
//! and its findings always follow the sentence-level ones.

pub mod capitalization;
pub mod sentence_length;
pub mod terminal_punctuation;
pub mod word_format;

pub use capitalization::CapitalizationRule;
pub use sentence_length::SentenceLengthRule;
pub use terminal_punctuation::TerminalPunctuationRule;
pub use word_format::WordFormatRule;

use crate::config::AnalysisConfig;
use crate::Suggestion;

/// A heuristic check applied to one logical sentence (trailing terminator
/// included when present).
pub trait SentenceRule {
    /// Name of the rule
    fn name(&self) -> &'static str;

    /// Check one sentence. `index` is 1-based and appears in finding text.
    fn check(&self, sentence: &str, index: usize, config: &AnalysisConfig) -> Option<Suggestion>;
}

/// The sentence rules in emission order: length, capitalization,
/// terminal punctuation.
pub fn sentence_rules() -> Vec<Box<dyn SentenceRule>> {
    vec![
        Box::new(SentenceLengthRule::new()),
        Box::new(CapitalizationRule::new()),
        Box::new(TerminalPunctuationRule::new()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_order_matches_check_order() {
        let names: Vec<&str> = sentence_rules().iter().map(|r| r.name()).collect();
        assert_eq!(
            names,
            vec![
                "sentence-too-long",
                "missing-capitalization",
                "missing-punctuation"
            ]
        );
    }
}
