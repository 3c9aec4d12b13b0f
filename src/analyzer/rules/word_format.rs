//! Allowed-character check for individual tokens.
//!
//! This is a character-set filter, not a spellchecker: a token is flagged
//! when it contains any character outside ASCII alphanumerics plus the
//! configured extras. It runs over the raw token stream of the full text,
//! not per sentence.

use crate::analyzer::tokenize;
use crate::config::AnalysisConfig;
use crate::{StyleRule, Suggestion};

/// Rule flagging tokens with characters outside the allowed set
pub struct WordFormatRule;

impl WordFormatRule {
    pub fn new() -> Self {
        Self
    }

    /// Name of the rule
    pub fn name(&self) -> &'static str {
        "unusual-characters"
    }

    /// Check every whitespace-delimited token of the text, in order, and
    /// emit one finding per offending token naming it literally.
    pub fn check_text(&self, text: &str, config: &AnalysisConfig) -> Vec<Suggestion> {
        tokenize::words(text)
            .into_iter()
            .filter(|token| !token.chars().all(|c| config.is_allowed_word_char(c)))
            .map(|token| Suggestion {
                rule: StyleRule::UnusualCharacters,
                sentence: None,
                issue: format!("Check spelling/format of: \"{}\"", token),
                fix: "Correct spelling or remove unusual characters.".to_string(),
            })
            .collect()
    }
}

impl Default for WordFormatRule {
    fn default() -> Self {
        Self::new()
    }
}
