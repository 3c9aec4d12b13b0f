//! Analysis engine - orchestrates tokenization, readability, and rules

use super::rules::{sentence_rules, SentenceRule, WordFormatRule};
use super::{readability, tokenize};
use crate::config::AnalysisConfig;
use crate::{ReadabilityStats, Suggestion, TextAnalysis};

/// Runs the full text analysis pipeline for one input snapshot.
///
/// Holds only configuration and the fixed rule registry; every call
/// recomputes from scratch, so repeated calls with the same input give
/// identical output.
pub struct AnalysisEngine {
    config: AnalysisConfig,
    sentence_rules: Vec<Box<dyn SentenceRule>>,
    word_rule: WordFormatRule,
}

impl AnalysisEngine {
    /// Create an engine with the default configuration
    pub fn new() -> Self {
        Self::with_config(AnalysisConfig::default())
    }

    /// Create an engine with a custom configuration
    pub fn with_config(config: AnalysisConfig) -> Self {
        Self {
            config,
            sentence_rules: sentence_rules(),
            word_rule: WordFormatRule::new(),
        }
    }

    /// Full analysis: readability statistics plus style suggestions.
    pub fn analyze(&self, text: &str) -> TextAnalysis {
        TextAnalysis {
            readability: self.readability(text),
            suggestions: self.suggestions(text),
        }
    }

    /// Readability statistics only.
    pub fn readability(&self, text: &str) -> ReadabilityStats {
        readability::analyze(text, &self.config)
    }

    /// Style suggestions only. Blank input yields no findings. Otherwise
    /// sentence findings come first (per sentence, rules in registry
    /// order), then word-level findings in token order.
    pub fn suggestions(&self, text: &str) -> Vec<Suggestion> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let mut suggestions = Vec::new();
        for (idx, sentence) in tokenize::sentences_with_punctuation(text).iter().enumerate() {
            for rule in &self.sentence_rules {
                if let Some(found) = rule.check(sentence, idx + 1, &self.config) {
                    suggestions.push(found);
                }
            }
        }
        suggestions.extend(self.word_rule.check_text(text, &self.config));
        suggestions
    }
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new()
    }
}
