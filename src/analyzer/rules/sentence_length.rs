//! Overlong sentences hurt clarity.

use super::SentenceRule;
use crate::config::AnalysisConfig;
use crate::{StyleRule, Suggestion};

/// Rule flagging sentences longer than the configured character budget
pub struct SentenceLengthRule;

impl SentenceLengthRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SentenceLengthRule {
    fn default() -> Self {
        Self::new()
    }
}

impl SentenceRule for SentenceLengthRule {
    fn name(&self) -> &'static str {
        "sentence-too-long"
    }

    fn check(&self, sentence: &str, index: usize, config: &AnalysisConfig) -> Option<Suggestion> {
        // Character count includes the trailing punctuation run.
        if sentence.chars().count() <= config.max_sentence_length {
            return None;
        }
        Some(Suggestion {
            rule: StyleRule::SentenceTooLong,
            sentence: Some(index),
            issue: format!("Sentence {}: Too long.", index),
            fix: "Consider splitting this sentence into two or more shorter sentences for clarity."
                .to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_flags_sentence_over_budget() {
        let rule = SentenceLengthRule::new();
        let long = "a".repeat(201);
        let found = rule.check(&long, 2, &AnalysisConfig::default()).unwrap();
        assert_eq!(found.rule, StyleRule::SentenceTooLong);
        assert_eq!(found.sentence, Some(2));
        assert!(found.issue.contains("Sentence 2"));
    }

    #[test]
    fn negative_budget_is_inclusive() {
        let rule = SentenceLengthRule::new();
        let at_limit = "a".repeat(200);
        assert!(rule.check(&at_limit, 1, &AnalysisConfig::default()).is_none());
    }

    #[test]
    fn respects_configured_budget() {
        let config: AnalysisConfig =
            serde_json::from_str(r#"{ "maxSentenceLength": 10 }"#).unwrap();
        let rule = SentenceLengthRule::new();
        assert!(rule.check("only nine", 1, &config).is_none());
        assert!(rule.check("eleven chars", 1, &config).is_some());
    }
}
