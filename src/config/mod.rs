//! Analysis configuration
//!
//! The host application constructs or deserializes this and hands it to
//! the engine; nothing here touches the filesystem or environment.

use serde::Deserialize;

fn default_max_sentence_length() -> usize {
    200
}

fn default_reading_speed_wpm() -> usize {
    200
}

fn default_gauge_max_grade() -> u32 {
    15
}

fn default_extra_allowed_characters() -> String {
    ".,!?'-".to_string()
}

/// Tunable thresholds for the text analysis engine
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisConfig {
    /// Character budget per sentence before the too-long rule fires
    #[serde(default = "default_max_sentence_length")]
    pub max_sentence_length: usize,

    /// Words per minute used for the reading-time estimate
    #[serde(default = "default_reading_speed_wpm")]
    pub reading_speed_wpm: usize,

    /// Grade level at which the readability gauge pins to 100
    #[serde(default = "default_gauge_max_grade")]
    pub gauge_max_grade: u32,

    /// Characters allowed in tokens beyond ASCII alphanumerics
    #[serde(default = "default_extra_allowed_characters")]
    pub extra_allowed_characters: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_sentence_length: default_max_sentence_length(),
            reading_speed_wpm: default_reading_speed_wpm(),
            gauge_max_grade: default_gauge_max_grade(),
            extra_allowed_characters: default_extra_allowed_characters(),
        }
    }
}

impl AnalysisConfig {
    /// Predicate used by the word-format rule: is this character allowed
    /// inside a token?
    pub fn is_allowed_word_char(&self, c: char) -> bool {
        c.is_ascii_alphanumeric() || self.extra_allowed_characters.contains(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_deserializes_to_defaults() {
        let config: AnalysisConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.max_sentence_length, 200);
        assert_eq!(config.reading_speed_wpm, 200);
        assert_eq!(config.gauge_max_grade, 15);
        assert_eq!(config.extra_allowed_characters, ".,!?'-");
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config: AnalysisConfig =
            serde_json::from_str(r#"{ "maxSentenceLength": 120 }"#).unwrap();
        assert_eq!(config.max_sentence_length, 120);
        assert_eq!(config.reading_speed_wpm, 200);
    }

    #[test]
    fn default_matches_empty_deserialization() {
        let from_json: AnalysisConfig = serde_json::from_str("{}").unwrap();
        let from_default = AnalysisConfig::default();
        assert_eq!(
            from_json.max_sentence_length,
            from_default.max_sentence_length
        );
        assert_eq!(
            from_json.extra_allowed_characters,
            from_default.extra_allowed_characters
        );
    }

    #[test]
    fn allowed_char_predicate_covers_default_set() {
        let config = AnalysisConfig::default();
        for c in ['a', 'Z', '0', '.', ',', '!', '?', '\'', '-'] {
            assert!(config.is_allowed_word_char(c), "{c:?} should be allowed");
        }
        for c in ['@', ';', '#', 'é', ' '] {
            assert!(!config.is_allowed_word_char(c), "{c:?} should be flagged");
        }
    }
}
