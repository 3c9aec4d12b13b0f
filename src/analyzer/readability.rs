//! Readability statistics: syllable counting and the Flesch-Kincaid grade.

use super::tokenize;
use crate::config::AnalysisConfig;
use crate::{FleschKincaid, ReadabilityStats};
use regex::Regex;
use std::sync::OnceLock;

fn vowel_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[aeiouy]+").unwrap())
}

/// Count syllables as maximal vowel-letter runs (`y` counts as a vowel),
/// floored at 1 so vowel-less tokens still contribute to the formula.
pub fn count_syllables(word: &str) -> usize {
    let lower = word.to_lowercase();
    vowel_runs().find_iter(&lower).count().max(1)
}

/// Flesch-Kincaid grade formula. Callers must guard `word_count > 0`;
/// `sentence_count` is already floored at 1 by [`analyze`].
fn flesch_kincaid(word_count: usize, sentence_count: usize, syllable_count: usize) -> FleschKincaid {
    let words = word_count as f64;
    let sentences = sentence_count as f64;
    let syllables = syllable_count as f64;
    let score = 0.39 * (words / sentences) + 11.8 * (syllables / words) - 15.59;
    FleschKincaid {
        score,
        grade_level: score.round().max(0.0) as u32,
    }
}

/// Compute the full statistics block for a text snapshot.
///
/// Empty or whitespace-only text produces the "no stats" state: zero
/// words, no grade, zero reading time. The grade formula is never invoked
/// with a zero word count.
pub fn analyze(text: &str, config: &AnalysisConfig) -> ReadabilityStats {
    let words = tokenize::words(text);
    let word_count = words.len();
    let sentence_count = tokenize::sentences(text).len().max(1);
    let syllable_count: usize = words.iter().map(|w| count_syllables(w)).sum();

    let grade = if word_count == 0 {
        None
    } else {
        Some(flesch_kincaid(word_count, sentence_count, syllable_count))
    };

    let gauge_position = match grade {
        Some(fk) => {
            let cap = config.gauge_max_grade.max(1);
            f64::from(fk.grade_level.min(cap)) / f64::from(cap) * 100.0
        }
        None => 0.0,
    };

    ReadabilityStats {
        word_count,
        sentence_count,
        syllable_count,
        grade,
        reading_time_minutes: word_count.div_ceil(config.reading_speed_wpm.max(1)),
        gauge_position,
    }
}
