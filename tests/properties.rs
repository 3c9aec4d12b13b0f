//! Property tests for engine invariants

use legible::analyzer::readability::count_syllables;
use legible::analyzer::AnalysisEngine;
use legible::contrast::{contrast_ratio, relative_luminance, ContrastResult, Rgb, Tier};
use proptest::prelude::*;

fn arb_rgb() -> impl Strategy<Value = Rgb> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Rgb::new(r, g, b))
}

proptest! {
    #[test]
    fn luminance_stays_in_unit_range(color in arb_rgb()) {
        let lum = relative_luminance(color);
        prop_assert!(lum >= 0.0 && lum <= 1.0 + 1e-12);
    }

    #[test]
    fn ratio_stays_in_wcag_range(a in arb_rgb(), b in arb_rgb()) {
        let ratio = contrast_ratio(a, b);
        prop_assert!((1.0..=21.0).contains(&ratio));
    }

    #[test]
    fn ratio_is_symmetric(a in arb_rgb(), b in arb_rgb()) {
        prop_assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a));
    }

    #[test]
    fn ratio_of_color_with_itself_is_one(color in arb_rgb()) {
        prop_assert_eq!(contrast_ratio(color, color), 1.0);
    }

    #[test]
    fn ratio_is_rounded_to_two_decimals(a in arb_rgb(), b in arb_rgb()) {
        let ratio = contrast_ratio(a, b);
        prop_assert_eq!((ratio * 100.0).round() / 100.0, ratio);
    }

    #[test]
    fn classification_is_total(a in arb_rgb(), b in arb_rgb()) {
        let result = ContrastResult::between(a, b);
        // Exactly one tier, consistent with the rounded ratio.
        prop_assert_eq!(result.tier, Tier::from_ratio(result.ratio));
    }

    #[test]
    fn analysis_never_panics(text in ".{0,400}") {
        let _ = AnalysisEngine::new().analyze(&text);
    }

    #[test]
    fn analysis_is_pure(text in ".{0,200}") {
        let engine = AnalysisEngine::new();
        prop_assert_eq!(engine.analyze(&text), engine.analyze(&text));
    }

    #[test]
    fn sentence_findings_always_precede_word_findings(text in ".{0,200}") {
        let suggestions = AnalysisEngine::new().suggestions(&text);
        let mut seen_word_level = false;
        for suggestion in &suggestions {
            if suggestion.sentence.is_none() {
                seen_word_level = true;
            } else {
                prop_assert!(!seen_word_level, "sentence finding after word finding");
            }
        }
    }

    #[test]
    fn sentence_references_are_one_indexed(text in ".{0,200}") {
        for suggestion in AnalysisEngine::new().suggestions(&text) {
            if let Some(n) = suggestion.sentence {
                prop_assert!(n >= 1);
            }
        }
    }

    #[test]
    fn syllable_count_is_at_least_one(word in "[a-zA-Z]{1,30}") {
        prop_assert!(count_syllables(&word) >= 1);
    }

    #[test]
    fn grade_level_is_never_negative(text in "[a-zA-Z .!?]{1,300}") {
        let stats = AnalysisEngine::new().readability(&text);
        if let Some(grade) = stats.grade {
            // u32 already, but the raw score may be negative.
            prop_assert_eq!(grade.grade_level, grade.score.round().max(0.0) as u32);
        }
    }

    #[test]
    fn sentence_count_is_floored_at_one(text in ".{0,200}") {
        let stats = AnalysisEngine::new().readability(&text);
        prop_assert!(stats.sentence_count >= 1);
    }

    #[test]
    fn gauge_position_is_bounded(text in ".{0,200}") {
        let stats = AnalysisEngine::new().readability(&text);
        prop_assert!((0.0..=100.0).contains(&stats.gauge_position));
    }
}
