//! Console reporter with colored output

use crate::contrast::{ContrastResult, Tier};
use crate::TextAnalysis;
use colored::Colorize;

const GAUGE_WIDTH: usize = 20;

/// Reporter for terminal output
pub struct ConsoleReporter {
    /// Whether to use colors
    use_colors: bool,
}

impl ConsoleReporter {
    /// Create a new console reporter
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    /// Disable colors
    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    /// Print the contrast ratio line and its status.
    pub fn report_contrast(&self, result: &ContrastResult) {
        println!(
            "{} ({})",
            self.ratio_label(result),
            result.tier
        );
        println!("   {}", result.tier.status());
        if result.tier.needs_fix() {
            println!(
                "   {}",
                self.dim("Darken the foreground or lighten the background.")
            );
        }
    }

    /// Print readability stats and suggestions for one text snapshot.
    pub fn report_analysis(&self, analysis: &TextAnalysis) {
        let stats = &analysis.readability;

        if analysis.is_empty() {
            println!(
                "{}",
                self.dim(
                    "Start typing and suggestions will appear here based on grammar, \
                     clarity, sentence length, and structure."
                )
            );
            return;
        }

        if let Some(grade) = &stats.grade {
            println!(
                "   Grade level: {}  (Flesch-Kincaid {:.2})",
                grade.grade_level, grade.score
            );
            println!("   {}", self.gauge_bar(stats.gauge_position));
        }
        println!(
            "   Words: {} | Sentences: {} | Reading time: {} min",
            stats.word_count, stats.sentence_count, stats.reading_time_minutes
        );
        println!();

        if analysis.suggestions.is_empty() {
            println!("{}", self.ok("No obvious grammar issues detected!"));
            return;
        }

        for suggestion in &analysis.suggestions {
            println!("{}", self.warn(&suggestion.issue));
            println!("   {}", self.dim(&format!("Tip: {}", suggestion.fix)));
        }
    }

    fn ratio_label(&self, result: &ContrastResult) -> String {
        let label = format!("Ratio: {:.2}", result.ratio);
        if !self.use_colors {
            return label;
        }
        match result.tier {
            Tier::Fail => label.red().bold().to_string(),
            Tier::AaLarge => label.yellow().to_string(),
            Tier::Aa => label.green().to_string(),
            Tier::Aaa => label.green().bold().to_string(),
        }
    }

    fn gauge_bar(&self, position: f64) -> String {
        let filled = ((position / 100.0) * GAUGE_WIDTH as f64).round() as usize;
        let filled = filled.min(GAUGE_WIDTH);
        format!("[{}{}]", "█".repeat(filled), "░".repeat(GAUGE_WIDTH - filled))
    }

    fn warn(&self, text: &str) -> String {
        if self.use_colors {
            text.yellow().to_string()
        } else {
            text.to_string()
        }
    }

    fn ok(&self, text: &str) -> String {
        if self.use_colors {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.use_colors {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}
