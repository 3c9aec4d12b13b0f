//! JSON reporter for machine-readable output

use crate::contrast::ContrastResult;
use crate::TextAnalysis;

/// Reporter for JSON output
pub struct JsonReporter {
    /// Whether to pretty-print JSON
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Enable pretty-printing
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Report a text analysis as JSON
    pub fn report_analysis(&self, analysis: &TextAnalysis) -> String {
        self.serialize(analysis)
    }

    /// Report a contrast result as JSON
    pub fn report_contrast(&self, result: &ContrastResult) -> String {
        self.serialize(result)
    }

    fn serialize<T: serde::Serialize>(&self, value: &T) -> String {
        if self.pretty {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
        } else {
            serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
        }
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}
