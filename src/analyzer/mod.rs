//! Text analysis engine: tokenization, readability, style rules

pub mod engine;
pub mod readability;
pub mod rules;
pub mod tokenize;

pub use engine::AnalysisEngine;
