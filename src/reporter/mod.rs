//! Reporter module for output formatting
//!
//! The engines return plain data; these formatters are the presentation
//! layer for hosts that render to a terminal or ship JSON to a UI.

pub mod console;
pub mod json;

pub use console::ConsoleReporter;
pub use json::JsonReporter;
