//! WCAG contrast checking
//!
//! Implements the WCAG 2.1 relative luminance and contrast ratio formulas
//! and classifies a color pair into a compliance tier. Everything here is
//! a pure function; the engine is cheap enough to run on every color pick.

mod color;

pub use color::{ColorParseError, Rgb};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Convert an 8-bit sRGB channel to linear light.
fn srgb_to_linear(channel: u8) -> f64 {
    let v = f64::from(channel) / 255.0;
    if v <= 0.03928 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance per WCAG 2.1:
/// `L = 0.2126 * R + 0.7152 * G + 0.0722 * B` over linearized channels.
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
pub fn relative_luminance(color: Rgb) -> f64 {
    0.2126 * srgb_to_linear(color.r)
        + 0.7152 * srgb_to_linear(color.g)
        + 0.0722 * srgb_to_linear(color.b)
}

/// WCAG 2.1 contrast ratio between two colors, rounded to two decimals.
///
/// `(L_lighter + 0.05) / (L_darker + 0.05)`; range [1.00, 21.00] and
/// independent of argument order.
pub fn contrast_ratio(fg: Rgb, bg: Rgb) -> f64 {
    let lf = relative_luminance(fg);
    let lb = relative_luminance(bg);
    let (lighter, darker) = if lf >= lb { (lf, lb) } else { (lb, lf) };
    let ratio = (lighter + 0.05) / (darker + 0.05);
    (ratio * 100.0).round() / 100.0
}

/// WCAG compliance tier for a contrast ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tier {
    Fail,
    AaLarge,
    Aa,
    Aaa,
}

impl Tier {
    /// Classify a rounded contrast ratio. Boundaries are inclusive on the
    /// passing side: exactly 3.0 is `AaLarge`, 4.5 is `Aa`, 7.0 is `Aaa`.
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio < 3.0 {
            Tier::Fail
        } else if ratio < 4.5 {
            Tier::AaLarge
        } else if ratio < 7.0 {
            Tier::Aa
        } else {
            Tier::Aaa
        }
    }

    /// Fixed status line for this tier.
    pub fn status(&self) -> &'static str {
        match self {
            Tier::Fail => "Contrast fails WCAG standards.",
            Tier::AaLarge => "AA Large Text (≥18pt) only. Improve contrast.",
            Tier::Aa => "AA compliance. Sufficient for normal text.",
            Tier::Aaa => "AAA compliance. Ideal contrast.",
        }
    }

    /// Whether the host should surface its fix-contrast affordances.
    pub fn needs_fix(&self) -> bool {
        matches!(self, Tier::Fail)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Fail => write!(f, "FAIL"),
            Tier::AaLarge => write!(f, "AA Large"),
            Tier::Aa => write!(f, "AA"),
            Tier::Aaa => write!(f, "AAA"),
        }
    }
}

/// Result of checking a foreground/background pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastResult {
    /// Contrast ratio rounded to two decimals
    pub ratio: f64,
    /// Compliance tier for the rounded ratio
    pub tier: Tier,
}

impl ContrastResult {
    /// Compute the ratio and tier for a color pair.
    pub fn between(fg: Rgb, bg: Rgb) -> Self {
        let ratio = contrast_ratio(fg, bg);
        Self {
            ratio,
            tier: Tier::from_ratio(ratio),
        }
    }
}
