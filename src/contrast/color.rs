//! Hex color parsing

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A 24-bit sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Error for a malformed hex color string.
///
/// The reference behavior here was lenient numeric parsing that silently
/// produced garbage luminance; malformed input is rejected instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// Input was not exactly six hex digits after the optional leading `#`
    #[error("expected 6 hex digits, got {0}")]
    InvalidLength(usize),
    /// Input contained a character outside 0-9, a-f, A-F
    #[error("invalid hex digit {0:?}")]
    InvalidDigit(char),
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if let Some(bad) = hex.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(bad));
        }
        if hex.len() != 6 {
            return Err(ColorParseError::InvalidLength(hex.len()));
        }
        let value = u32::from_str_radix(hex, 16)
            .map_err(|_| ColorParseError::InvalidLength(hex.len()))?;
        Ok(Self {
            r: (value >> 16) as u8,
            g: (value >> 8) as u8,
            b: value as u8,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_and_without_hash() {
        assert_eq!("#ff8000".parse::<Rgb>().unwrap(), Rgb::new(255, 128, 0));
        assert_eq!("ff8000".parse::<Rgb>().unwrap(), Rgb::new(255, 128, 0));
    }

    #[test]
    fn parsing_is_case_insensitive() {
        assert_eq!(
            "#FF8000".parse::<Rgb>().unwrap(),
            "#ff8000".parse::<Rgb>().unwrap()
        );
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(
            "#fff".parse::<Rgb>(),
            Err(ColorParseError::InvalidLength(3))
        );
        assert_eq!(
            "#ff80001".parse::<Rgb>(),
            Err(ColorParseError::InvalidLength(7))
        );
        assert_eq!("".parse::<Rgb>(), Err(ColorParseError::InvalidLength(0)));
    }

    #[test]
    fn rejects_non_hex_digits() {
        assert_eq!(
            "#ff80g0".parse::<Rgb>(),
            Err(ColorParseError::InvalidDigit('g'))
        );
        assert_eq!(
            "#ff 000".parse::<Rgb>(),
            Err(ColorParseError::InvalidDigit(' '))
        );
    }

    #[test]
    fn rejects_non_ascii_without_panicking() {
        assert!("#ffffé".parse::<Rgb>().is_err());
    }

    #[test]
    fn display_round_trips() {
        let color = Rgb::new(30, 41, 59);
        assert_eq!(color.to_string(), "#1e293b");
        assert_eq!(color.to_string().parse::<Rgb>().unwrap(), color);
    }
}
