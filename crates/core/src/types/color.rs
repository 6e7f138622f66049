//! Color swatch types.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Errors that can occur when parsing a [`HexColor`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum HexColorError {
    /// The input does not start with `#`.
    #[error("hex color must start with '#'")]
    MissingHash,
    /// The input does not have exactly six digits after `#`.
    #[error("hex color must have 6 digits (got {0})")]
    WrongLength(usize),
    /// The input contains a character that is not a hex digit.
    #[error("hex color contains non-hex character {0:?}")]
    InvalidDigit(char),
}

/// A 6-digit color code prefixed with `#`, e.g. `#1e3a8a`.
///
/// The original casing is preserved; comparison is on the stored string.
///
/// ```
/// use orderflow_core::HexColor;
///
/// assert!(HexColor::parse("#1e3a8a").is_ok());
/// assert!(HexColor::parse("#FFFFFF").is_ok());
/// assert!(HexColor::parse("1e3a8a").is_err());
/// assert!(HexColor::parse("#fff").is_err());
/// ```
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct HexColor(String);

impl HexColor {
    /// Parse a `HexColor` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is missing the `#` prefix, does not have
    /// exactly six digits, or contains a non-hex character.
    pub fn parse(s: &str) -> Result<Self, HexColorError> {
        let digits = s.strip_prefix('#').ok_or(HexColorError::MissingHash)?;

        let len = digits.chars().count();
        if len != 6 {
            return Err(HexColorError::WrongLength(len));
        }

        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(HexColorError::InvalidDigit(bad));
        }

        Ok(Self(s.to_string()))
    }

    /// Get the color code including the `#` prefix.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for HexColor {
    type Err = HexColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// A named color option on an order, e.g. "Navy Blue" / `#1e3a8a`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColorSwatch {
    /// Display name.
    pub name: String,
    /// Color code.
    pub hex: HexColor,
}
