// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! RGB color type with strict `#RRGGBB` parsing.
//!
//! LED strips accept colors only in the form `#` followed by exactly six
//! hexadecimal digits. Input is case-insensitive; the stored and displayed
//! form is always upper case.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::ValueError;

lazy_static! {
    static ref HEX_COLOR: Regex = Regex::new(r"^#[0-9A-Fa-f]{6}$").unwrap();
}

/// RGB color with 8-bit channels (0-255).
///
/// # Examples
///
/// ```
/// use lightpanel::types::RgbColor;
///
/// let red = RgbColor::from_hex("#ff0000").unwrap();
/// assert_eq!(red.red(), 255);
/// assert_eq!(red.to_hex_with_hash(), "#FF0000");
///
/// // The hash prefix is mandatory
/// assert!(RgbColor::from_hex("FF0000").is_err());
/// // So is the full six-digit form
/// assert!(RgbColor::from_hex("#F00").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RgbColor {
    red: u8,
    green: u8,
    blue: u8,
}

impl RgbColor {
    /// Creates a new RGB color.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Returns whether `hex` has the `#RRGGBB` form.
    #[must_use]
    pub fn is_valid_hex(hex: &str) -> bool {
        HEX_COLOR.is_match(hex)
    }

    /// Parses an RGB color from a `#RRGGBB` hex string.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidHexColor` if the string is empty, lacks the
    /// leading `#`, is not exactly six digits long, or contains non-hex
    /// characters.
    pub fn from_hex(hex: &str) -> Result<Self, ValueError> {
        if !Self::is_valid_hex(hex) {
            return Err(ValueError::InvalidHexColor(hex.to_string()));
        }

        let digits = &hex[1..];
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ValueError::InvalidHexColor(hex.to_string()))
        };

        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Returns the red component.
    #[must_use]
    pub const fn red(&self) -> u8 {
        self.red
    }

    /// Returns the green component.
    #[must_use]
    pub const fn green(&self) -> u8 {
        self.green
    }

    /// Returns the blue component.
    #[must_use]
    pub const fn blue(&self) -> u8 {
        self.blue
    }

    /// Returns the color as an upper-case hex string with the hash prefix.
    #[must_use]
    pub fn to_hex_with_hash(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }

    /// Pure red (`#FF0000`).
    #[must_use]
    pub const fn red_color() -> Self {
        Self::new(255, 0, 0)
    }

    /// Pure green (`#00FF00`).
    #[must_use]
    pub const fn green_color() -> Self {
        Self::new(0, 255, 0)
    }

    /// Pure blue (`#0000FF`).
    #[must_use]
    pub const fn blue_color() -> Self {
        Self::new(0, 0, 255)
    }

    /// Magenta (`#FF00FF`).
    #[must_use]
    pub const fn magenta() -> Self {
        Self::new(255, 0, 255)
    }

    /// Cyan (`#00FFFF`).
    #[must_use]
    pub const fn cyan() -> Self {
        Self::new(0, 255, 255)
    }

    /// Yellow (`#FFFF00`).
    #[must_use]
    pub const fn yellow() -> Self {
        Self::new(255, 255, 0)
    }

    /// White (`#FFFFFF`).
    #[must_use]
    pub const fn white() -> Self {
        Self::new(255, 255, 255)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex_with_hash())
    }
}

/// Color currently held by an LED strip.
///
/// A fresh strip has not been given an RGB value yet and reports the
/// `White` sentinel, which is not itself a hex color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StripColor {
    /// No RGB color has been set.
    #[default]
    White,
    /// An explicit RGB color.
    Rgb(RgbColor),
}

impl fmt::Display for StripColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::White => f.write_str("White"),
            Self::Rgb(color) => write!(f, "{color}"),
        }
    }
}

impl From<RgbColor> for StripColor {
    fn from(color: RgbColor) -> Self {
        Self::Rgb(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_hex_accepts_mixed_case() {
        let color = RgbColor::from_hex("#Ff5733").unwrap();
        assert_eq!(color.red(), 255);
        assert_eq!(color.green(), 87);
        assert_eq!(color.blue(), 51);
    }

    #[test]
    fn from_hex_normalizes_to_upper_case() {
        for input in ["#ff0000", "#abcdef", "#00ff7f", "#A1b2C3"] {
            let color = RgbColor::from_hex(input).unwrap();
            assert_eq!(color.to_string(), input.to_uppercase());
        }
    }

    #[test]
    fn from_hex_rejects_malformed_input() {
        let invalid = [
            "",
            "#",
            "FFFFFF",
            "#12345",
            "#1234567",
            "#ZZZZZZ",
            "#ZZZZZ",
            "#@#$%^&",
            " #FFFFFF",
            "#FFFFFF\n",
            "##FFFFF",
        ];
        for input in invalid {
            assert!(
                matches!(RgbColor::from_hex(input), Err(ValueError::InvalidHexColor(_))),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn from_hex_rejects_non_ascii_digits() {
        // Six characters but not six bytes of hex
        assert!(RgbColor::from_hex("#ＦＦ００００").is_err());
    }

    #[test]
    fn presets() {
        assert_eq!(RgbColor::red_color().to_string(), "#FF0000");
        assert_eq!(RgbColor::green_color().to_string(), "#00FF00");
        assert_eq!(RgbColor::blue_color().to_string(), "#0000FF");
        assert_eq!(RgbColor::magenta().to_string(), "#FF00FF");
        assert_eq!(RgbColor::cyan().to_string(), "#00FFFF");
        assert_eq!(RgbColor::yellow().to_string(), "#FFFF00");
        assert_eq!(RgbColor::white().to_string(), "#FFFFFF");
    }

    #[test]
    fn strip_color_default_is_white_sentinel() {
        let color = StripColor::default();
        assert_eq!(color, StripColor::White);
        assert_eq!(color.to_string(), "White");
    }

    #[test]
    fn strip_color_display_rgb() {
        let color = StripColor::from(RgbColor::red_color());
        assert_eq!(color, StripColor::Rgb(RgbColor::red_color()));
        assert_eq!(color.to_string(), "#FF0000");
    }
}
