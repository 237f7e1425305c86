// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Color temperature tiers for white light.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// Color temperature of white light, in fixed Kelvin tiers.
///
/// Lower values are warmer (more yellow), higher values are cooler (bluer).
///
/// - `Warm` (2700K) - cozy yellow light
/// - `Neutral` (4000K) - natural white light
/// - `Cool` (5000K) - bright white light
/// - `Daylight` (6500K) - cold bluish light
///
/// # Examples
///
/// ```
/// use lightpanel::types::ColorTemperature;
///
/// let ct = ColorTemperature::default();
/// assert_eq!(ct, ColorTemperature::Neutral);
/// assert_eq!(ct.kelvin(), 4000);
///
/// let warm: ColorTemperature = "2700K".parse().unwrap();
/// assert_eq!(warm, ColorTemperature::Warm);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ColorTemperature {
    /// Warm white (2700K).
    Warm,
    /// Neutral white (4000K).
    #[default]
    Neutral,
    /// Cool white (5000K).
    Cool,
    /// Daylight (6500K).
    Daylight,
}

impl ColorTemperature {
    /// All levels, warmest first.
    pub const ALL: [Self; 4] = [Self::Warm, Self::Neutral, Self::Cool, Self::Daylight];

    /// Returns the color temperature in Kelvin.
    #[must_use]
    pub const fn kelvin(&self) -> u16 {
        match self {
            Self::Warm => 2700,
            Self::Neutral => 4000,
            Self::Cool => 5000,
            Self::Daylight => 6500,
        }
    }

    /// Returns the level name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Warm => "Warm",
            Self::Neutral => "Neutral",
            Self::Cool => "Cool",
            Self::Daylight => "Daylight",
        }
    }

    /// Returns the level with the given Kelvin value, if it is one of the tiers.
    #[must_use]
    pub fn from_kelvin(kelvin: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.kelvin() == kelvin)
    }
}

impl fmt::Display for ColorTemperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorTemperature {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(level) = Self::ALL
            .into_iter()
            .find(|level| level.name().eq_ignore_ascii_case(trimmed))
        {
            return Ok(level);
        }

        let digits = trimmed.strip_suffix(['K', 'k']).unwrap_or(trimmed);
        digits
            .parse::<u16>()
            .ok()
            .and_then(Self::from_kelvin)
            .ok_or_else(|| ValueError::InvalidColorTemperature(s.to_string()))
    }
}
