// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::ValueError;
use crate::types::{RgbColor, StripColor};

use super::{DeviceKind, Light, LightState, RgbLight};

/// An LED strip: everything a bulb does, plus an RGB color.
///
/// The color starts as the [`StripColor::White`] sentinel and only changes
/// through [`RgbLight::set_color`].
///
/// # Examples
///
/// ```
/// use lightpanel::device::{LedStrip, RgbLight};
/// use lightpanel::types::StripColor;
///
/// let mut strip = LedStrip::new("strip1", "TV backlight");
/// assert_eq!(strip.color(), StripColor::White);
///
/// assert!(strip.set_color("#12345").is_err());
/// assert_eq!(strip.color(), StripColor::White);
///
/// strip.set_color("#00ffff").unwrap();
/// assert_eq!(strip.color().to_string(), "#00FFFF");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedStrip {
    state: LightState,
    color: StripColor,
}

impl LedStrip {
    /// Creates a strip that is off, at full brightness, neutral white.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            state: LightState::new(id, name),
            color: StripColor::default(),
        }
    }
}

impl Light for LedStrip {
    fn state(&self) -> &LightState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut LightState {
        &mut self.state
    }

    fn kind(&self) -> DeviceKind {
        DeviceKind::LedStrip
    }

    fn status(&self) -> String {
        format!("{}, RGB color: {}", self.state.summary(), self.color)
    }

    fn as_rgb(&self) -> Option<&dyn RgbLight> {
        Some(self)
    }

    fn as_rgb_mut(&mut self) -> Option<&mut dyn RgbLight> {
        Some(self)
    }
}

impl RgbLight for LedStrip {
    fn color(&self) -> StripColor {
        self.color
    }

    fn set_color(&mut self, hex: &str) -> Result<RgbColor, ValueError> {
        match RgbColor::from_hex(hex) {
            Ok(color) => {
                self.color = color.into();
                tracing::info!(
                    device = %self.state.id(),
                    "{} color set to {color}",
                    self.state.name
                );
                Ok(color)
            }
            Err(e) => {
                tracing::warn!(device = %self.state.id(), "{e}");
                Err(e)
            }
        }
    }
}
