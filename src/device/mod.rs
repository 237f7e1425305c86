// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light device abstraction.
//!
//! Every controllable light implements [`Light`], which covers power,
//! brightness, color temperature and a status summary. Devices that can
//! show an RGB color additionally implement [`RgbLight`]; callers reach it
//! through [`Light::as_rgb_mut`] instead of downcasting.
//!
//! ```
//! use lightpanel::device::{Bulb, LedStrip, Light};
//!
//! let mut strip = LedStrip::new("strip1", "Kitchen LED strip");
//! strip.turn_on();
//!
//! if let Some(rgb) = strip.as_rgb_mut() {
//!     rgb.set_color("#ff8800").unwrap();
//! }
//! assert_eq!(
//!     strip.status(),
//!     "Kitchen LED strip: ON, Brightness: 100%, Color temperature: Neutral, RGB color: #FF8800"
//! );
//!
//! let bulb = Bulb::new("bulb1", "Floor lamp");
//! assert!(bulb.as_rgb().is_none());
//! ```

mod bulb;
mod led_strip;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::capabilities::Capabilities;
use crate::error::ValueError;
use crate::types::{Brightness, ColorTemperature, PowerState, RgbColor, StripColor};

pub use bulb::Bulb;
pub use led_strip::LedStrip;

/// State shared by every light device.
///
/// The ID is fixed at construction; everything else is mutable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightState {
    id: String,
    /// Display label, not necessarily unique.
    pub name: String,
    /// Whether the light is on.
    pub power: PowerState,
    /// Brightness as given, not clamped.
    pub brightness: Brightness,
    /// White color temperature.
    pub color_temperature: ColorTemperature,
}

impl LightState {
    /// Creates the state of a new device: off, full brightness, neutral white.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            power: PowerState::Off,
            brightness: Brightness::default(),
            color_temperature: ColorTemperature::default(),
        }
    }

    /// Returns the device ID.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Formats the common part of a status line.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{}: {}, Brightness: {}, Color temperature: {}",
            self.name, self.power, self.brightness, self.color_temperature
        )
    }
}

/// The kinds of light the panel knows how to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceKind {
    /// A smart bulb.
    Bulb,
    /// An RGB LED strip.
    LedStrip,
}

impl DeviceKind {
    /// Returns the capabilities of devices of this kind.
    #[must_use]
    pub const fn capabilities(&self) -> Capabilities {
        match self {
            Self::Bulb => Capabilities::bulb(),
            Self::LedStrip => Capabilities::led_strip(),
        }
    }

    /// Constructs a device of this kind.
    #[must_use]
    pub fn build(&self, id: impl Into<String>, name: impl Into<String>) -> Box<dyn Light> {
        match self {
            Self::Bulb => Box::new(Bulb::new(id, name)),
            Self::LedStrip => Box::new(LedStrip::new(id, name)),
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bulb => f.write_str("bulb"),
            Self::LedStrip => f.write_str("LED strip"),
        }
    }
}

/// A controllable light device.
///
/// Implementors only provide access to their [`LightState`] and their kind;
/// the control operations have default implementations on top of that.
pub trait Light: fmt::Debug {
    /// Returns the shared device state.
    fn state(&self) -> &LightState;

    /// Returns the shared device state for mutation.
    fn state_mut(&mut self) -> &mut LightState;

    /// Returns the kind of this device.
    fn kind(&self) -> DeviceKind;

    /// Returns the controls this device supports.
    fn capabilities(&self) -> Capabilities {
        self.kind().capabilities()
    }

    /// Returns the device ID.
    fn id(&self) -> &str {
        self.state().id()
    }

    /// Returns the display name.
    fn name(&self) -> &str {
        &self.state().name
    }

    /// Renames the device.
    fn set_name(&mut self, name: String) {
        self.state_mut().name = name;
    }

    /// Returns the power state.
    fn power(&self) -> PowerState {
        self.state().power
    }

    /// Returns whether the device is on.
    fn is_on(&self) -> bool {
        self.power().is_on()
    }

    /// Switches the device on. Idempotent.
    fn turn_on(&mut self) {
        self.state_mut().power = PowerState::On;
        tracing::info!(device = %self.id(), "{} turned on", self.name());
    }

    /// Switches the device off. Idempotent.
    fn turn_off(&mut self) {
        self.state_mut().power = PowerState::Off;
        tracing::info!(device = %self.id(), "{} turned off", self.name());
    }

    /// Inverts the power state through [`turn_on`](Self::turn_on) or
    /// [`turn_off`](Self::turn_off).
    fn toggle(&mut self) {
        if self.is_on() {
            self.turn_off();
        } else {
            self.turn_on();
        }
    }

    /// Returns the brightness.
    fn brightness(&self) -> Brightness {
        self.state().brightness
    }

    /// Sets the brightness exactly as given; no clamping happens here.
    fn set_brightness(&mut self, brightness: Brightness) {
        if !brightness.is_in_range() {
            tracing::debug!(device = %self.id(), %brightness, "brightness outside 0-100%");
        }
        self.state_mut().brightness = brightness;
    }

    /// Returns the color temperature.
    fn color_temperature(&self) -> ColorTemperature {
        self.state().color_temperature
    }

    /// Sets the color temperature.
    fn set_color_temperature(&mut self, color_temperature: ColorTemperature) {
        self.state_mut().color_temperature = color_temperature;
    }

    /// Returns a one-line, human-readable status summary.
    fn status(&self) -> String {
        self.state().summary()
    }

    /// Returns the RGB extension if this device has one.
    fn as_rgb(&self) -> Option<&dyn RgbLight> {
        None
    }

    /// Returns the mutable RGB extension if this device has one.
    fn as_rgb_mut(&mut self) -> Option<&mut dyn RgbLight> {
        None
    }
}

/// RGB color control, implemented only by devices with colored output.
pub trait RgbLight {
    /// Returns the current color.
    fn color(&self) -> StripColor;

    /// Sets the color from a `#RRGGBB` string.
    ///
    /// On success the upper-cased color is stored and returned.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidHexColor` if `hex` is not of the form `#`
    /// followed by six hex digits; the stored color is left unchanged.
    fn set_color(&mut self, hex: &str) -> Result<RgbColor, ValueError>;
}
