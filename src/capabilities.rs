// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device capabilities.
//!
//! Callers decide which controls to offer for a device by querying its
//! [`Capabilities`] rather than by inspecting its concrete type.

/// Capabilities of a light device.
///
/// Every device can be switched on and off; the flags describe the extra
/// controls it supports.
///
/// # Examples
///
/// ```
/// use lightpanel::Capabilities;
///
/// let bulb = Capabilities::bulb();
/// assert!(bulb.supports_dimmer_control());
/// assert!(!bulb.supports_rgb_control());
///
/// let strip = Capabilities::led_strip();
/// assert!(strip.supports_rgb_control());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    /// Supports brightness control.
    pub dimmer: bool,

    /// Supports white color temperature control.
    pub color_temp: bool,

    /// Supports RGB color control.
    pub rgb: bool,
}

impl Capabilities {
    /// Creates capabilities for a smart bulb (dimmer and color temperature).
    #[must_use]
    pub const fn bulb() -> Self {
        Self {
            dimmer: true,
            color_temp: true,
            rgb: false,
        }
    }

    /// Creates capabilities for an LED strip (dimmer, color temperature, RGB).
    #[must_use]
    pub const fn led_strip() -> Self {
        Self {
            dimmer: true,
            color_temp: true,
            rgb: true,
        }
    }

    /// Returns whether brightness can be set.
    #[must_use]
    pub const fn supports_dimmer_control(&self) -> bool {
        self.dimmer
    }

    /// Returns whether color temperature can be set.
    #[must_use]
    pub const fn supports_color_temperature_control(&self) -> bool {
        self.color_temp
    }

    /// Returns whether an RGB color can be set.
    #[must_use]
    pub const fn supports_rgb_control(&self) -> bool {
        self.rgb
    }
}
