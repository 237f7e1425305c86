// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `lightpanel` - a console lighting-control panel.
//!
//! This library models a home lighting panel: smart bulbs and LED strips
//! kept in a [`DeviceRegistry`], switched on and off, dimmed, and given a
//! color temperature or (LED strips only) an RGB color. The [`shell`]
//! module drives a registry from a text menu.
//!
//! # Supported Features
//!
//! - **Power control**: Turn devices on/off, toggle, switch everything at once
//! - **Light control**: Brightness, color temperature tiers, RGB hex colors
//! - **Statistics**: On/off counts and average brightness
//! - **Configuration**: JSON list of devices to start with
//!
//! # Quick Start
//!
//! ```
//! use lightpanel::device::{Bulb, LedStrip, Light};
//! use lightpanel::types::ColorTemperature;
//! use lightpanel::DeviceRegistry;
//!
//! let mut registry = DeviceRegistry::new();
//! registry.add_device(Box::new(Bulb::new("bulb1", "Floor lamp")));
//! registry.add_device(Box::new(LedStrip::new("strip1", "TV backlight")));
//!
//! if let Some(lamp) = registry.get_device_mut("bulb1") {
//!     lamp.turn_on();
//!     lamp.set_color_temperature(ColorTemperature::Warm);
//! }
//!
//! // Only devices with RGB capability expose color control
//! for device in registry.devices_mut() {
//!     if let Some(rgb) = device.as_rgb_mut() {
//!         rgb.set_color("#ff00ff")?;
//!     }
//! }
//!
//! assert_eq!(registry.stats().on, 1);
//! # Ok::<(), lightpanel::Error>(())
//! ```

mod capabilities;
pub mod device;
pub mod error;
pub mod manager;
pub mod shell;
pub mod types;

pub use capabilities::Capabilities;
pub use device::{Bulb, DeviceKind, LedStrip, Light, RgbLight};
pub use error::{Error, Result, ValueError};
pub use manager::{DeviceConfig, DeviceRegistry, PanelConfig, RegistryStats};
pub use shell::Shell;
pub use types::{Brightness, ColorTemperature, PowerState, RgbColor, StripColor};
