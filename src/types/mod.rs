// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for light control.
//!
//! # Types
//!
//! - [`PowerState`] - On/Off state of a device
//! - [`Brightness`] - Brightness percentage (nominally 0-100%)
//! - [`ColorTemperature`] - White color temperature tier (2700K-6500K)
//! - [`RgbColor`] - Validated `#RRGGBB` color
//! - [`StripColor`] - Stored color of an LED strip

mod brightness;
mod color;
mod power;
mod rgb_color;

pub use brightness::Brightness;
pub use color::ColorTemperature;
pub use power::PowerState;
pub use rgb_color::{RgbColor, StripColor};
