// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device registry and its startup configuration.
//!
//! The [`DeviceRegistry`] owns every light on the panel, keyed by device ID
//! and kept in insertion order. It is an ordinary value: build one, fill it
//! and hand it to whoever drives it.
//!
//! # Examples
//!
//! ```
//! use lightpanel::device::{Bulb, LedStrip, Light};
//! use lightpanel::manager::DeviceRegistry;
//!
//! let mut registry = DeviceRegistry::new();
//! registry.add_device(Box::new(Bulb::new("1", "Bulb 1")));
//! registry.add_device(Box::new(Bulb::new("2", "Bulb 2")));
//! registry.add_device(Box::new(LedStrip::new("3", "Strip 1")));
//!
//! registry.turn_on_all();
//! assert_eq!(registry.devices().filter(|d| d.is_on()).count(), 3);
//!
//! registry.set_brightness_for_all(150);
//! assert!(registry.devices().all(|d| d.brightness().value() == 100));
//! ```
//!
//! ## From configuration
//!
//! ```
//! use lightpanel::manager::{DeviceRegistry, PanelConfig};
//!
//! let config = PanelConfig::from_json(
//!     r#"{ "devices": [ { "id": "desk", "name": "Desk lamp", "kind": "bulb" } ] }"#,
//! )?;
//! let registry = DeviceRegistry::from_config(&config);
//! assert_eq!(registry.device_count(), 1);
//! # Ok::<(), lightpanel::Error>(())
//! ```

mod device_config;
mod device_registry;

pub use device_config::{DeviceConfig, PanelConfig};
pub use device_registry::{DeviceRegistry, RegistryStats};
