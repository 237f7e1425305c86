// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Startup configuration for the device registry.
//!
//! The configuration is a JSON document listing the devices to create:
//!
//! ```json
//! {
//!   "devices": [
//!     { "id": "bulb1", "name": "Living room chandelier", "kind": "bulb" },
//!     { "id": "strip1", "name": "Kitchen LED strip", "kind": "led_strip" }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::device::{DeviceKind, Light};
use crate::error::Result;

/// One device entry in the panel configuration.
///
/// # Examples
///
/// ```
/// use lightpanel::device::DeviceKind;
/// use lightpanel::manager::DeviceConfig;
///
/// let config = DeviceConfig::new("strip1", "Kitchen LED strip", DeviceKind::LedStrip);
/// let device = config.build();
/// assert_eq!(device.id(), "strip1");
/// assert!(device.capabilities().supports_rgb_control());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceConfig {
    /// Unique device ID.
    pub id: String,
    /// Display name.
    pub name: String,
    /// What kind of device to create.
    pub kind: DeviceKind,
}

impl DeviceConfig {
    /// Creates a device entry.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: DeviceKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
        }
    }

    /// Creates a bulb entry.
    #[must_use]
    pub fn bulb(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name, DeviceKind::Bulb)
    }

    /// Creates an LED strip entry.
    #[must_use]
    pub fn led_strip(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name, DeviceKind::LedStrip)
    }

    /// Constructs the configured device.
    #[must_use]
    pub fn build(&self) -> Box<dyn Light> {
        self.kind.build(self.id.clone(), self.name.clone())
    }
}

/// Devices the panel starts with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Devices in display order.
    pub devices: Vec<DeviceConfig>,
}

impl Default for PanelConfig {
    /// Three bulbs and two LED strips.
    fn default() -> Self {
        Self {
            devices: vec![
                DeviceConfig::bulb("bulb1", "Living room chandelier"),
                DeviceConfig::bulb("bulb2", "Floor lamp"),
                DeviceConfig::bulb("bulb3", "Bedroom light"),
                DeviceConfig::led_strip("strip1", "Kitchen LED strip"),
                DeviceConfig::led_strip("strip2", "TV backlight"),
            ],
        }
    }
}

impl PanelConfig {
    /// Parses a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the JSON is malformed or names an unknown
    /// device kind.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a configuration file.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the file cannot be read and `Error::Config` if
    /// it cannot be parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let config = Self::from_json(&contents)?;
        tracing::info!(
            devices = config.devices.len(),
            "Loaded configuration from {}",
            path.display()
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn default_config_has_seed_devices() {
        let config = PanelConfig::default();
        let ids: Vec<&str> = config.devices.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["bulb1", "bulb2", "bulb3", "strip1", "strip2"]);
        assert_eq!(
            config
                .devices
                .iter()
                .filter(|d| d.kind == DeviceKind::LedStrip)
                .count(),
            2
        );
    }

    #[test]
    fn parse_json_config() {
        let config = PanelConfig::from_json(
            r#"{
                "devices": [
                    { "id": "a", "name": "Hall", "kind": "bulb" },
                    { "id": "b", "name": "Desk", "kind": "led_strip" }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(
            config.devices,
            vec![
                DeviceConfig::bulb("a", "Hall"),
                DeviceConfig::led_strip("b", "Desk"),
            ]
        );
    }

    #[test]
    fn parse_rejects_unknown_kind() {
        let result = PanelConfig::from_json(
            r#"{ "devices": [ { "id": "a", "name": "Hall", "kind": "lava_lamp" } ] }"#,
        );
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let result = PanelConfig::load("/nonexistent/lightpanel.json");
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn config_roundtrips_through_json() {
        let config = PanelConfig::default();
        let json = serde_json::to_string_pretty(&config).unwrap();
        assert_eq!(PanelConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn build_uses_configured_kind() {
        let bulb = DeviceConfig::bulb("x", "X").build();
        assert!(bulb.as_rgb().is_none());
        assert_eq!(bulb.name(), "X");
    }
}
