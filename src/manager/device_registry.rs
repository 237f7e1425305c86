// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Keyed, insertion-ordered collection of light devices.

use std::collections::HashMap;

use crate::device::Light;
use crate::error::{Error, Result};
use crate::types::Brightness;

use super::device_config::PanelConfig;

/// Registry of all devices on the panel.
///
/// Devices are keyed by [`Light::id`]. Iteration follows insertion order;
/// re-adding an existing ID replaces the device in place.
#[derive(Debug, Default)]
pub struct DeviceRegistry {
    /// Devices in insertion order.
    devices: Vec<Box<dyn Light>>,
    /// Position of each ID in `devices`.
    index: HashMap<String, usize>,
}

/// Aggregate figures over every device in a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryStats {
    /// Number of devices.
    pub total: usize,
    /// Number of devices that are on.
    pub on: usize,
    /// Number of devices that are off.
    pub off: usize,
    /// Integer mean of all brightness values, `None` when empty.
    pub average_brightness: Option<i32>,
}

impl DeviceRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the devices listed in `config`.
    #[must_use]
    pub fn from_config(config: &PanelConfig) -> Self {
        let mut registry = Self::new();
        for entry in &config.devices {
            registry.add_device(entry.build());
        }
        registry
    }

    // =========================================================================
    // Device Management
    // =========================================================================

    /// Adds a device, replacing any device already registered under its ID.
    ///
    /// A replacement keeps the position of the device it replaces.
    pub fn add_device(&mut self, device: Box<dyn Light>) {
        let id = device.id().to_string();

        if let Some(&position) = self.index.get(&id) {
            tracing::debug!(device = %id, "replacing existing device");
            self.devices[position] = device;
        } else {
            tracing::debug!(device = %id, kind = %device.kind(), "adding device");
            self.index.insert(id, self.devices.len());
            self.devices.push(device);
        }
    }

    /// Returns the device with the given ID.
    #[must_use]
    pub fn get_device(&self, id: &str) -> Option<&dyn Light> {
        self.index.get(id).map(|&position| &*self.devices[position])
    }

    /// Returns the device with the given ID for mutation.
    pub fn get_device_mut(&mut self, id: &str) -> Option<&mut dyn Light> {
        let position = *self.index.get(id)?;
        Some(&mut *self.devices[position])
    }

    /// Returns the device at `position` in insertion order (0-based).
    #[must_use]
    pub fn device_at(&self, position: usize) -> Option<&dyn Light> {
        self.devices.get(position).map(|device| &**device)
    }

    /// Returns the device at `position` in insertion order for mutation.
    pub fn device_at_mut(&mut self, position: usize) -> Option<&mut dyn Light> {
        let device = self.devices.get_mut(position)?;
        Some(&mut **device)
    }

    /// Returns the device at `position` for mutation, or
    /// `Error::DeviceNotFound` naming its 1-based menu number.
    ///
    /// # Errors
    ///
    /// Returns `Error::DeviceNotFound` if `position` is past the last device.
    pub fn require_device_at_mut(&mut self, position: usize) -> Result<&mut dyn Light> {
        self.device_at_mut(position)
            .ok_or_else(|| Error::DeviceNotFound(format!("#{}", position + 1)))
    }

    /// Iterates over all devices in insertion order.
    pub fn devices(&self) -> impl Iterator<Item = &dyn Light> {
        self.devices.iter().map(|device| &**device)
    }

    /// Iterates mutably over all devices in insertion order.
    pub fn devices_mut(&mut self) -> impl Iterator<Item = &mut dyn Light> {
        self.devices
            .iter_mut()
            .map(|device| -> &mut dyn Light { &mut **device })
    }

    /// Returns the number of registered devices.
    #[must_use]
    pub fn device_count(&self) -> usize {
        self.devices.len()
    }

    /// Returns whether no devices are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    // =========================================================================
    // Bulk Control
    // =========================================================================

    /// Turns every device on.
    pub fn turn_on_all(&mut self) {
        for device in self.devices_mut() {
            device.turn_on();
        }
        tracing::info!(count = self.device_count(), "all devices turned on");
    }

    /// Turns every device off.
    pub fn turn_off_all(&mut self) {
        for device in self.devices_mut() {
            device.turn_off();
        }
        tracing::info!(count = self.device_count(), "all devices turned off");
    }

    /// Clamps `value` to `0..=100` and applies it to every device.
    ///
    /// Returns the brightness that was applied.
    pub fn set_brightness_for_all(&mut self, value: i32) -> Brightness {
        let brightness = Brightness::clamped(value);
        for device in self.devices_mut() {
            device.set_brightness(brightness);
        }
        tracing::info!(requested = value, %brightness, "brightness set for all devices");
        brightness
    }

    // =========================================================================
    // Reporting
    // =========================================================================

    /// Returns the numbered status line of every device, starting at 1.
    #[must_use]
    pub fn status_lines(&self) -> Vec<String> {
        self.devices()
            .enumerate()
            .map(|(i, device)| format!("{}. {}", i + 1, device.status()))
            .collect()
    }

    /// Computes on/off counts and the average brightness.
    #[must_use]
    pub fn stats(&self) -> RegistryStats {
        let total = self.device_count();
        let on = self.devices().filter(|d| d.is_on()).count();
        let sum: i64 = self
            .devices()
            .map(|d| i64::from(d.brightness().value()))
            .sum();

        // The mean of i32 values always fits in an i32.
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let average_brightness = (total > 0).then(|| (sum / total as i64) as i32);

        RegistryStats {
            total,
            on,
            off: total - on,
            average_brightness,
        }
    }
}
