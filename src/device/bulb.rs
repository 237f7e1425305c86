// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{DeviceKind, Light, LightState};

/// A smart bulb: on/off, brightness and color temperature.
///
/// # Examples
///
/// ```
/// use lightpanel::device::{Bulb, Light};
///
/// let mut bulb = Bulb::new("bulb1", "Floor lamp");
/// assert!(!bulb.is_on());
///
/// bulb.toggle();
/// assert!(bulb.is_on());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bulb {
    state: LightState,
}

impl Bulb {
    /// Creates a bulb that is off, at full brightness, neutral white.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            state: LightState::new(id, name),
        }
    }
}

impl Light for Bulb {
    fn state(&self) -> &LightState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut LightState {
        &mut self.state
    }

    fn kind(&self) -> DeviceKind {
        DeviceKind::Bulb
    }
}
