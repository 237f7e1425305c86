// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Brightness type for light output.
//!
//! Brightness is nominally a percentage in `0..=100`, but a device stores
//! whatever it is given. Only the bulk setter of the
//! [`DeviceRegistry`](crate::DeviceRegistry) and the interactive prompts
//! clamp, through [`Brightness::clamped`].

use std::fmt;

/// Brightness level as an integer percentage.
///
/// # Examples
///
/// ```
/// use lightpanel::types::Brightness;
///
/// // Stored as given
/// let over = Brightness::new(150);
/// assert_eq!(over.value(), 150);
/// assert!(!over.is_in_range());
///
/// // Clamped into 0-100
/// assert_eq!(Brightness::clamped(150), Brightness::MAX);
/// assert_eq!(Brightness::clamped(-10), Brightness::MIN);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Brightness(i32);

impl Brightness {
    /// Minimum nominal brightness (0%).
    pub const MIN: Self = Self(0);

    /// Maximum nominal brightness (100%).
    pub const MAX: Self = Self(100);

    /// Creates a brightness value without any range check.
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Creates a brightness value, clamping to `0..=100`.
    #[must_use]
    pub const fn clamped(value: i32) -> Self {
        if value < Self::MIN.0 {
            Self::MIN
        } else if value > Self::MAX.0 {
            Self::MAX
        } else {
            Self(value)
        }
    }

    /// Returns the brightness percentage value.
    #[must_use]
    pub const fn value(&self) -> i32 {
        self.0
    }

    /// Returns whether the value lies in `0..=100`.
    #[must_use]
    pub const fn is_in_range(&self) -> bool {
        self.0 >= Self::MIN.0 && self.0 <= Self::MAX.0
    }
}

impl Default for Brightness {
    fn default() -> Self {
        Self::MAX
    }
}

impl fmt::Display for Brightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
