// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the lighting panel.
//!
//! Value validation failures are recoverable and reported to the caller as
//! [`ValueError`]. Everything else (configuration, I/O, lookups) is folded
//! into the crate-wide [`Error`].

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// No device with the given ID is registered.
    #[error("device not found: {0}")]
    DeviceNotFound(String),

    /// Device does not support the requested capability.
    #[error("device does not support {capability}")]
    CapabilityNotSupported {
        /// The capability that is not supported.
        capability: String,
    },

    /// Reading or writing the terminal or a config file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The panel configuration could not be parsed.
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Errors related to value validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// The string is not a `#RRGGBB` hex color.
    #[error("'{0}' is not a valid hex color, expected #RRGGBB")]
    InvalidHexColor(String),

    /// The string does not name a supported color temperature.
    #[error("invalid color temperature: {0}")]
    InvalidColorTemperature(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
