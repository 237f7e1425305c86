// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Menu selections understood by the shell.

use std::str::FromStr;

use thiserror::Error;

use crate::Capabilities;
use crate::types::{ColorTemperature, RgbColor};

/// Input that does not name a menu entry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown menu entry: {0:?}")]
pub struct UnknownCommand(pub String);

/// Entries of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// `1`: list every device with its status.
    ShowStatus,
    /// `2`: pick one device and control it.
    ControlDevice,
    /// `3`: turn every device on.
    TurnOnAll,
    /// `4`: turn every device off.
    TurnOffAll,
    /// `5`: set the same brightness on every device.
    SetBrightnessForAll,
    /// `6`: show on/off counts and average brightness.
    ShowStatistics,
    /// `0`: leave the shell.
    Exit,
}

impl MenuChoice {
    /// Menu lines in display order.
    pub const LINES: [&'static str; 7] = [
        "1. Show status of all devices",
        "2. Control a device",
        "3. Turn all devices on",
        "4. Turn all devices off",
        "5. Set brightness for all devices",
        "6. System statistics",
        "0. Exit",
    ];
}

impl FromStr for MenuChoice {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Self::ShowStatus),
            "2" => Ok(Self::ControlDevice),
            "3" => Ok(Self::TurnOnAll),
            "4" => Ok(Self::TurnOffAll),
            "5" => Ok(Self::SetBrightnessForAll),
            "6" => Ok(Self::ShowStatistics),
            "0" => Ok(Self::Exit),
            other => Err(UnknownCommand(other.to_string())),
        }
    }
}

/// Actions on a single device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceAction {
    /// `1`
    TurnOn,
    /// `2`
    TurnOff,
    /// `3`
    Toggle,
    /// `4`
    SetBrightness,
    /// `5`
    SetColorTemperature,
    /// `6`, only offered for devices with RGB control.
    SetColor,
}

impl FromStr for DeviceAction {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Self::TurnOn),
            "2" => Ok(Self::TurnOff),
            "3" => Ok(Self::Toggle),
            "4" => Ok(Self::SetBrightness),
            "5" => Ok(Self::SetColorTemperature),
            "6" => Ok(Self::SetColor),
            other => Err(UnknownCommand(other.to_string())),
        }
    }
}

impl DeviceAction {
    /// Every action with its menu line, in menu order.
    pub const ALL: [(Self, &'static str); 6] = [
        (Self::TurnOn, "1. Turn on"),
        (Self::TurnOff, "2. Turn off"),
        (Self::Toggle, "3. Toggle (ON/OFF)"),
        (Self::SetBrightness, "4. Set brightness"),
        (Self::SetColorTemperature, "5. Change color temperature"),
        (Self::SetColor, "6. Set RGB color"),
    ];

    /// Returns whether a device with `capabilities` can perform this action.
    #[must_use]
    pub const fn is_supported_by(self, capabilities: &Capabilities) -> bool {
        match self {
            Self::TurnOn | Self::TurnOff | Self::Toggle => true,
            Self::SetBrightness => capabilities.supports_dimmer_control(),
            Self::SetColorTemperature => capabilities.supports_color_temperature_control(),
            Self::SetColor => capabilities.supports_rgb_control(),
        }
    }
}

/// Color temperature menu: `1`-`4` warmest first, or a level name or Kelvin
/// value such as `cool` or `2700K`.
#[must_use]
pub fn color_temperature_choice(input: &str) -> Option<ColorTemperature> {
    let trimmed = input.trim();
    trimmed
        .parse::<usize>()
        .ok()
        .and_then(|number| number.checked_sub(1))
        .and_then(|index| ColorTemperature::ALL.get(index).copied())
        .or_else(|| match trimmed.parse() {
            Ok(level) => Some(level),
            Err(e) => {
                tracing::debug!("{e}");
                None
            }
        })
}

/// Color temperature menu lines.
pub const COLOR_TEMPERATURE_LINES: [&str; 4] = [
    "1. Warm (2700K) - cozy yellow light",
    "2. Neutral (4000K) - natural white light",
    "3. Cool (5000K) - bright white light",
    "4. Daylight (6500K) - cold bluish light",
];

/// Preset colors offered for LED strips, in menu order.
pub const COLOR_PRESETS: [(&str, RgbColor); 7] = [
    ("Red", RgbColor::red_color()),
    ("Green", RgbColor::green_color()),
    ("Blue", RgbColor::blue_color()),
    ("Magenta", RgbColor::magenta()),
    ("Cyan", RgbColor::cyan()),
    ("Yellow", RgbColor::yellow()),
    ("White", RgbColor::white()),
];

/// Resolves a color menu entry: a preset number, or anything else verbatim.
#[must_use]
pub fn color_choice(input: &str) -> String {
    let trimmed = input.trim();
    trimmed
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| COLOR_PRESETS.get(i))
        .map_or_else(|| trimmed.to_string(), |(_, color)| color.to_hex_with_hash())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_menu_parses() {
        assert_eq!("1".parse::<MenuChoice>().unwrap(), MenuChoice::ShowStatus);
        assert_eq!(" 6 ".parse::<MenuChoice>().unwrap(), MenuChoice::ShowStatistics);
        assert_eq!("0".parse::<MenuChoice>().unwrap(), MenuChoice::Exit);
        assert_eq!(
            "7".parse::<MenuChoice>(),
            Err(UnknownCommand("7".to_string()))
        );
        assert!("".parse::<MenuChoice>().is_err());
    }

    #[test]
    fn device_action_parses() {
        assert_eq!("3".parse::<DeviceAction>().unwrap(), DeviceAction::Toggle);
        assert_eq!("6".parse::<DeviceAction>().unwrap(), DeviceAction::SetColor);
        assert!("on".parse::<DeviceAction>().is_err());
    }

    #[test]
    fn color_temperature_menu() {
        assert_eq!(color_temperature_choice("1"), Some(ColorTemperature::Warm));
        assert_eq!(color_temperature_choice("4"), Some(ColorTemperature::Daylight));
        assert_eq!(color_temperature_choice("0"), None);
        assert_eq!(color_temperature_choice("5"), None);
    }

    #[test]
    fn color_temperature_by_name_or_kelvin() {
        assert_eq!(color_temperature_choice("warm"), Some(ColorTemperature::Warm));
        assert_eq!(color_temperature_choice(" Cool "), Some(ColorTemperature::Cool));
        assert_eq!(color_temperature_choice("6500K"), Some(ColorTemperature::Daylight));
        assert_eq!(color_temperature_choice("4000"), Some(ColorTemperature::Neutral));
        assert_eq!(color_temperature_choice("3000K"), None);
        assert_eq!(color_temperature_choice("tepid"), None);
    }

    #[test]
    fn device_actions_follow_capabilities() {
        let bulb = Capabilities::bulb();
        let switch = Capabilities::default();
        assert!(DeviceAction::SetBrightness.is_supported_by(&bulb));
        assert!(!DeviceAction::SetColor.is_supported_by(&bulb));
        assert!(DeviceAction::Toggle.is_supported_by(&switch));
        assert!(!DeviceAction::SetBrightness.is_supported_by(&switch));
        assert!(!DeviceAction::SetColorTemperature.is_supported_by(&switch));
        assert!(DeviceAction::SetColor.is_supported_by(&Capabilities::led_strip()));
    }

    #[test]
    fn color_menu_presets_and_passthrough() {
        assert_eq!(color_choice("1"), "#FF0000");
        assert_eq!(color_choice("4"), "#FF00FF");
        assert_eq!(color_choice("7"), "#FFFFFF");
        assert_eq!(color_choice("#12ab34"), "#12ab34");
        assert_eq!(color_choice("8"), "8");
        assert_eq!(color_choice("0"), "0");
    }
}
