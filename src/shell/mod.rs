// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Interactive text menu for the lighting panel.
//!
//! The [`Shell`] reads one selection per line and writes everything meant
//! for the user to its output, so it runs equally well on a terminal or on
//! in-memory buffers.
//!
//! ```
//! use std::io::Cursor;
//!
//! use lightpanel::manager::{DeviceRegistry, PanelConfig};
//! use lightpanel::shell::Shell;
//!
//! let registry = DeviceRegistry::from_config(&PanelConfig::default());
//! let input = Cursor::new("3\n\n0\n");
//! let mut output = Vec::new();
//!
//! let mut shell = Shell::new(registry, input, &mut output);
//! shell.run()?;
//! assert!(shell.registry().devices().all(|d| d.is_on()));
//! # Ok::<(), lightpanel::Error>(())
//! ```

mod menu;

use std::io::{BufRead, Write};

use crate::device::Light;
use crate::error::{Error, Result};
use crate::manager::DeviceRegistry;
use crate::types::Brightness;

pub use menu::{
    COLOR_PRESETS, COLOR_TEMPERATURE_LINES, DeviceAction, MenuChoice, UnknownCommand,
    color_choice, color_temperature_choice,
};

/// Menu-driven controller over a [`DeviceRegistry`].
#[derive(Debug)]
pub struct Shell<R, W> {
    registry: DeviceRegistry,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Creates a shell driving `registry`, reading from `input` and writing
    /// to `output`.
    pub fn new(registry: DeviceRegistry, input: R, output: W) -> Self {
        Self {
            registry,
            input,
            output,
        }
    }

    /// Returns the registry being controlled.
    pub fn registry(&self) -> &DeviceRegistry {
        &self.registry
    }

    /// Consumes the shell and returns the registry.
    pub fn into_registry(self) -> DeviceRegistry {
        self.registry
    }

    /// Runs the menu loop until the user exits or input ends.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if reading input or writing output fails.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "=== LIGHTING CONTROL SYSTEM ===")?;

        loop {
            self.show_menu()?;
            let Some(line) = self.read_line()? else {
                tracing::debug!("input closed");
                break;
            };

            match line.parse::<MenuChoice>() {
                Ok(MenuChoice::Exit) => {
                    writeln!(self.output, "Exiting")?;
                    break;
                }
                Ok(choice) => {
                    tracing::debug!(?choice, "menu selection");
                    self.execute(choice)?;
                }
                Err(e) => {
                    tracing::debug!("{e}");
                    writeln!(self.output, "Invalid choice!")?;
                }
            }

            self.prompt("\nPress Enter to continue...")?;
            if self.read_line()?.is_none() {
                break;
            }
        }

        Ok(())
    }

    /// Runs a single main-menu command.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if reading input or writing output fails.
    pub fn execute(&mut self, choice: MenuChoice) -> Result<()> {
        match choice {
            MenuChoice::ShowStatus => self.show_status(),
            MenuChoice::ControlDevice => self.control_device(),
            MenuChoice::TurnOnAll => {
                self.registry.turn_on_all();
                writeln!(self.output, "All devices turned on")?;
                Ok(())
            }
            MenuChoice::TurnOffAll => {
                self.registry.turn_off_all();
                writeln!(self.output, "All devices turned off")?;
                Ok(())
            }
            MenuChoice::SetBrightnessForAll => self.set_brightness_for_all(),
            MenuChoice::ShowStatistics => self.show_statistics(),
            MenuChoice::Exit => Ok(()),
        }
    }

    fn show_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\n=== CONTROL MENU ===")?;
        for line in MenuChoice::LINES {
            writeln!(self.output, "{line}")?;
        }
        self.prompt("\nSelect an action: ")
    }

    fn show_status(&mut self) -> Result<()> {
        writeln!(self.output, "\n=== LIGHTING SYSTEM STATUS ===")?;
        writeln!(self.output, "Total devices: {}", self.registry.device_count())?;
        for line in self.registry.status_lines() {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }

    fn show_statistics(&mut self) -> Result<()> {
        let stats = self.registry.stats();
        writeln!(self.output, "\n=== SYSTEM STATISTICS ===")?;
        writeln!(self.output, "Total devices: {}", stats.total)?;
        writeln!(self.output, "Devices on: {}", stats.on)?;
        writeln!(self.output, "Devices off: {}", stats.off)?;
        if let Some(average) = stats.average_brightness {
            writeln!(self.output, "Average brightness: {average}%")?;
        }
        Ok(())
    }

    fn set_brightness_for_all(&mut self) -> Result<()> {
        self.prompt("Enter brightness for all devices (0-100): ")?;
        let Some(value) = self.read_integer()? else {
            return Ok(());
        };
        let applied = self.registry.set_brightness_for_all(value);
        writeln!(self.output, "Brightness set to {applied} for all devices")?;
        Ok(())
    }

    fn control_device(&mut self) -> Result<()> {
        writeln!(self.output, "\n=== DEVICE CONTROL ===")?;

        let count = self.registry.device_count();
        if count == 0 {
            writeln!(self.output, "No devices available")?;
            return Ok(());
        }

        for line in self.registry.status_lines() {
            writeln!(self.output, "{line}")?;
        }
        self.prompt(&format!("\nSelect a device number (1-{count}): "))?;

        let selected = self
            .read_line()?
            .and_then(|line| line.parse::<usize>().ok())
            .filter(|n| (1..=count).contains(n));
        let Some(number) = selected else {
            writeln!(self.output, "Invalid device number")?;
            return Ok(());
        };
        let position = number - 1;

        let Some(device) = self.registry.device_at(position) else {
            return Ok(());
        };
        let name = device.name().to_string();
        let status = device.status();
        let capabilities = device.capabilities();

        writeln!(self.output, "\nControlling: {name}")?;
        writeln!(self.output, "Current status: {status}")?;
        for (action, line) in DeviceAction::ALL {
            if action.is_supported_by(&capabilities) {
                writeln!(self.output, "{line}")?;
            }
        }
        self.prompt("Select an action: ")?;

        let action = self
            .read_line()?
            .and_then(|line| line.parse::<DeviceAction>().ok())
            .filter(|action| action.is_supported_by(&capabilities));
        match action {
            Some(action) => self.apply(position, action),
            None => {
                writeln!(self.output, "Invalid choice")?;
                Ok(())
            }
        }
    }

    fn apply(&mut self, position: usize, action: DeviceAction) -> Result<()> {
        match action {
            DeviceAction::TurnOn => {
                let device = self.device(position)?;
                device.turn_on();
                let message = format!("{} turned on", device.name());
                writeln!(self.output, "{message}")?;
            }
            DeviceAction::TurnOff => {
                let device = self.device(position)?;
                device.turn_off();
                let message = format!("{} turned off", device.name());
                writeln!(self.output, "{message}")?;
            }
            DeviceAction::Toggle => {
                let device = self.device(position)?;
                device.toggle();
                let message = format!("{} is now {}", device.name(), device.power());
                writeln!(self.output, "{message}")?;
            }
            DeviceAction::SetBrightness => {
                self.prompt("Enter brightness (0-100): ")?;
                if let Some(value) = self.read_integer()? {
                    let device = self.device(position)?;
                    device.set_brightness(Brightness::clamped(value));
                    let message =
                        format!("Brightness of {} set to {}", device.name(), device.brightness());
                    writeln!(self.output, "{message}")?;
                }
            }
            DeviceAction::SetColorTemperature => {
                writeln!(self.output, "\nSelect a color temperature:")?;
                for line in COLOR_TEMPERATURE_LINES {
                    writeln!(self.output, "{line}")?;
                }
                self.prompt("Your choice (number, name or Kelvin): ")?;
                let choice = self.read_line()?.and_then(|line| color_temperature_choice(&line));

                let device = self.device(position)?;
                if let Some(level) = choice {
                    device.set_color_temperature(level);
                }
                let message = format!("Color temperature set to: {}", device.color_temperature());
                writeln!(self.output, "{message}")?;
            }
            DeviceAction::SetColor => {
                writeln!(self.output, "\nAvailable colors:")?;
                for (i, (name, color)) in COLOR_PRESETS.iter().enumerate() {
                    writeln!(self.output, "{}. {name} ({color})", i + 1)?;
                }
                self.prompt("Select a color (or enter your own as #RRGGBB): ")?;
                let Some(line) = self.read_line()? else {
                    return Ok(());
                };
                let hex = color_choice(&line);

                let device = self.device(position)?;
                let name = device.name().to_string();
                // Custom input is never replaced by a fallback color; a
                // malformed value is reported and the strip keeps its color.
                let result = device
                    .as_rgb_mut()
                    .ok_or_else(|| Error::CapabilityNotSupported {
                        capability: "RGB color".to_string(),
                    })
                    .and_then(|rgb| rgb.set_color(&hex).map_err(Error::from));
                let message = match result {
                    Ok(color) => format!("{name} color set to {color}"),
                    Err(Error::Value(e)) => format!("Error: {e}"),
                    Err(e) => format!("Error: {name}: {e}"),
                };
                writeln!(self.output, "{message}")?;
            }
        }
        Ok(())
    }

    fn device(&mut self, position: usize) -> Result<&mut dyn Light> {
        self.registry.require_device_at_mut(position)
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Reads one line without its line ending, or `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Reads one line as an integer; anything unparseable yields `None`.
    fn read_integer(&mut self) -> Result<Option<i32>> {
        Ok(self.read_line()?.and_then(|line| line.parse().ok()))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::Capabilities;
    use crate::device::{Bulb, DeviceKind, LedStrip, LightState};
    use crate::types::{ColorTemperature, RgbColor, StripColor};

    /// A plain on/off device with no dimmer or color controls.
    #[derive(Debug)]
    struct Switch {
        state: LightState,
    }

    impl Light for Switch {
        fn state(&self) -> &LightState {
            &self.state
        }

        fn state_mut(&mut self) -> &mut LightState {
            &mut self.state
        }

        fn kind(&self) -> DeviceKind {
            DeviceKind::Bulb
        }

        fn capabilities(&self) -> Capabilities {
            Capabilities::default()
        }
    }

    fn registry() -> DeviceRegistry {
        let mut registry = DeviceRegistry::new();
        registry.add_device(Box::new(Bulb::new("1", "Bulb 1")));
        registry.add_device(Box::new(LedStrip::new("2", "Strip 1")));
        registry
    }

    fn run(script: &str) -> (DeviceRegistry, String) {
        let mut output = Vec::new();
        let mut shell = Shell::new(registry(), Cursor::new(script.to_string()), &mut output);
        shell.run().unwrap();
        let registry = shell.into_registry();
        (registry, String::from_utf8(output).unwrap())
    }

    #[test]
    fn exit_immediately() {
        let (_, output) = run("0\n");
        assert!(output.contains("=== CONTROL MENU ==="));
        assert!(output.ends_with("Exiting\n"));
    }

    #[test]
    fn end_of_input_exits() {
        let (registry, _) = run("");
        assert_eq!(registry.device_count(), 2);
    }

    #[test]
    fn invalid_menu_choice() {
        let (_, output) = run("9\n\n0\n");
        assert!(output.contains("Invalid choice!"));
    }

    #[test]
    fn turn_on_then_off_all() {
        let (registry, output) = run("3\n\n0\n");
        assert!(registry.devices().all(|d| d.is_on()));
        assert!(output.contains("All devices turned on"));

        let (registry, _) = run("3\n\n4\n\n0\n");
        assert!(registry.devices().all(|d| !d.is_on()));
    }

    #[test]
    fn brightness_for_all_is_clamped() {
        let (registry, output) = run("5\n250\n\n0\n");
        assert!(registry.devices().all(|d| d.brightness().value() == 100));
        assert!(output.contains("Brightness set to 100% for all devices"));
    }

    #[test]
    fn brightness_for_all_ignores_non_integer() {
        let (registry, _) = run("5\nbright\n\n0\n");
        assert!(registry.devices().all(|d| d.brightness().value() == 100));
    }

    #[test]
    fn status_and_statistics() {
        let (_, output) = run("1\n\n6\n\n0\n");
        assert!(output.contains("Total devices: 2"));
        assert!(output.contains("1. Bulb 1: OFF, Brightness: 100%, Color temperature: Neutral"));
        assert!(output.contains("Devices on: 0"));
        assert!(output.contains("Devices off: 2"));
        assert!(output.contains("Average brightness: 100%"));
    }

    #[test]
    fn toggle_single_device() {
        let (registry, output) = run("2\n1\n3\n\n0\n");
        assert!(registry.get_device("1").unwrap().is_on());
        assert!(!registry.get_device("2").unwrap().is_on());
        assert!(output.contains("Bulb 1 is now ON"));
    }

    #[test]
    fn device_brightness_prompt_clamps() {
        let (registry, _) = run("2\n1\n4\n-30\n\n0\n");
        assert_eq!(registry.get_device("1").unwrap().brightness().value(), 0);
    }

    #[test]
    fn device_color_temperature() {
        let (registry, output) = run("2\n2\n5\n1\n\n0\n");
        assert_eq!(
            registry.get_device("2").unwrap().color_temperature(),
            ColorTemperature::Warm
        );
        assert!(output.contains("Color temperature set to: Warm"));
    }

    #[test]
    fn unknown_color_temperature_keeps_current() {
        let (registry, _) = run("2\n1\n5\n9\n\n0\n");
        assert_eq!(
            registry.get_device("1").unwrap().color_temperature(),
            ColorTemperature::Neutral
        );
    }

    #[test]
    fn strip_color_from_preset_and_custom() {
        let (registry, _) = run("2\n2\n6\n3\n\n0\n");
        let strip = registry.get_device("2").unwrap();
        assert_eq!(
            strip.as_rgb().unwrap().color(),
            StripColor::Rgb(RgbColor::blue_color())
        );

        let (registry, output) = run("2\n2\n6\n#a0b0c0\n\n0\n");
        let strip = registry.get_device("2").unwrap();
        assert_eq!(strip.as_rgb().unwrap().color().to_string(), "#A0B0C0");
        assert!(output.contains("Strip 1 color set to #A0B0C0"));
    }

    #[test]
    fn strip_rejects_bad_color() {
        let (registry, output) = run("2\n2\n6\nA0B0C0\n\n0\n");
        let strip = registry.get_device("2").unwrap();
        assert_eq!(strip.as_rgb().unwrap().color(), StripColor::White);
        assert!(output.contains("Error: 'A0B0C0' is not a valid hex color"));

        let (registry, output) = run("2\n2\n6\nabc\n\n0\n");
        let strip = registry.get_device("2").unwrap();
        assert_eq!(strip.as_rgb().unwrap().color(), StripColor::White);
        assert!(output.contains("Error: 'abc' is not a valid hex color"));
    }

    #[test]
    fn color_on_bulb_reports_missing_capability() {
        let mut output = Vec::new();
        let mut shell = Shell::new(registry(), Cursor::new("3\n"), &mut output);
        shell.apply(0, DeviceAction::SetColor).unwrap();
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("Error: Bulb 1: device does not support RGB color"));
    }

    #[test]
    fn switch_offers_only_power_actions() {
        let mut registry = DeviceRegistry::new();
        registry.add_device(Box::new(Switch {
            state: LightState::new("sw", "Hall switch"),
        }));

        let mut output = Vec::new();
        let mut shell = Shell::new(registry, Cursor::new("2\n1\n4\n\n2\n1\n3\n\n0\n"), &mut output);
        shell.run().unwrap();
        let registry = shell.into_registry();
        let output = String::from_utf8(output).unwrap();

        assert!(output.contains("3. Toggle (ON/OFF)"));
        assert!(!output.contains("4. Set brightness"));
        assert!(!output.contains("5. Change color temperature"));
        assert!(output.contains("Invalid choice\n"));
        assert!(output.contains("Hall switch is now ON"));
        assert_eq!(registry.get_device("sw").unwrap().brightness().value(), 100);
    }

    #[test]
    fn color_temperature_by_name() {
        let (registry, _) = run("2\n1\n5\ncool\n\n0\n");
        assert_eq!(
            registry.get_device("1").unwrap().color_temperature(),
            ColorTemperature::Cool
        );
    }

    #[test]
    fn bulb_does_not_offer_rgb() {
        let (_, output) = run("2\n1\n6\n\n0\n");
        assert!(!output.contains("6. Set RGB color"));
        assert!(output.contains("Invalid choice\n"));
    }

    #[test]
    fn invalid_device_number() {
        let (_, output) = run("2\n3\n\n0\n");
        assert!(output.contains("Invalid device number"));

        let (_, output) = run("2\nfirst\n\n0\n");
        assert!(output.contains("Invalid device number"));
    }

    #[test]
    fn control_on_empty_registry() {
        let mut output = Vec::new();
        let mut shell = Shell::new(DeviceRegistry::new(), Cursor::new("2\n\n0\n"), &mut output);
        shell.run().unwrap();
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("No devices available"));
    }
}
