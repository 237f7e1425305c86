// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Console lighting-control panel.

use std::io;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use lightpanel::{DeviceRegistry, PanelConfig, Shell};

/// Interactive control panel for smart bulbs and LED strips.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// JSON file listing the devices to start with.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level used when `RUST_LOG` is not set.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to stderr so they never interleave with the menu.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match &args.config {
        Some(path) => PanelConfig::load(path)?,
        None => {
            tracing::info!("No config file given, using built-in devices");
            PanelConfig::default()
        }
    };

    let registry = DeviceRegistry::from_config(&config);
    tracing::info!(devices = registry.device_count(), "lightpanel starting");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(registry, stdin.lock(), stdout.lock());
    shell.run()?;

    Ok(())
}
