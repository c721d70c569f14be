//! Resolve command — prints the station resolution in YAML format.

use anyhow::{Context, Result};
use clap::Parser;

use crate::cli::{MessageArgs, SettingsArgs};
use crate::station::{self, Resolution};

/// Resolve command options.
#[derive(Parser)]
pub struct ResolveCommand {
    /// Settings file selection.
    #[command(flatten)]
    pub settings: SettingsArgs,

    /// Commit message source.
    #[command(flatten)]
    pub message: MessageArgs,
}

impl ResolveCommand {
    /// Executes the resolve command.
    pub fn execute(self) -> Result<()> {
        let settings = self.settings.load()?;
        let inputs = self.message.read_inputs(&settings)?;

        let resolution = station::resolve(inputs.station_override(), inputs.message());
        print!("{}", render(&resolution)?);

        Ok(())
    }
}

/// Renders a resolution as YAML.
pub fn render(resolution: &Resolution) -> Result<String> {
    serde_yaml::to_string(resolution).context("Failed to serialize resolution")
}
