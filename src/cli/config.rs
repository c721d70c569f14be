//! Configuration-related CLI commands.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::cli::SettingsArgs;
use crate::utils::Settings;

/// Configuration operations.
#[derive(Parser)]
pub struct ConfigCommand {
    /// Configuration subcommand to execute.
    #[command(subcommand)]
    pub command: ConfigSubcommands,
}

/// Configuration subcommands.
#[derive(Subcommand)]
pub enum ConfigSubcommands {
    /// Shows the effective settings.
    Show(ShowCommand),
    /// Prints the settings file location.
    Path,
}

/// Show command options.
#[derive(Parser)]
pub struct ShowCommand {
    /// Settings file selection.
    #[command(flatten)]
    pub settings: SettingsArgs,
}

impl ConfigCommand {
    /// Executes the config command.
    pub fn execute(self) -> Result<()> {
        match self.command {
            ConfigSubcommands::Show(show_cmd) => show_cmd.execute(),
            ConfigSubcommands::Path => {
                println!("{}", Settings::get_settings_path()?.display());
                Ok(())
            }
        }
    }
}

impl ShowCommand {
    /// Executes the show command.
    pub fn execute(self) -> Result<()> {
        let settings = self.settings.load()?;
        print!("{}", render(&settings)?);
        Ok(())
    }
}

/// Renders settings as YAML.
pub fn render(settings: &Settings) -> Result<String> {
    serde_yaml::to_string(settings).context("Failed to serialize settings")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rendered_defaults_read_back() {
        let yaml = render(&Settings::default()).unwrap();
        let parsed: Settings = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, Settings::default());
    }

    #[test]
    fn rendered_defaults_name_both_variables() {
        let yaml = render(&Settings::default()).unwrap();
        assert!(yaml.contains("station: STATION"));
        assert!(yaml.contains("commit_message: CI_COMMIT_MESSAGE"));
        assert!(yaml.contains("program: python3"));
    }
}
