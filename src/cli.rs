//! CLI interface for station-dispatch.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::debug;

use crate::git::GitRepository;
use crate::utils::{Settings, StationInputs};

pub mod config;
pub mod resolve;
pub mod run;

/// station-dispatch: resolve a station from CI context and evaluate it.
#[derive(Parser)]
#[command(name = "station-dispatch")]
#[command(
    about = "Resolves a station from CI context and runs its evaluation",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// The main command to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Main command categories.
#[derive(Subcommand)]
pub enum Commands {
    /// Resolves the station and runs the evaluator, or skips.
    Run(run::RunCommand),
    /// Prints the resolution as YAML without running anything.
    Resolve(resolve::ResolveCommand),
    /// Configuration information.
    Config(config::ConfigCommand),
}

impl Cli {
    /// Executes the CLI command and returns the process exit code.
    pub fn execute(self) -> Result<i32> {
        match self.command {
            Commands::Run(run_cmd) => run_cmd.execute(),
            Commands::Resolve(resolve_cmd) => resolve_cmd.execute().map(|()| 0),
            Commands::Config(config_cmd) => config_cmd.execute().map(|()| 0),
        }
    }
}

/// Settings file selection shared by all commands.
#[derive(Args, Debug, Default)]
pub struct SettingsArgs {
    /// Settings file (defaults to ~/.station-dispatch/settings.json).
    #[arg(long, value_name = "PATH")]
    pub settings: Option<PathBuf>,
}

impl SettingsArgs {
    /// Loads the selected settings file.
    pub fn load(&self) -> Result<Settings> {
        Settings::load_or_default(self.settings.as_deref())
    }
}

/// Commit message source options.
#[derive(Args, Debug, Default)]
pub struct MessageArgs {
    /// Reads the commit message from the local HEAD commit when the
    /// commit message variable is unset.
    #[arg(long)]
    pub message_from_head: bool,
}

impl MessageArgs {
    /// Reads station inputs from the environment named by `settings`.
    pub fn read_inputs(&self, settings: &Settings) -> Result<StationInputs> {
        let inputs = StationInputs::from_env(&settings.variables)?;
        self.complete(inputs, || {
            GitRepository::open().and_then(|repo| repo.head_commit_message())
        })
    }

    /// Fills in the commit message from `head_message` when requested.
    ///
    /// HEAD is only read when the flag is set and neither the override nor
    /// the message variable is present.
    fn complete<F>(&self, inputs: StationInputs, head_message: F) -> Result<StationInputs>
    where
        F: FnOnce() -> Result<String>,
    {
        if !self.message_from_head || inputs.has_override() || inputs.has_message() {
            return Ok(inputs);
        }

        debug!("commit message variable unset, reading HEAD");
        let message = head_message().context("Failed to read the commit message from HEAD")?;
        Ok(inputs.with_message(message))
    }
}
