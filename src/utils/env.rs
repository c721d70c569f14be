//! Process environment adapter.
//!
//! Reads the override and commit-message variables once and hands them to
//! the pure resolver as plain values.

use std::env::{self, VarError};

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Default name of the station override variable.
pub const STATION: &str = "STATION";

/// Default name of the commit message variable.
pub const CI_COMMIT_MESSAGE: &str = "CI_COMMIT_MESSAGE";

/// Names of the environment variables consulted for a station.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariableNames {
    /// Override variable.
    pub station: String,
    /// Commit message variable.
    pub commit_message: String,
}

impl Default for VariableNames {
    fn default() -> Self {
        Self {
            station: STATION.to_string(),
            commit_message: CI_COMMIT_MESSAGE.to_string(),
        }
    }
}

/// Override and commit message as read at the program boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StationInputs {
    station_override: Option<String>,
    message: Option<String>,
}

impl StationInputs {
    /// Creates inputs from explicit values.
    pub fn new(station_override: Option<String>, message: Option<String>) -> Self {
        Self {
            station_override,
            message,
        }
    }

    /// Reads inputs from the process environment.
    ///
    /// A variable holding non-UTF-8 data is an error rather than being
    /// altered on its way to the evaluator.
    pub fn from_env(names: &VariableNames) -> Result<Self> {
        Self::from_lookup(names, read_var)
    }

    /// Reads inputs through an arbitrary variable lookup.
    pub fn from_lookup<F>(names: &VariableNames, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Result<Option<String>>,
    {
        Ok(Self {
            station_override: lookup(&names.station)?,
            message: lookup(&names.commit_message)?,
        })
    }

    /// Returns the override, if set. An empty value is returned as is.
    pub fn station_override(&self) -> Option<&str> {
        self.station_override.as_deref()
    }

    /// Returns true when the override is set and non-empty.
    pub fn has_override(&self) -> bool {
        self.station_override().is_some_and(|s| !s.is_empty())
    }

    /// Returns the commit message, or the empty string when unset.
    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or("")
    }

    /// Returns true when the commit message variable was set.
    pub fn has_message(&self) -> bool {
        self.message.is_some()
    }

    /// Replaces the commit message.
    pub fn with_message(mut self, message: String) -> Self {
        self.message = Some(message);
        self
    }
}

/// Reads one variable; unset is `None`, non-UTF-8 is an error.
fn read_var(key: &str) -> Result<Option<String>> {
    match env::var(key) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => {
            bail!("Environment variable {key} is not valid UTF-8")
        }
    }
}
