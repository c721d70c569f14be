//! Run/skip resolution from an override and a commit message.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use super::extract::extract_candidate;

/// Where a resolved station came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StationSource {
    /// The override variable was set.
    Override,
    /// Extracted from the commit message.
    CommitMessage,
}

impl fmt::Display for StationSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Override => write!(f, "override"),
            Self::CommitMessage => write!(f, "commit message"),
        }
    }
}

/// Decision reached for a single invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "lowercase")]
pub enum Resolution {
    /// Evaluate the given station.
    Run {
        /// Station identifier, passed on verbatim.
        station: String,
        /// Origin of the identifier.
        source: StationSource,
    },
    /// No station could be determined.
    Skip,
}

impl Resolution {
    /// Returns the station to evaluate, if any.
    pub fn station(&self) -> Option<&str> {
        match self {
            Self::Run { station, .. } => Some(station.as_str()),
            Self::Skip => None,
        }
    }

    /// Returns true when evaluation should run.
    pub fn is_run(&self) -> bool {
        matches!(self, Self::Run { .. })
    }
}

/// Resolves the station from an optional override and the commit message.
///
/// A non-empty override always wins. Otherwise the message is run through
/// [`extract_candidate`]; if that leaves it unchanged there is no station.
/// The comparison is on the strings themselves rather than on whether a
/// marker was found, so a message whose stripped form equals the original
/// is treated as having no station.
pub fn resolve(station_override: Option<&str>, message: &str) -> Resolution {
    if let Some(station) = station_override.filter(|s| !s.is_empty()) {
        debug!(station, "using station override");
        return Resolution::Run {
            station: station.to_string(),
            source: StationSource::Override,
        };
    }

    let candidate = extract_candidate(message);
    if candidate == message {
        debug!("commit message carries no station");
        return Resolution::Skip;
    }

    debug!(station = %candidate, "extracted station from commit message");
    Resolution::Run {
        station: candidate,
        source: StationSource::CommitMessage,
    }
}
