//! Run/skip dispatch of station evaluations.

mod error;
mod runner;
#[cfg(test)]
pub(crate) mod test_utils;

pub use error::{DispatchError, EXIT_NOT_EXECUTABLE, EXIT_NOT_FOUND};
pub use runner::{EvaluationRunner, EvaluationStatus, EvaluatorCommand, ProcessRunner};

use tracing::info;

use crate::station::{self, Resolution};
use crate::utils::env::StationInputs;

/// Notice printed when no station could be resolved.
pub const SKIP_NOTICE: &str = "no path defined, skipping";

/// Returns the notice printed before evaluating a station.
pub fn start_notice(station: &str) -> String {
    format!("starting evaluation for {station}")
}

/// Result of a dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No station was resolved and nothing was run.
    Skipped,
    /// The evaluator ran for a station.
    Evaluated {
        /// Station passed to the evaluator.
        station: String,
        /// How the evaluator exited.
        status: EvaluationStatus,
    },
}

impl Outcome {
    /// Returns the exit code for this process: 0 when skipped, otherwise
    /// the evaluator's own code.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Skipped => 0,
            Self::Evaluated { status, .. } => status.code,
        }
    }
}

/// Resolves a station and hands it to an [`EvaluationRunner`].
pub struct Dispatcher<R> {
    runner: R,
}

impl<R: EvaluationRunner> Dispatcher<R> {
    /// Creates a dispatcher around an evaluation runner.
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    /// Returns the evaluation runner.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Resolves the station from `inputs` and runs or skips the evaluation.
    ///
    /// The evaluator's exit status is reported, not judged: a failing
    /// evaluation is still `Ok`.
    pub fn dispatch(&self, inputs: &StationInputs) -> Result<Outcome, DispatchError> {
        let resolution = station::resolve(inputs.station_override(), inputs.message());
        self.dispatch_resolution(resolution)
    }

    /// Runs or skips the evaluation for an already computed resolution.
    pub fn dispatch_resolution(&self, resolution: Resolution) -> Result<Outcome, DispatchError> {
        match resolution {
            Resolution::Skip => {
                println!("{SKIP_NOTICE}");
                Ok(Outcome::Skipped)
            }
            Resolution::Run { station, source } => {
                println!("{}", start_notice(&station));
                info!(station = %station, %source, "dispatching evaluation");
                let status = self.runner.run_evaluation(&station)?;
                Ok(Outcome::Evaluated { station, status })
            }
        }
    }
}
