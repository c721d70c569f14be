//! External evaluation port and its process-backed implementation.

use std::process::{Command, ExitStatus};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::error::DispatchError;

/// Exit status of an evaluation run, in shell terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluationStatus {
    /// Exit code; `128 + signal` when the evaluator was killed by a signal.
    pub code: i32,
}

impl EvaluationStatus {
    /// Returns true when the evaluator exited with code 0.
    pub fn success(&self) -> bool {
        self.code == 0
    }
}

impl From<ExitStatus> for EvaluationStatus {
    fn from(status: ExitStatus) -> Self {
        if let Some(code) = status.code() {
            return Self { code };
        }

        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                warn!(signal, "evaluator terminated by signal");
                return Self {
                    code: 128 + signal,
                };
            }
        }

        Self { code: 1 }
    }
}

/// Runs an evaluation for a single station.
pub trait EvaluationRunner {
    /// Runs the evaluation and blocks until it finishes.
    fn run_evaluation(&self, station: &str) -> Result<EvaluationStatus, DispatchError>;
}

/// Command line used to launch the evaluator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluatorCommand {
    /// Program to execute.
    pub program: String,
    /// Arguments placed before the station flag.
    pub args: Vec<String>,
    /// Flag that introduces the station argument.
    pub station_flag: String,
}

impl Default for EvaluatorCommand {
    fn default() -> Self {
        Self {
            program: "python3".to_string(),
            args: vec!["source/evaluate.py".to_string()],
            station_flag: "-s".to_string(),
        }
    }
}

impl EvaluatorCommand {
    /// Returns the full argument list for a station, excluding the program.
    pub fn arguments(&self, station: &str, extra_args: &[String]) -> Vec<String> {
        let mut arguments = self.args.clone();
        arguments.push(self.station_flag.clone());
        arguments.push(station.to_string());
        arguments.extend(extra_args.iter().cloned());
        arguments
    }
}

/// Launches the evaluator as a child process sharing this process's stdio.
#[derive(Debug, Clone, Default)]
pub struct ProcessRunner {
    command: EvaluatorCommand,
    extra_args: Vec<String>,
}

impl ProcessRunner {
    /// Creates a runner for the given evaluator command.
    pub fn new(command: EvaluatorCommand) -> Self {
        Self {
            command,
            extra_args: Vec::new(),
        }
    }

    /// Appends arguments after the station argument.
    pub fn with_extra_args(mut self, extra_args: Vec<String>) -> Self {
        self.extra_args = extra_args;
        self
    }
}

impl EvaluationRunner for ProcessRunner {
    fn run_evaluation(&self, station: &str) -> Result<EvaluationStatus, DispatchError> {
        let program = &self.command.program;
        let arguments = self.command.arguments(station, &self.extra_args);
        info!(program = %program, ?arguments, "launching evaluator");

        let mut child = Command::new(program)
            .args(&arguments)
            .spawn()
            .map_err(|source| DispatchError::Spawn {
                program: program.clone(),
                source,
            })?;

        let status = child.wait().map_err(|source| DispatchError::Wait {
            program: program.clone(),
            source,
        })?;

        let status = EvaluationStatus::from(status);
        if status.success() {
            info!(code = status.code, "evaluator finished");
        } else {
            warn!(code = status.code, "evaluator failed");
        }
        Ok(status)
    }
}
