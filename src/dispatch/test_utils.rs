//! Shared test utilities for the `dispatch` module.

use std::io;
use std::sync::Mutex;

use super::error::DispatchError;
use super::runner::{EvaluationRunner, EvaluationStatus};

/// Evaluation runner that records each station it is asked to evaluate.
///
/// Returns a fixed exit code, or a spawn error when built with
/// [`failing`](Self::failing). Recorded calls stay readable through
/// [`Dispatcher::runner`](super::Dispatcher::runner).
pub(crate) struct RecordingRunner {
    exit_code: Option<i32>,
    calls: Mutex<Vec<String>>,
}

impl RecordingRunner {
    /// Creates a runner that reports the given exit code.
    pub(crate) fn new(exit_code: i32) -> Self {
        Self {
            exit_code: Some(exit_code),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Creates a runner whose evaluator can never be found.
    pub(crate) fn failing() -> Self {
        Self {
            exit_code: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Returns the stations evaluated so far, in order.
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl EvaluationRunner for RecordingRunner {
    fn run_evaluation(&self, station: &str) -> Result<EvaluationStatus, DispatchError> {
        self.calls.lock().unwrap().push(station.to_string());
        match self.exit_code {
            Some(code) => Ok(EvaluationStatus { code }),
            None => Err(DispatchError::Spawn {
                program: "recording-runner".to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "not found"),
            }),
        }
    }
}
