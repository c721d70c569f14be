//! Dispatch error handling.

use std::io;

use thiserror::Error;

/// Exit code a shell reports when a command cannot be found.
pub const EXIT_NOT_FOUND: i32 = 127;

/// Exit code a shell reports when a command is found but cannot run.
pub const EXIT_NOT_EXECUTABLE: i32 = 126;

/// Errors raised while launching the evaluator.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// The evaluator process could not be started.
    #[error("Failed to start evaluator '{program}'")]
    Spawn {
        /// Program that was launched.
        program: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Waiting on the evaluator process failed.
    #[error("Failed to wait for evaluator '{program}'")]
    Wait {
        /// Program that was launched.
        program: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl DispatchError {
    /// Returns the exit code a shell would report for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Spawn { source, .. } if source.kind() == io::ErrorKind::NotFound => {
                EXIT_NOT_FOUND
            }
            Self::Spawn { .. } => EXIT_NOT_EXECUTABLE,
            Self::Wait { .. } => 1,
        }
    }
}
