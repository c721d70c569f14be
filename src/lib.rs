//! # station-dispatch
//!
//! Resolves a forecasting station from CI context and runs its evaluation.
//!
//! The station comes from the `STATION` override or from the bracketed
//! part of `CI_COMMIT_MESSAGE`. When neither yields one, nothing runs.
//!
//! ## Quick Start
//!
//! ```rust
//! use station_dispatch::station::{resolve, Resolution};
//!
//! let resolution = resolve(None, "Deploy build [paris-01]");
//! assert_eq!(resolution.station(), Some("paris-01"));
//! assert_eq!(resolve(None, "no brackets here"), Resolution::Skip);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod cli;
pub mod dispatch;
pub mod git;
pub mod station;
pub mod utils;

pub use crate::cli::Cli;
pub use crate::dispatch::{DispatchError, Dispatcher, EvaluationRunner, Outcome};

/// The current version of station-dispatch.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
