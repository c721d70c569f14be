//! Station extraction and resolution.
//!
//! Everything here is pure: inputs arrive as explicit arguments and the
//! result depends on nothing else. Reading the process environment is the
//! job of [`crate::utils::env`].

mod extract;
mod resolution;

pub use extract::{extract_candidate, MESSAGE_CLOSE, MESSAGE_OPEN};
pub use resolution::{resolve, Resolution, StationSource};
