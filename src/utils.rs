//! Utility functions and helpers.

pub mod env;
pub mod settings;

pub use env::{StationInputs, VariableNames};
pub use settings::Settings;
