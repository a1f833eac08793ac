//! daypicker_cli - terminal host for the day picker core.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use error::{CliError, Result};
