//! CLI error types.

use std::path::PathBuf;

use daypicker_core::DayPickerError;
use thiserror::Error;

/// Result type alias for the CLI.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur while setting up or driving the picker.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Cannot read config file {}: {source}", path.display())]
    ReadConfig {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {}: {source}", path.display())]
    ParseConfig {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Picker(#[from] DayPickerError),
}
