//! CLI command definitions.

mod picker;

pub use picker::PickerArgs;

use clap::{Parser, Subcommand, ValueEnum};
use daypicker_core::date::CalendarDate;
use daypicker_core::picker::Key;
use serde::Serialize;

/// Render and drive a day picker in the terminal.
#[derive(Debug, Parser)]
#[command(name = "daypicker")]
#[command(about = "Render and drive a day picker in the terminal", long_about = None)]
pub struct Cli {
    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    #[command(flatten)]
    pub picker: PickerArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Month grids drawn as text.
    #[default]
    Pretty,
}

/// Available commands. Defaults to `show`.
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Render the visible months.
    Show,
    /// Move the month window, then render.
    Navigate {
        /// Steps applied in order.
        #[arg(value_enum, required = true)]
        actions: Vec<NavAction>,
    },
    /// Press keys, then render.
    ///
    /// Keys go to the focused day when there is one, otherwise to the container.
    Keys {
        /// Day to focus before the first key.
        #[arg(long)]
        focus: Option<CalendarDate>,

        /// Key names (left, up, right, down, enter, space) or key codes.
        #[arg(required = true)]
        keys: Vec<Key>,
    },
    /// Click a day, then render.
    Click {
        /// Day to click (YYYY-MM-DD).
        date: CalendarDate,
    },
}

/// A month window transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NavAction {
    Next,
    Previous,
    NextYear,
    PreviousYear,
    Today,
}
