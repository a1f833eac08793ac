//! Options shared by every command.

use std::path::PathBuf;

use clap::Args;
use daypicker_core::date::{CalendarDate, DateError};
use daypicker_core::modifiers::Matcher;

/// Day picker configuration flags.
///
/// Flags override the values read from `--config`.
#[derive(Debug, Clone, Default, Args)]
pub struct PickerArgs {
    /// JSON configuration file (camelCase keys).
    #[arg(long, env = "DAYPICKER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Month shown first (YYYY-MM).
    #[arg(long, env = "DAYPICKER_MONTH", value_parser = parse_month)]
    pub month: Option<CalendarDate>,

    /// Number of months shown side by side.
    #[arg(long, env = "DAYPICKER_MONTHS")]
    pub months: Option<u32>,

    /// First column of the week (0 = Sunday).
    #[arg(long, env = "DAYPICKER_FIRST_DAY_OF_WEEK")]
    pub first_day_of_week: Option<u32>,

    #[arg(long, env = "DAYPICKER_LOCALE")]
    pub locale: Option<String>,

    /// Earliest reachable month (YYYY-MM).
    #[arg(long, value_parser = parse_month)]
    pub from: Option<CalendarDate>,

    /// Latest reachable month (YYYY-MM).
    #[arg(long, value_parser = parse_month)]
    pub to: Option<CalendarDate>,

    /// Always draw six weeks.
    #[arg(long)]
    pub fixed_weeks: bool,

    /// Show days of the adjacent months.
    #[arg(long)]
    pub outside_days: bool,

    #[arg(long)]
    pub week_numbers: bool,

    /// Move by a whole page of months.
    #[arg(long)]
    pub paged: bool,

    /// Show the last month first.
    #[arg(long)]
    pub reverse: bool,

    /// Disable month and year navigation.
    #[arg(long)]
    pub locked: bool,

    /// Pretend today is this day (YYYY-MM-DD).
    #[arg(long, env = "DAYPICKER_TODAY")]
    pub today: Option<CalendarDate>,

    /// Selected days: a date, a range (a..b, ..b, a..) or a weekday, comma separated.
    #[arg(long)]
    pub selected: Vec<Matcher>,

    /// Disabled days, same syntax as --selected.
    #[arg(long)]
    pub disabled: Vec<Matcher>,
}

fn parse_month(s: &str) -> Result<CalendarDate, DateError> {
    CalendarDate::parse_month(s)
}
