use thiserror::Error;

use crate::date::CalendarDate;

/// Errors that make a day picker configuration unusable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Number of months must be at least 1")]
    ZeroMonths,
    #[error("From month {from} is after to month {to}")]
    InvertedBounds {
        from: CalendarDate,
        to: CalendarDate,
    },
}
