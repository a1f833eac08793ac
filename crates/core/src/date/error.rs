use thiserror::Error;

/// Errors that can occur when constructing or parsing a calendar date.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("Invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    #[error("Year {0} is outside the supported range (1-9999)")]
    YearOutOfRange(i32),
    #[error("Cannot parse date: {0}")]
    Parse(String),
}
