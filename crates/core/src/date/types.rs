use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::error::DateError;
use super::math::days_in_month;

/// Smallest year accepted when constructing a date.
pub const MIN_YEAR: i32 = 1;
/// Largest year accepted when constructing a date.
pub const MAX_YEAR: i32 = 9999;

/// A Gregorian date truncated to day granularity.
///
/// Months are 1-based (January = 1), matching `chrono`. Weekday indexes are
/// 0-based starting on Sunday, which is what `first_day_of_week` is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "NaiveDate", into = "NaiveDate")]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Creates a date from its year, month (1-12) and day.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(DateError::YearOutOfRange(year));
        }
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Creates the first day of the given month.
    pub fn first_of_month(year: i32, month: u32) -> Result<Self, DateError> {
        Self::from_ymd(year, month, 1)
    }

    /// Today's date from the local system clock.
    pub fn today() -> Self {
        Self(chrono::Local::now().date_naive())
    }

    /// Parses a month given as `YYYY-MM` or `YYYY-MM-DD`, returning its first day.
    pub fn parse_month(s: &str) -> Result<Self, DateError> {
        let s = s.trim();
        if let Ok(date) = s.parse::<Self>() {
            return Ok(date.start_of_month());
        }
        NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d")
            .map_err(|_| DateError::Parse(s.to_string()))
            .and_then(Self::try_from)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Month of the year, 1-12.
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Day of the week as an index where Sunday is 0 and Saturday is 6.
    pub fn weekday_index(&self) -> u32 {
        self.0.weekday().num_days_from_sunday()
    }

    /// Returns the underlying `chrono` date.
    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    /// Returns the date `n` days away (negative `n` goes back in time).
    pub fn add_days(self, n: i64) -> Self {
        let shifted = Duration::try_days(n).and_then(|d| self.0.checked_add_signed(d));
        Self::saturate(shifted, n >= 0)
    }

    /// Returns the date `n` months away.
    ///
    /// When the day does not exist in the target month, it is clamped to the
    /// last day of that month: Jan 31 + 1 month is Feb 28 (or 29).
    pub fn add_months(self, n: i32) -> Self {
        let months = Months::new(n.unsigned_abs());
        let shifted = if n >= 0 {
            self.0.checked_add_months(months)
        } else {
            self.0.checked_sub_months(months)
        };
        Self::saturate(shifted, n >= 0)
    }

    /// Returns the first day of this date's month.
    pub fn start_of_month(self) -> Self {
        Self(self.0.with_day(1).unwrap_or(self.0))
    }

    /// Returns the last day of this date's month.
    pub fn end_of_month(self) -> Self {
        let last = days_in_month(self.year(), self.month());
        Self(self.0.with_day(last).unwrap_or(self.0))
    }

    pub fn is_same_day(&self, other: &CalendarDate) -> bool {
        self.0 == other.0
    }

    pub fn is_same_month(&self, other: &CalendarDate) -> bool {
        self.year() == other.year() && self.month() == other.month()
    }

    /// Keeps arithmetic results inside the supported years.
    fn saturate(date: Option<NaiveDate>, forward: bool) -> Self {
        let first = NaiveDate::from_ymd_opt(MIN_YEAR, 1, 1).unwrap_or(NaiveDate::MIN);
        let last = NaiveDate::from_ymd_opt(MAX_YEAR, 12, 31).unwrap_or(NaiveDate::MAX);
        let date = date.unwrap_or(if forward { last } else { first });
        Self(date.clamp(first, last))
    }

    /// ISO-8601 week number: weeks start on Monday and week 1 is the week
    /// containing the year's first Thursday.
    pub fn week_number_iso(&self) -> u32 {
        self.0.iso_week().week()
    }
}

impl TryFrom<NaiveDate> for CalendarDate {
    type Error = DateError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        Self::from_ymd(date.year(), date.month(), date.day())
    }
}

impl From<CalendarDate> for NaiveDate {
    fn from(date: CalendarDate) -> Self {
        date.0
    }
}

impl FromStr for CalendarDate {
    type Err = DateError;

    /// Parses a `YYYY-MM-DD` date.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map_err(|_| DateError::Parse(s.to_string()))
            .and_then(Self::try_from)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
