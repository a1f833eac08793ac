mod error;
mod math;
mod types;

pub use error::DateError;
pub use math::{clamp_date, days_in_month, is_day_in_range, is_leap_year, months_between};
pub use types::{CalendarDate, MAX_YEAR, MIN_YEAR};

/// Returns the current day according to the system's local clock.
pub fn system_today() -> CalendarDate {
    CalendarDate::today()
}
