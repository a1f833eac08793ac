//! Human-readable labels for the day picker.
//!
//! Date math never depends on the locale; these helpers only produce text for
//! renderers and the default first day of the week.

use crate::date::CalendarDate;

pub const WEEKDAYS_LONG: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

pub const WEEKDAYS_SHORT: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Locale capability injected by the host application.
///
/// Weekday indexes are 0-based starting on Sunday.
pub trait LocaleUtils: Send + Sync {
    /// Accessible label for a single day.
    fn format_day(&self, day: CalendarDate, locale: &str) -> String;

    /// Caption shown above a month grid.
    fn format_month_title(&self, month: CalendarDate, locale: &str) -> String;

    fn format_weekday_short(&self, weekday: u32, locale: &str) -> String;

    fn format_weekday_long(&self, weekday: u32, locale: &str) -> String;

    /// First column of the week for the locale (0 = Sunday).
    fn first_day_of_week(&self, locale: &str) -> u32;

    /// Month names, January first.
    fn months(&self, locale: &str) -> Vec<String>;
}

/// English labels, Sunday-first weeks. Ignores the locale argument.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishLocale;

impl LocaleUtils for EnglishLocale {
    fn format_day(&self, day: CalendarDate, _locale: &str) -> String {
        day.as_naive().format("%a %b %d %Y").to_string()
    }

    fn format_month_title(&self, month: CalendarDate, _locale: &str) -> String {
        format!("{} {}", MONTHS[month.month() as usize - 1], month.year())
    }

    fn format_weekday_short(&self, weekday: u32, _locale: &str) -> String {
        WEEKDAYS_SHORT[(weekday % 7) as usize].to_string()
    }

    fn format_weekday_long(&self, weekday: u32, _locale: &str) -> String {
        WEEKDAYS_LONG[(weekday % 7) as usize].to_string()
    }

    fn first_day_of_week(&self, _locale: &str) -> u32 {
        0
    }

    fn months(&self, _locale: &str) -> Vec<String> {
        MONTHS.iter().map(|m| m.to_string()).collect()
    }
}

/// Weekday indexes in column order for a grid starting on `first_day_of_week`.
pub fn weekday_order(first_day_of_week: u32) -> [u32; 7] {
    let first = first_day_of_week % 7;
    std::array::from_fn(|i| (first + i as u32) % 7)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_day() {
        let day = CalendarDate::from_ymd(2015, 7, 1).unwrap();
        assert_eq!(EnglishLocale.format_day(day, "en"), "Wed Jul 01 2015");
    }

    #[test]
    fn test_format_month_title() {
        let month = CalendarDate::first_of_month(2015, 1).unwrap();
        assert_eq!(EnglishLocale.format_month_title(month, "en"), "January 2015");
    }

    #[test]
    fn test_weekday_labels() {
        assert_eq!(EnglishLocale.format_weekday_short(1, "en"), "Mo");
        assert_eq!(EnglishLocale.format_weekday_long(0, "en"), "Sunday");
        assert_eq!(EnglishLocale.format_weekday_long(13, "en"), "Saturday");
    }

    #[test]
    fn test_weekday_order() {
        assert_eq!(weekday_order(0), [0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(weekday_order(1), [1, 2, 3, 4, 5, 6, 0]);
        assert_eq!(weekday_order(13), [6, 0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_months() {
        let months = EnglishLocale.months("en");
        assert_eq!(months.len(), 12);
        assert_eq!(months[11], "December");
    }
}
