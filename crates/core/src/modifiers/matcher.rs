use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;
use std::sync::Arc;

use chrono::Weekday;

use crate::date::{is_day_in_range, CalendarDate};

use super::error::ModifierError;

/// A caller-supplied day predicate.
pub type Predicate = Arc<dyn Fn(CalendarDate) -> bool + Send + Sync>;

/// The accepted shapes for selecting days.
///
/// Every shape is reduced to a plain `CalendarDate -> bool` check by
/// [`Matcher::matches`]; the engine never branches on the shape itself.
#[derive(Clone)]
pub enum Matcher {
    /// Exactly this day.
    Day(CalendarDate),
    /// Any of these days.
    Days(Vec<CalendarDate>),
    /// Days within an inclusive range; a missing side is unbounded.
    Range {
        from: Option<CalendarDate>,
        to: Option<CalendarDate>,
    },
    /// Days strictly before this one.
    Before(CalendarDate),
    /// Days strictly after this one.
    After(CalendarDate),
    /// Days falling on these weekdays (0 = Sunday).
    DaysOfWeek(Vec<u32>),
    /// Days matched by any of the inner matchers.
    Any(Vec<Matcher>),
    /// Days for which the function returns true.
    Predicate(Predicate),
}

impl Matcher {
    /// Wraps a function as a matcher.
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(CalendarDate) -> bool + Send + Sync + 'static,
    {
        Matcher::Predicate(Arc::new(f))
    }

    /// Matcher for an inclusive range.
    pub fn range(from: Option<CalendarDate>, to: Option<CalendarDate>) -> Self {
        Matcher::Range { from, to }
    }

    /// Matches no day at all.
    pub fn never() -> Self {
        Matcher::Any(Vec::new())
    }

    /// Returns true if `day` is matched.
    pub fn matches(&self, day: CalendarDate) -> bool {
        match self {
            Matcher::Day(d) => d.is_same_day(&day),
            Matcher::Days(days) => days.iter().any(|d| d.is_same_day(&day)),
            Matcher::Range { from, to } => is_day_in_range(day, *from, *to),
            Matcher::Before(before) => day < *before,
            Matcher::After(after) => day > *after,
            Matcher::DaysOfWeek(weekdays) => weekdays.iter().any(|w| w % 7 == day.weekday_index()),
            Matcher::Any(matchers) => matchers.iter().any(|m| m.matches(day)),
            Matcher::Predicate(f) => f(day),
        }
    }

    /// Normalizes the matcher into a single predicate.
    pub fn into_predicate(self) -> Predicate {
        match self {
            Matcher::Predicate(f) => f,
            other => Arc::new(move |day| other.matches(day)),
        }
    }
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Matcher::Day(d) => f.debug_tuple("Day").field(d).finish(),
            Matcher::Days(days) => f.debug_tuple("Days").field(days).finish(),
            Matcher::Range { from, to } => f
                .debug_struct("Range")
                .field("from", from)
                .field("to", to)
                .finish(),
            Matcher::Before(d) => f.debug_tuple("Before").field(d).finish(),
            Matcher::After(d) => f.debug_tuple("After").field(d).finish(),
            Matcher::DaysOfWeek(w) => f.debug_tuple("DaysOfWeek").field(w).finish(),
            Matcher::Any(m) => f.debug_tuple("Any").field(m).finish(),
            Matcher::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

impl From<CalendarDate> for Matcher {
    fn from(day: CalendarDate) -> Self {
        Matcher::Day(day)
    }
}

impl From<Vec<CalendarDate>> for Matcher {
    fn from(days: Vec<CalendarDate>) -> Self {
        Matcher::Days(days)
    }
}

impl From<RangeInclusive<CalendarDate>> for Matcher {
    fn from(range: RangeInclusive<CalendarDate>) -> Self {
        let (from, to) = range.into_inner();
        Matcher::range(Some(from), Some(to))
    }
}

impl From<Weekday> for Matcher {
    fn from(weekday: Weekday) -> Self {
        Matcher::DaysOfWeek(vec![weekday.num_days_from_sunday()])
    }
}

impl FromStr for Matcher {
    type Err = ModifierError;

    /// Parses a comma-separated list of days (`2015-07-04`), ranges
    /// (`2015-07-01..2015-07-10`, `..2015-07-10`, `2015-07-10..`) and weekday
    /// names (`sat`, `sunday`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(parse_part)
            .collect::<Result<Vec<_>, _>>()?;

        match parts.len() {
            0 => Err(ModifierError::EmptyMatcher),
            1 => Ok(parts.remove(0)),
            _ => Ok(Matcher::Any(parts)),
        }
    }
}

fn parse_part(part: &str) -> Result<Matcher, ModifierError> {
    let parse_bound = |bound: &str| -> Result<Option<CalendarDate>, ModifierError> {
        let bound = bound.trim();
        if bound.is_empty() {
            return Ok(None);
        }
        bound
            .parse()
            .map(Some)
            .map_err(|_| ModifierError::InvalidMatcher(part.to_string()))
    };

    if let Some((from, to)) = part.split_once("..") {
        return Ok(Matcher::range(parse_bound(from)?, parse_bound(to)?));
    }
    if let Ok(day) = part.parse::<CalendarDate>() {
        return Ok(Matcher::Day(day));
    }
    part.parse::<Weekday>()
        .map(Matcher::from)
        .map_err(|_| ModifierError::InvalidMatcher(part.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(year: i32, month: u32, day: u32) -> CalendarDate {
        CalendarDate::from_ymd(year, month, day).unwrap()
    }

    #[test]
    fn test_day_and_days() {
        let day = make_date(2015, 7, 4);
        assert!(Matcher::from(day).matches(day));
        assert!(!Matcher::from(day).matches(make_date(2015, 7, 5)));

        let days = Matcher::from(vec![make_date(2015, 7, 4), make_date(2015, 7, 6)]);
        assert!(days.matches(make_date(2015, 7, 6)));
        assert!(!days.matches(make_date(2015, 7, 5)));
    }

    #[test]
    fn test_range_is_inclusive() {
        let range = Matcher::from(make_date(2015, 7, 10)..=make_date(2015, 7, 12));
        assert!(range.matches(make_date(2015, 7, 10)));
        assert!(range.matches(make_date(2015, 7, 12)));
        assert!(!range.matches(make_date(2015, 7, 13)));
    }

    #[test]
    fn test_before_and_after_are_exclusive() {
        let day = make_date(2015, 7, 10);
        assert!(Matcher::Before(day).matches(make_date(2015, 7, 9)));
        assert!(!Matcher::Before(day).matches(day));
        assert!(Matcher::After(day).matches(make_date(2015, 7, 11)));
        assert!(!Matcher::After(day).matches(day));
    }

    #[test]
    fn test_days_of_week() {
        let weekend = Matcher::DaysOfWeek(vec![0, 6]);
        assert!(weekend.matches(make_date(2015, 7, 4))); // Saturday
        assert!(weekend.matches(make_date(2015, 7, 5))); // Sunday
        assert!(!weekend.matches(make_date(2015, 7, 6)));
    }

    #[test]
    fn test_predicate_and_any() {
        let first = Matcher::predicate(|d| d.day() == 1);
        let any = Matcher::Any(vec![first.clone(), Matcher::Day(make_date(2015, 7, 4))]);
        assert!(first.matches(make_date(2015, 8, 1)));
        assert!(any.matches(make_date(2015, 7, 4)));
        assert!(!any.matches(make_date(2015, 7, 5)));
        assert!(!Matcher::never().matches(make_date(2015, 7, 5)));
    }

    #[test]
    fn test_into_predicate() {
        let predicate = Matcher::DaysOfWeek(vec![6]).into_predicate();
        assert!(predicate(make_date(2015, 7, 4)));
        assert!(!predicate(make_date(2015, 7, 3)));
    }

    #[test]
    fn test_parse_matchers() {
        let range: Matcher = "2015-07-01..2015-07-10".parse().unwrap();
        assert!(range.matches(make_date(2015, 7, 10)));
        assert!(!range.matches(make_date(2015, 7, 11)));

        let open: Matcher = "..2015-07-10".parse().unwrap();
        assert!(open.matches(make_date(1999, 1, 1)));

        let list: Matcher = "2015-07-04, sun".parse().unwrap();
        assert!(list.matches(make_date(2015, 7, 4)));
        assert!(list.matches(make_date(2015, 7, 12)));
        assert!(!list.matches(make_date(2015, 7, 13)));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Matcher>().unwrap_err(), ModifierError::EmptyMatcher);
        assert_eq!(
            "someday".parse::<Matcher>().unwrap_err(),
            ModifierError::InvalidMatcher("someday".to_string())
        );
        assert!("2015-07-01..never".parse::<Matcher>().is_err());
    }

    #[test]
    fn test_debug_hides_predicate() {
        let matcher = Matcher::predicate(|_| true);
        assert_eq!(format!("{:?}", matcher), "Predicate(..)");
    }
}
