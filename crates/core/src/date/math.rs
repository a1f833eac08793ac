use super::types::CalendarDate;

/// Returns true for Gregorian leap years.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in the given month (1-12). Returns 0 for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Signed number of calendar months from `from` to `to`, ignoring the day.
pub fn months_between(from: CalendarDate, to: CalendarDate) -> i32 {
    (to.year() - from.year()) * 12 + to.month() as i32 - from.month() as i32
}

/// Returns true if `day` falls within `[from, to]`.
/// A missing bound leaves that side open. Swapped bounds are normalized.
pub fn is_day_in_range(
    day: CalendarDate,
    from: Option<CalendarDate>,
    to: Option<CalendarDate>,
) -> bool {
    let (from, to) = match (from, to) {
        (Some(f), Some(t)) if f > t => (Some(t), Some(f)),
        bounds => bounds,
    };
    from.is_none_or(|f| day >= f) && to.is_none_or(|t| day <= t)
}

/// Clamps `date` into `[min, max]`; a missing bound is not applied.
pub fn clamp_date(
    date: CalendarDate,
    min: Option<CalendarDate>,
    max: Option<CalendarDate>,
) -> CalendarDate {
    let date = min.map_or(date, |m| date.max(m));
    max.map_or(date, |m| date.min(m))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(year: i32, month: u32, day: u32) -> CalendarDate {
        CalendarDate::from_ymd(year, month, day).unwrap()
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2015, 1), 31);
        assert_eq!(days_in_month(2015, 2), 28);
        assert_eq!(days_in_month(2016, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(2015, 6), 30);
        assert_eq!(days_in_month(2015, 13), 0);
    }

    #[test]
    fn test_months_between() {
        let jan = make_date(2015, 1, 31);
        assert_eq!(months_between(jan, make_date(2015, 1, 1)), 0);
        assert_eq!(months_between(jan, make_date(2015, 8, 1)), 7);
        assert_eq!(months_between(jan, make_date(2014, 11, 30)), -2);
        assert_eq!(months_between(jan, make_date(2016, 2, 1)), 13);
    }

    #[test]
    fn test_is_day_in_range_inclusive() {
        let from = make_date(2015, 7, 10);
        let to = make_date(2015, 7, 20);
        assert!(is_day_in_range(from, Some(from), Some(to)));
        assert!(is_day_in_range(to, Some(from), Some(to)));
        assert!(is_day_in_range(make_date(2015, 7, 15), Some(from), Some(to)));
        assert!(!is_day_in_range(make_date(2015, 7, 9), Some(from), Some(to)));
        assert!(!is_day_in_range(make_date(2015, 7, 21), Some(from), Some(to)));
    }

    #[test]
    fn test_is_day_in_range_open_and_swapped() {
        let day = make_date(2015, 7, 15);
        assert!(is_day_in_range(day, None, None));
        assert!(is_day_in_range(day, Some(make_date(2015, 7, 1)), None));
        assert!(!is_day_in_range(day, None, Some(make_date(2015, 7, 14))));
        assert!(is_day_in_range(
            day,
            Some(make_date(2015, 7, 20)),
            Some(make_date(2015, 7, 10))
        ));
    }

    #[test]
    fn test_clamp_date() {
        let min = make_date(2015, 7, 1);
        let max = make_date(2015, 7, 31);
        assert_eq!(clamp_date(make_date(2015, 6, 15), Some(min), Some(max)), min);
        assert_eq!(clamp_date(make_date(2015, 8, 15), Some(min), Some(max)), max);
        assert_eq!(
            clamp_date(make_date(2015, 7, 15), Some(min), None),
            make_date(2015, 7, 15)
        );
    }
}
