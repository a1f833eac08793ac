use crate::date::{days_in_month, CalendarDate};

use super::types::{DayCell, GridOptions, MonthGrid, WeekRow, FIXED_WEEK_COUNT};

/// Number of leading cells taken from the previous month.
pub fn leading_outside_days(anchor_month: CalendarDate, first_day_of_week: u32) -> u32 {
    let first = anchor_month.start_of_month();
    (first.weekday_index() + 7 - first_day_of_week % 7) % 7
}

/// Builds the week/day matrix for the month containing `anchor_month`.
///
/// Cells run consecutively from the first column of the week holding the 1st
/// to the last column of the week holding the month's last day. With
/// `fixed_weeks`, whole weeks from the next month are appended until the grid
/// has six rows; rows the month needs are never removed.
///
/// ```
/// use daypicker_core::date::CalendarDate;
/// use daypicker_core::grid::{build_month_grid, GridOptions};
///
/// let july = CalendarDate::first_of_month(2015, 7).unwrap();
/// let grid = build_month_grid(july, &GridOptions::default());
///
/// assert_eq!(grid.rows.len(), 5);
/// assert_eq!(grid.first_cell().unwrap().date.to_string(), "2015-06-28");
/// ```
pub fn build_month_grid(anchor_month: CalendarDate, options: &GridOptions) -> MonthGrid {
    let first = anchor_month.start_of_month();
    let leading = leading_outside_days(first, options.first_day_of_week);
    let natural_weeks = (leading + days_in_month(first.year(), first.month())).div_ceil(7);
    let weeks = if options.fixed_weeks {
        natural_weeks.max(FIXED_WEEK_COUNT)
    } else {
        natural_weeks
    };
    let start = first.add_days(-i64::from(leading));

    let rows = (0..weeks as usize)
        .map(|week_index| {
            let cells: Vec<DayCell> = (0..7)
                .map(|day_of_week_index| {
                    let date = start.add_days((week_index * 7 + day_of_week_index) as i64);
                    let belongs = date.is_same_month(&first);
                    DayCell {
                        date,
                        belongs_to_displayed_month: belongs,
                        week_index,
                        day_of_week_index,
                        empty: !belongs && !options.include_outside_days,
                    }
                })
                .collect();
            let week_number = options
                .show_week_numbers
                .then(|| cells[0].date.week_number_iso());
            WeekRow { cells, week_number }
        })
        .collect();

    tracing::trace!(month = %first, weeks, leading, "Built month grid");

    MonthGrid {
        anchor_month: first,
        rows,
    }
}
