use serde::{Deserialize, Serialize};

use crate::date::CalendarDate;

/// Number of week rows in a grid built with `fixed_weeks`.
pub const FIXED_WEEK_COUNT: u32 = 6;

/// Layout options that shape a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GridOptions {
    /// First column of every week, 0 = Sunday. Wrapped modulo 7.
    pub first_day_of_week: u32,
    /// Pad the grid with trailing weeks so it always has six rows.
    pub fixed_weeks: bool,
    /// When false, outside cells are kept but flagged as `empty`.
    pub include_outside_days: bool,
    /// Attach the ISO week number to every row.
    pub show_week_numbers: bool,
}

/// A single day slot in a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub date: CalendarDate,
    pub belongs_to_displayed_month: bool,
    pub week_index: usize,
    /// Column of the cell (0-6), relative to the grid's first day of week.
    pub day_of_week_index: usize,
    /// Outside cell that should be drawn blank because outside days are hidden.
    pub empty: bool,
}

impl DayCell {
    /// Returns true if the cell belongs to the previous or next month.
    pub fn is_outside(&self) -> bool {
        !self.belongs_to_displayed_month
    }
}

/// One row of seven day cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekRow {
    pub cells: Vec<DayCell>,
    /// ISO week number of the row's first cell, when week numbers are shown.
    pub week_number: Option<u32>,
}

impl WeekRow {
    pub fn first(&self) -> Option<&DayCell> {
        self.cells.first()
    }

    pub fn last(&self) -> Option<&DayCell> {
        self.cells.last()
    }

    /// Dates of the row in column order.
    pub fn dates(&self) -> Vec<CalendarDate> {
        self.cells.iter().map(|cell| cell.date).collect()
    }
}

/// The week/day matrix for one displayed month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    /// First day of the displayed month.
    pub anchor_month: CalendarDate,
    pub rows: Vec<WeekRow>,
}

impl MonthGrid {
    /// Iterates over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &DayCell> {
        self.rows.iter().flat_map(|row| row.cells.iter())
    }

    /// Iterates over the cells that belong to the displayed month.
    pub fn month_cells(&self) -> impl Iterator<Item = &DayCell> {
        self.cells().filter(|cell| cell.belongs_to_displayed_month)
    }

    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(|row| row.cells.len()).sum()
    }

    pub fn first_cell(&self) -> Option<&DayCell> {
        self.rows.first().and_then(WeekRow::first)
    }

    pub fn last_cell(&self) -> Option<&DayCell> {
        self.rows.last().and_then(WeekRow::last)
    }

    /// Finds the cell showing `date`, if the grid contains it.
    pub fn find(&self, date: CalendarDate) -> Option<&DayCell> {
        self.cells().find(|cell| cell.date == date)
    }
}
