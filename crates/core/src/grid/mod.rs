mod builder;
mod types;

pub use builder::{build_month_grid, leading_outside_days};
pub use types::{DayCell, GridOptions, MonthGrid, WeekRow, FIXED_WEEK_COUNT};
