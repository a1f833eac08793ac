//! Rendering capability.
//!
//! The core never draws anything. Hosts implement [`MonthRenderer`] and
//! [`render_month`] feeds one month's grid, modifiers and focus into it.

use serde::Serialize;

use crate::date::CalendarDate;
use crate::grid::{DayCell, MonthGrid, WeekRow};
use crate::locale::{weekday_order, LocaleUtils};
use crate::modifiers::{CellModifiers, ModifierResult};

/// Header label for one weekday column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekdayLabel {
    /// Weekday index, 0 = Sunday.
    pub weekday: u32,
    pub short: String,
    pub long: String,
}

/// Everything a renderer needs besides the grid itself.
pub struct RenderContext<'a> {
    pub locale_utils: &'a dyn LocaleUtils,
    pub locale: &'a str,
    pub first_day_of_week: u32,
    pub show_week_numbers: bool,
    pub focused: Option<CalendarDate>,
}

/// A rendering strategy for one month.
pub trait MonthRenderer {
    type Output;

    fn caption(&mut self, month: CalendarDate, title: &str);

    fn weekdays(&mut self, labels: &[WeekdayLabel], show_week_numbers: bool);

    fn begin_week(&mut self, week: &WeekRow);

    fn day(&mut self, cell: &DayCell, modifiers: &CellModifiers, focused: bool);

    fn end_week(&mut self, _week: &WeekRow) {}

    /// Produces the rendered month and resets the renderer.
    fn finish(&mut self) -> Self::Output;
}

/// Weekday header labels in column order.
pub fn weekday_labels(
    locale_utils: &dyn LocaleUtils,
    locale: &str,
    first_day_of_week: u32,
) -> Vec<WeekdayLabel> {
    weekday_order(first_day_of_week)
        .into_iter()
        .map(|weekday| WeekdayLabel {
            weekday,
            short: locale_utils.format_weekday_short(weekday, locale),
            long: locale_utils.format_weekday_long(weekday, locale),
        })
        .collect()
}

/// Drives `renderer` through one month: caption, weekday header, then every
/// week and day in order.
pub fn render_month<R: MonthRenderer>(
    renderer: &mut R,
    grid: &MonthGrid,
    modifiers: &ModifierResult,
    context: &RenderContext<'_>,
) -> R::Output {
    let title = context
        .locale_utils
        .format_month_title(grid.anchor_month, context.locale);
    renderer.caption(grid.anchor_month, &title);

    let labels = weekday_labels(context.locale_utils, context.locale, context.first_day_of_week);
    renderer.weekdays(&labels, context.show_week_numbers);

    for (week, cell_modifiers) in grid
        .rows
        .iter()
        .zip(modifiers.cells.chunks(7))
    {
        renderer.begin_week(week);
        for (cell, cell_modifiers) in week.cells.iter().zip(cell_modifiers) {
            let focused = context.focused == Some(cell.date);
            renderer.day(cell, cell_modifiers, focused);
        }
        renderer.end_week(week);
    }

    renderer.finish()
}
