//! Output formatting functions.

pub mod json;
pub mod pretty;

use daypicker_core::date::CalendarDate;
use daypicker_core::navigation::MonthWindowState;
use daypicker_core::picker::{DayPicker, RenderedMonth};
use serde::Serialize;

/// Everything a host needs to draw the picker.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PickerSnapshot {
    pub state: MonthWindowState,
    pub can_go_next: bool,
    pub can_go_previous: bool,
    pub can_change_year: bool,
    pub focused: Option<CalendarDate>,
    pub months: Vec<RenderedMonth>,
}

impl PickerSnapshot {
    pub fn capture(picker: &DayPicker) -> Self {
        Self {
            state: picker.state(),
            can_go_next: picker.can_go_next(),
            can_go_previous: picker.can_go_previous(),
            can_change_year: picker.can_change_year(),
            focused: picker.focused_day(),
            months: picker.render_pass(),
        }
    }
}

/// The result of a command together with the picker it left behind.
#[derive(Debug, Serialize)]
pub struct Report<T> {
    pub result: T,
    pub picker: PickerSnapshot,
}

impl<T: Serialize> Report<T> {
    pub fn new(result: T, picker: &DayPicker) -> Self {
        Self {
            result,
            picker: PickerSnapshot::capture(picker),
        }
    }
}
