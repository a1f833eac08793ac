//! Applies command input to a picker.

use daypicker_core::date::CalendarDate;
use daypicker_core::picker::{DayPicker, Key, KeyOutcome, KeyTarget};

use crate::cli::NavAction;

/// Runs each navigation step and reports whether it moved the window.
pub fn navigate(picker: &mut DayPicker, actions: &[NavAction]) -> Vec<(NavAction, bool)> {
    actions
        .iter()
        .map(|&action| {
            let changed = match action {
                NavAction::Next => picker.show_next_month(),
                NavAction::Previous => picker.show_previous_month(),
                NavAction::NextYear => picker.show_next_year(),
                NavAction::PreviousYear => picker.show_previous_year(),
                NavAction::Today => picker.show_today(),
            };
            tracing::info!(?action, changed, "Navigation");
            (action, changed)
        })
        .collect()
}

/// Presses `keys` in order. Each key goes to the focused day, or to the
/// container when nothing is focused.
pub fn apply_keys(
    picker: &mut DayPicker,
    focus: Option<CalendarDate>,
    keys: &[Key],
) -> Vec<KeyOutcome> {
    if let Some(date) = focus {
        picker.set_focus(date);
    }
    keys.iter()
        .map(|&key| {
            let target = picker
                .focused_day()
                .map_or(KeyTarget::Container, KeyTarget::Day);
            picker.handle_key(key, target)
        })
        .collect()
}
