//! Pretty output formatting.
//!
//! Each day cell is four columns wide: a focus marker, the day number and a
//! status marker (`*` selected, `-` disabled, `!` today, `~` outside).

use daypicker_core::date::CalendarDate;
use daypicker_core::grid::{DayCell, WeekRow};
use daypicker_core::modifiers::CellModifiers;
use daypicker_core::picker::{DayActivation, DayPicker, KeyOutcome};
use daypicker_core::render::{MonthRenderer, WeekdayLabel};

use crate::cli::NavAction;

/// Draws one month as text.
#[derive(Debug, Default)]
pub struct PrettyRenderer {
    output: String,
    line: String,
    show_week_numbers: bool,
}

impl PrettyRenderer {
    fn end_line(&mut self) {
        self.output.push_str(self.line.trim_end());
        self.output.push('\n');
        self.line.clear();
    }
}

impl MonthRenderer for PrettyRenderer {
    type Output = String;

    fn caption(&mut self, _month: CalendarDate, title: &str) {
        self.output.push_str(title);
        self.output.push('\n');
    }

    fn weekdays(&mut self, labels: &[WeekdayLabel], show_week_numbers: bool) {
        self.show_week_numbers = show_week_numbers;
        if show_week_numbers {
            self.line.push_str("  # ");
        }
        for label in labels {
            self.line.push_str(&format!(" {:>2} ", label.short));
        }
        self.end_line();
    }

    fn begin_week(&mut self, week: &WeekRow) {
        if self.show_week_numbers {
            match week.week_number {
                Some(number) => self.line.push_str(&format!("{number:>3} ")),
                None => self.line.push_str("    "),
            }
        }
    }

    fn day(&mut self, cell: &DayCell, modifiers: &CellModifiers, focused: bool) {
        if cell.empty {
            self.line.push_str("    ");
            return;
        }
        let focus = if focused { '>' } else { ' ' };
        self.line
            .push_str(&format!("{focus}{:>2}{}", cell.date.day(), status_marker(modifiers)));
    }

    fn end_week(&mut self, _week: &WeekRow) {
        self.end_line();
    }

    fn finish(&mut self) -> Self::Output {
        self.line.clear();
        self.show_week_numbers = false;
        std::mem::take(&mut self.output)
    }
}

fn status_marker(modifiers: &CellModifiers) -> char {
    if modifiers.is_selected {
        '*'
    } else if modifiers.is_disabled {
        '-'
    } else if modifiers.is_today {
        '!'
    } else if modifiers.is_outside {
        '~'
    } else {
        ' '
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

/// Format the visible months and the navigation state.
pub fn format_picker(picker: &DayPicker) -> String {
    let months = picker.render_with(&mut PrettyRenderer::default());
    let mut output = months.join("\n");
    output.push_str(&format!(
        "Previous: {}  Next: {}",
        yes_no(picker.can_go_previous()),
        yes_no(picker.can_go_next())
    ));
    if let Some(focused) = picker.focused_day() {
        output.push_str(&format!("  Focus: {}", picker.format_day(focused)));
    }
    output
}

/// Format navigation results.
pub fn format_navigation(results: &[(NavAction, bool)]) -> String {
    results
        .iter()
        .map(|(action, changed)| {
            let status = if *changed { "moved" } else { "blocked" };
            format!("{action:?}: {status}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a key outcome.
pub fn format_key_outcome(outcome: &KeyOutcome) -> String {
    match outcome {
        KeyOutcome::Navigated { changed: true } => "Month changed".to_string(),
        KeyOutcome::Navigated { changed: false } => "Navigation blocked".to_string(),
        KeyOutcome::Focused(step) => {
            let mut output = format!("Focus {}", step.focus_move.new_focus);
            if step.window_shifted {
                output.push_str(" (month changed)");
            }
            output
        }
        KeyOutcome::Activated(activation) => format_activation(Some(activation)),
        KeyOutcome::Ignored => "Ignored".to_string(),
    }
}

/// Format a day activation.
pub fn format_activation(activation: Option<&DayActivation>) -> String {
    let Some(activation) = activation else {
        return "No day activated.".to_string();
    };
    let mut output = format!("Activated {}", activation.date);
    if !activation.modifiers.names.is_empty() {
        let names: Vec<&str> = activation.modifiers.names.iter().map(String::as_str).collect();
        output.push_str(&format!(" [{}]", names.join(", ")));
    }
    output
}
