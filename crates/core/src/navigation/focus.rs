use serde::Serialize;

use crate::date::{months_between, CalendarDate};

use super::window::MonthWindow;

/// Direction of a keyboard focus step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FocusDirection {
    NextDay,
    PreviousDay,
    NextWeek,
    PreviousWeek,
}

impl FocusDirection {
    /// Number of days the step moves.
    pub fn offset_days(self) -> i64 {
        match self {
            FocusDirection::NextDay => 1,
            FocusDirection::PreviousDay => -1,
            FocusDirection::NextWeek => 7,
            FocusDirection::PreviousWeek => -7,
        }
    }
}

/// Window movement requested by a focus step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AnchorShift {
    Next,
    Previous,
    /// Jump so the month starting at the given date is shown.
    ToMonth(CalendarDate),
}

/// Result of planning a focus step: where focus goes and whether the month
/// window must move to show it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FocusMove {
    pub new_focus: CalendarDate,
    pub requested_anchor_shift: Option<AnchorShift>,
}

/// Holds the focused day and plans keyboard focus steps.
///
/// Planning is pure: it reads the month window but never changes it. The owner
/// applies the requested shift to the window and then commits the move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FocusNavigator {
    focused: Option<CalendarDate>,
}

impl FocusNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused(&self) -> Option<CalendarDate> {
        self.focused
    }

    pub fn set_focus(&mut self, date: CalendarDate) {
        self.focused = Some(date);
    }

    pub fn clear(&mut self) {
        self.focused = None;
    }

    /// Plans a step from `date` in `direction`.
    ///
    /// Focus always lands on the arithmetically correct date; a shift is
    /// requested only when that date's month is not displayed. A date in the
    /// month adjacent to the window asks for a single step, anything further
    /// away asks for a jump to its month.
    pub fn plan(
        &self,
        date: CalendarDate,
        direction: FocusDirection,
        window: &MonthWindow,
    ) -> FocusMove {
        let new_focus = date.add_days(direction.offset_days());
        let requested_anchor_shift = if window.contains_month(new_focus) {
            None
        } else if months_between(window.last_visible_month(), new_focus) == 1 {
            Some(AnchorShift::Next)
        } else if months_between(new_focus, window.anchor_month()) == 1 {
            Some(AnchorShift::Previous)
        } else {
            Some(AnchorShift::ToMonth(new_focus.start_of_month()))
        };

        FocusMove {
            new_focus,
            requested_anchor_shift,
        }
    }

    pub fn focus_next_day(&self, date: CalendarDate, window: &MonthWindow) -> FocusMove {
        self.plan(date, FocusDirection::NextDay, window)
    }

    pub fn focus_previous_day(&self, date: CalendarDate, window: &MonthWindow) -> FocusMove {
        self.plan(date, FocusDirection::PreviousDay, window)
    }

    pub fn focus_next_week(&self, date: CalendarDate, window: &MonthWindow) -> FocusMove {
        self.plan(date, FocusDirection::NextWeek, window)
    }

    pub fn focus_previous_week(&self, date: CalendarDate, window: &MonthWindow) -> FocusMove {
        self.plan(date, FocusDirection::PreviousWeek, window)
    }

    /// Moves focus to the planned date.
    pub fn commit(&mut self, step: &FocusMove) {
        self.focused = Some(step.new_focus);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DayPickerConfig;

    fn make_date(year: i32, month: u32, day: u32) -> CalendarDate {
        CalendarDate::from_ymd(year, month, day).unwrap()
    }

    fn june_2015() -> MonthWindow {
        MonthWindow::new(make_date(2015, 6, 1), &DayPickerConfig::default()).unwrap()
    }

    #[test]
    fn test_focus_far_outside_window_jumps_to_month() {
        let window = MonthWindow::new(make_date(2015, 7, 1), &DayPickerConfig::default()).unwrap();

        let step = FocusNavigator::new().focus_next_day(make_date(2015, 10, 10), &window);
        assert_eq!(step.new_focus, make_date(2015, 10, 11));
        assert_eq!(
            step.requested_anchor_shift,
            Some(AnchorShift::ToMonth(make_date(2015, 10, 1)))
        );

        let step = FocusNavigator::new().focus_previous_week(make_date(2015, 3, 3), &window);
        assert_eq!(
            step.requested_anchor_shift,
            Some(AnchorShift::ToMonth(make_date(2015, 2, 1)))
        );
    }

    #[test]
    fn test_focus_previous_day_within_month() {
        let step = FocusNavigator::new().focus_previous_day(make_date(2015, 6, 2), &june_2015());
        assert_eq!(step.new_focus, make_date(2015, 6, 1));
        assert_eq!(step.requested_anchor_shift, None);
    }

    #[test]
    fn test_focus_previous_day_crosses_month() {
        let step = FocusNavigator::new().focus_previous_day(make_date(2015, 6, 1), &june_2015());
        assert_eq!(step.new_focus, make_date(2015, 5, 31));
        assert_eq!(step.requested_anchor_shift, Some(AnchorShift::Previous));
    }

    #[test]
    fn test_focus_next_day_crosses_month() {
        let step = FocusNavigator::new().focus_next_day(make_date(2015, 6, 30), &june_2015());
        assert_eq!(step.new_focus, make_date(2015, 7, 1));
        assert_eq!(step.requested_anchor_shift, Some(AnchorShift::Next));
    }

    #[test]
    fn test_focus_next_day_after_leap_day() {
        let window =
            MonthWindow::new(make_date(2016, 2, 1), &DayPickerConfig::default()).unwrap();
        let step = FocusNavigator::new().focus_next_day(make_date(2016, 2, 29), &window);
        assert_eq!(step.new_focus, make_date(2016, 3, 1));
        assert_eq!(step.requested_anchor_shift, Some(AnchorShift::Next));
    }

    #[test]
    fn test_focus_weeks() {
        let navigator = FocusNavigator::new();
        let window = june_2015();

        let next = navigator.focus_next_week(make_date(2015, 6, 10), &window);
        assert_eq!(next.new_focus, make_date(2015, 6, 17));
        assert_eq!(next.requested_anchor_shift, None);

        let next_month = navigator.focus_next_week(make_date(2015, 6, 26), &window);
        assert_eq!(next_month.new_focus, make_date(2015, 7, 3));
        assert_eq!(next_month.requested_anchor_shift, Some(AnchorShift::Next));

        let previous_month = navigator.focus_previous_week(make_date(2015, 6, 3), &window);
        assert_eq!(previous_month.new_focus, make_date(2015, 5, 27));
        assert_eq!(previous_month.requested_anchor_shift, Some(AnchorShift::Previous));
    }

    #[test]
    fn test_no_shift_within_multi_month_window() {
        let config = DayPickerConfig {
            number_of_months: 2,
            ..DayPickerConfig::default()
        };
        let window = MonthWindow::new(make_date(2015, 6, 1), &config).unwrap();
        let step = FocusNavigator::new().focus_next_day(make_date(2015, 6, 30), &window);
        assert_eq!(step.requested_anchor_shift, None);
    }

    #[test]
    fn test_year_boundary() {
        let window =
            MonthWindow::new(make_date(2015, 12, 1), &DayPickerConfig::default()).unwrap();
        let step = FocusNavigator::new().focus_next_day(make_date(2015, 12, 31), &window);
        assert_eq!(step.new_focus, make_date(2016, 1, 1));
        assert_eq!(step.requested_anchor_shift, Some(AnchorShift::Next));
    }

    #[test]
    fn test_commit_and_clear() {
        let mut navigator = FocusNavigator::new();
        assert_eq!(navigator.focused(), None);

        let step = navigator.focus_next_day(make_date(2015, 6, 1), &june_2015());
        navigator.commit(&step);
        assert_eq!(navigator.focused(), Some(make_date(2015, 6, 2)));

        navigator.clear();
        assert_eq!(navigator.focused(), None);
    }
}
