use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::config::DayPickerConfig;
use crate::date::{system_today, CalendarDate};
use crate::error::Result;
use crate::grid::{DayCell, GridOptions, MonthGrid};
use crate::locale::{EnglishLocale, LocaleUtils};
use crate::modifiers::{evaluate, CellModifiers, ModifierResult, Modifiers};
use crate::navigation::{
    AnchorShift, FocusDirection, FocusMove, FocusNavigator, MonthWindow, MonthWindowState,
};
use crate::render::{render_month, weekday_labels, MonthRenderer, RenderContext, WeekdayLabel};

use super::keys::{Key, KeyTarget};

/// Clock capability: returns the current day.
pub type TodayFn = Arc<dyn Fn() -> CalendarDate + Send + Sync>;

/// Host-provided capabilities. Defaults to the system clock and English labels.
#[derive(Clone)]
pub struct Capabilities {
    pub today: TodayFn,
    pub locale_utils: Arc<dyn LocaleUtils>,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            today: Arc::new(system_today),
            locale_utils: Arc::new(EnglishLocale),
        }
    }
}

impl Capabilities {
    pub fn with_today<F>(mut self, today: F) -> Self
    where
        F: Fn() -> CalendarDate + Send + Sync + 'static,
    {
        self.today = Arc::new(today);
        self
    }

    /// Pins the clock to a fixed day.
    pub fn with_fixed_today(self, today: CalendarDate) -> Self {
        self.with_today(move || today)
    }

    pub fn with_locale_utils(mut self, locale_utils: Arc<dyn LocaleUtils>) -> Self {
        self.locale_utils = locale_utils;
        self
    }
}

impl fmt::Debug for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Capabilities").finish_non_exhaustive()
    }
}

/// One displayed month with its modifier classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedMonth {
    pub title: String,
    pub grid: MonthGrid,
    pub modifiers: ModifierResult,
}

/// A committed focus step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FocusStep {
    pub focus_move: FocusMove,
    /// Whether the requested shift actually moved the window.
    pub window_shifted: bool,
}

/// A day the user clicked or activated from the keyboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayActivation {
    pub date: CalendarDate,
    pub modifiers: CellModifiers,
    /// Whether activating an outside day moved the window toward its month.
    pub window_shifted: bool,
}

/// What a key press did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum KeyOutcome {
    Navigated { changed: bool },
    Focused(FocusStep),
    Activated(DayActivation),
    Ignored,
}

/// A complete day picker: month window, focus and modifiers behind one API.
///
/// ```
/// use daypicker_core::config::DayPickerConfig;
/// use daypicker_core::date::CalendarDate;
/// use daypicker_core::picker::{Capabilities, DayPicker};
///
/// let july = CalendarDate::first_of_month(2015, 7).unwrap();
/// let config = DayPickerConfig {
///     initial_month: Some(july),
///     ..DayPickerConfig::default()
/// };
/// let mut picker = DayPicker::with_capabilities(config, Capabilities::default()).unwrap();
///
/// assert!(picker.show_next_month());
/// assert_eq!(picker.window().anchor_month(), CalendarDate::first_of_month(2015, 8).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct DayPicker {
    config: DayPickerConfig,
    grid_options: GridOptions,
    window: MonthWindow,
    focus: FocusNavigator,
    modifiers: Modifiers,
    capabilities: Capabilities,
}

impl DayPicker {
    pub fn new(config: DayPickerConfig) -> Result<Self> {
        Self::with_capabilities(config, Capabilities::default())
    }

    /// Builds the picker. The initial month defaults to the month of `today`.
    pub fn with_capabilities(config: DayPickerConfig, capabilities: Capabilities) -> Result<Self> {
        config.validate()?;
        let initial_month = config
            .initial_month
            .unwrap_or_else(|| (capabilities.today)());
        let window = MonthWindow::new(initial_month, &config)?;
        let grid_options = config.grid_options(capabilities.locale_utils.as_ref());

        Ok(Self {
            config,
            grid_options,
            window,
            focus: FocusNavigator::new(),
            modifiers: Modifiers::new(),
            capabilities,
        })
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn set_modifiers(&mut self, modifiers: Modifiers) {
        self.modifiers = modifiers;
    }

    pub fn config(&self) -> &DayPickerConfig {
        &self.config
    }

    pub fn grid_options(&self) -> GridOptions {
        self.grid_options
    }

    pub fn modifiers(&self) -> &Modifiers {
        &self.modifiers
    }

    pub fn window(&self) -> &MonthWindow {
        &self.window
    }

    pub fn state(&self) -> MonthWindowState {
        self.window.state()
    }

    pub fn today(&self) -> CalendarDate {
        (self.capabilities.today)()
    }

    // Output

    /// Grids of the displayed months, in display order.
    pub fn months(&self) -> Vec<MonthGrid> {
        self.window.visible_months(&self.grid_options)
    }

    /// Classifies every cell of `grid`. Reads the clock once.
    pub fn evaluate(&self, grid: &MonthGrid) -> ModifierResult {
        evaluate(grid, &self.modifiers, || self.today())
    }

    /// Modifiers of `date` as shown in the current window.
    pub fn modifiers_for(&self, date: CalendarDate) -> Option<CellModifiers> {
        let (grid, _) = self.locate(date)?;
        self.evaluate(&grid).get(date).cloned()
    }

    /// Every displayed month, classified and titled.
    pub fn render_pass(&self) -> Vec<RenderedMonth> {
        let today = self.today();
        self.months()
            .into_iter()
            .map(|grid| RenderedMonth {
                title: self.month_title(grid.anchor_month),
                modifiers: evaluate(&grid, &self.modifiers, || today),
                grid,
            })
            .collect()
    }

    /// Feeds every displayed month to `renderer`.
    pub fn render_with<R: MonthRenderer>(&self, renderer: &mut R) -> Vec<R::Output> {
        let context = RenderContext {
            locale_utils: self.capabilities.locale_utils.as_ref(),
            locale: &self.config.locale,
            first_day_of_week: self.grid_options.first_day_of_week,
            show_week_numbers: self.grid_options.show_week_numbers,
            focused: self.focus.focused(),
        };
        self.render_pass()
            .iter()
            .map(|month| render_month(renderer, &month.grid, &month.modifiers, &context))
            .collect()
    }

    pub fn month_title(&self, month: CalendarDate) -> String {
        self.capabilities
            .locale_utils
            .format_month_title(month, &self.config.locale)
    }

    pub fn format_day(&self, date: CalendarDate) -> String {
        self.capabilities
            .locale_utils
            .format_day(date, &self.config.locale)
    }

    pub fn weekday_labels(&self) -> Vec<WeekdayLabel> {
        weekday_labels(
            self.capabilities.locale_utils.as_ref(),
            &self.config.locale,
            self.grid_options.first_day_of_week,
        )
    }

    // Navigation

    pub fn can_go_next(&self) -> bool {
        self.window.can_go_next()
    }

    pub fn can_go_previous(&self) -> bool {
        self.window.can_go_previous()
    }

    pub fn can_change_year(&self) -> bool {
        self.window.can_change_year()
    }

    pub fn show_month(&mut self, month: CalendarDate) -> bool {
        self.window.show_month(month)
    }

    pub fn show_next_month(&mut self) -> bool {
        self.window.show_next_month()
    }

    pub fn show_previous_month(&mut self) -> bool {
        self.window.show_previous_month()
    }

    pub fn show_next_year(&mut self) -> bool {
        self.window.show_next_year()
    }

    pub fn show_previous_year(&mut self) -> bool {
        self.window.show_previous_year()
    }

    pub fn show_today(&mut self) -> bool {
        let today = self.today();
        self.window.show_today(today)
    }

    // Focus

    pub fn focused_day(&self) -> Option<CalendarDate> {
        self.focus.focused()
    }

    pub fn set_focus(&mut self, date: CalendarDate) {
        self.focus.set_focus(date);
    }

    pub fn clear_focus(&mut self) {
        self.focus.clear();
    }

    /// Moves focus one step, shifting the window first when the new day is
    /// not displayed. Returns `None` when no day is focused.
    ///
    /// Focus lands on the new day even if the window refuses to move.
    pub fn focus(&mut self, direction: FocusDirection) -> Option<FocusStep> {
        let from = self.focus.focused()?;
        let focus_move = self.focus.plan(from, direction, &self.window);
        let window_shifted = match focus_move.requested_anchor_shift {
            Some(AnchorShift::Next) => self.window.show_next_month(),
            Some(AnchorShift::Previous) => self.window.show_previous_month(),
            Some(AnchorShift::ToMonth(month)) => self.window.reveal_month(month),
            None => false,
        };
        self.focus.commit(&focus_move);

        tracing::debug!(
            from = %from,
            to = %focus_move.new_focus,
            window_shifted,
            "Focus moved"
        );

        Some(FocusStep {
            focus_move,
            window_shifted,
        })
    }

    pub fn focus_next_day(&mut self) -> Option<FocusStep> {
        self.focus(FocusDirection::NextDay)
    }

    pub fn focus_previous_day(&mut self) -> Option<FocusStep> {
        self.focus(FocusDirection::PreviousDay)
    }

    pub fn focus_next_week(&mut self) -> Option<FocusStep> {
        self.focus(FocusDirection::NextWeek)
    }

    pub fn focus_previous_week(&mut self) -> Option<FocusStep> {
        self.focus(FocusDirection::PreviousWeek)
    }

    // Interaction

    /// Activates `date` as if its cell was clicked.
    ///
    /// Returns `None` when the day is not displayed or its cell is empty.
    /// Activating an outside day moves the window toward that day's month.
    pub fn click_day(&mut self, date: CalendarDate) -> Option<DayActivation> {
        let (grid, cell) = self.locate(date)?;
        if cell.empty {
            tracing::debug!(date = %date, "Ignoring click on empty cell");
            return None;
        }
        let modifiers = self.evaluate(&grid).get(date).cloned()?;

        let window_shifted = if !cell.is_outside() {
            false
        } else if date > grid.anchor_month {
            self.window.show_next_month()
        } else {
            self.window.show_previous_month()
        };
        self.focus.set_focus(date);

        tracing::debug!(date = %date, window_shifted, "Day activated");

        Some(DayActivation {
            date,
            modifiers,
            window_shifted,
        })
    }

    /// Handles a key press on the container or on a day cell.
    pub fn handle_key(&mut self, key: Key, target: KeyTarget) -> KeyOutcome {
        match target {
            KeyTarget::Container => {
                let changed = match key {
                    Key::Left => self.window.show_previous_month(),
                    Key::Right => self.window.show_next_month(),
                    Key::Up => self.window.show_previous_year(),
                    Key::Down => self.window.show_next_year(),
                    Key::Enter | Key::Space => return KeyOutcome::Ignored,
                };
                KeyOutcome::Navigated { changed }
            }
            KeyTarget::Day(date) => {
                let direction = match key {
                    Key::Left => FocusDirection::PreviousDay,
                    Key::Right => FocusDirection::NextDay,
                    Key::Up => FocusDirection::PreviousWeek,
                    Key::Down => FocusDirection::NextWeek,
                    Key::Enter | Key::Space => {
                        return self
                            .click_day(date)
                            .map_or(KeyOutcome::Ignored, KeyOutcome::Activated);
                    }
                };
                self.focus.set_focus(date);
                self.focus(direction)
                    .map_or(KeyOutcome::Ignored, KeyOutcome::Focused)
            }
        }
    }

    /// Finds the displayed cell of `date`, preferring the grid whose month
    /// contains it over an outside cell of a neighbouring grid.
    fn locate(&self, date: CalendarDate) -> Option<(MonthGrid, DayCell)> {
        let grids = self.months();
        let grid = grids
            .iter()
            .find(|grid| grid.find(date).is_some_and(|cell| !cell.is_outside()))
            .or_else(|| grids.iter().find(|grid| grid.find(date).is_some()))?;
        let cell = *grid.find(date)?;
        Some((grid.clone(), cell))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use crate::error::DayPickerError;
    use crate::modifiers::{Matcher, SELECTED};

    fn make_date(year: i32, month: u32, day: u32) -> CalendarDate {
        CalendarDate::from_ymd(year, month, day).unwrap()
    }

    fn make_picker(config: DayPickerConfig) -> DayPicker {
        let capabilities = Capabilities::default().with_fixed_today(make_date(2015, 7, 15));
        DayPicker::with_capabilities(config, capabilities).unwrap()
    }

    fn july_config() -> DayPickerConfig {
        DayPickerConfig {
            initial_month: Some(make_date(2015, 7, 1)),
            ..DayPickerConfig::default()
        }
    }

    #[test]
    fn test_initial_month_defaults_to_today() {
        let picker = make_picker(DayPickerConfig::default());
        assert_eq!(picker.window().anchor_month(), make_date(2015, 7, 1));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = DayPickerConfig {
            number_of_months: 0,
            ..DayPickerConfig::default()
        };
        let err = DayPicker::new(config).unwrap_err();
        assert_eq!(err, DayPickerError::Config(ConfigError::ZeroMonths));
    }

    #[test]
    fn test_render_pass() {
        let config = DayPickerConfig {
            number_of_months: 2,
            ..july_config()
        };
        let picker = make_picker(config)
            .with_modifiers(Modifiers::new().with_selected(make_date(2015, 8, 3)));

        let months = picker.render_pass();
        assert_eq!(months.len(), 2);
        assert_eq!(months[0].title, "July 2015");
        assert_eq!(months[1].title, "August 2015");
        assert_eq!(months[0].modifiers.count("today"), 1);
        assert_eq!(months[1].modifiers.count(SELECTED), 1);
    }

    #[test]
    fn test_modifiers_for_prefers_month_cell() {
        let config = DayPickerConfig {
            number_of_months: 2,
            ..july_config()
        };
        let picker = make_picker(config);

        // Aug 1 is an outside cell of July and a month cell of August.
        let modifiers = picker.modifiers_for(make_date(2015, 8, 1)).unwrap();
        assert!(!modifiers.is_outside);
        assert_eq!(picker.modifiers_for(make_date(2015, 10, 1)), None);
    }

    #[test]
    fn test_focus_without_focused_day() {
        let mut picker = make_picker(july_config());
        assert_eq!(picker.focus_next_day(), None);
    }

    #[test]
    fn test_focus_shifts_window() {
        let mut picker = make_picker(july_config());
        picker.set_focus(make_date(2015, 7, 31));

        let step = picker.focus_next_day().unwrap();
        assert_eq!(step.focus_move.new_focus, make_date(2015, 8, 1));
        assert_eq!(step.focus_move.requested_anchor_shift, Some(AnchorShift::Next));
        assert!(step.window_shifted);
        assert_eq!(picker.window().anchor_month(), make_date(2015, 8, 1));
        assert_eq!(picker.focused_day(), Some(make_date(2015, 8, 1)));
    }

    #[test]
    fn test_focus_far_from_window_reveals_its_month() {
        let mut picker = make_picker(july_config());
        picker.set_focus(make_date(2015, 10, 10));

        let step = picker.focus_next_day().unwrap();
        assert_eq!(
            step.focus_move.requested_anchor_shift,
            Some(AnchorShift::ToMonth(make_date(2015, 10, 1)))
        );
        assert!(step.window_shifted);
        assert_eq!(picker.window().anchor_month(), make_date(2015, 10, 1));

        let focused = picker.focused_day().unwrap();
        assert_eq!(focused, make_date(2015, 10, 11));
        assert!(picker.window().contains_month(focused));
    }

    #[test]
    fn test_focus_moves_when_window_is_locked() {
        let config = DayPickerConfig {
            can_change_month: false,
            ..july_config()
        };
        let mut picker = make_picker(config);
        picker.set_focus(make_date(2015, 7, 1));

        let step = picker.focus_previous_day().unwrap();
        assert_eq!(step.focus_move.new_focus, make_date(2015, 6, 30));
        assert!(!step.window_shifted);
        assert_eq!(picker.window().anchor_month(), make_date(2015, 7, 1));
        assert_eq!(picker.focused_day(), Some(make_date(2015, 6, 30)));
    }

    #[test]
    fn test_click_day() {
        let mut picker = make_picker(july_config())
            .with_modifiers(Modifiers::new().with_disabled(Matcher::DaysOfWeek(vec![0, 6])));

        let activation = picker.click_day(make_date(2015, 7, 4)).unwrap();
        assert!(activation.modifiers.is_disabled);
        assert!(!activation.window_shifted);
        assert_eq!(picker.focused_day(), Some(make_date(2015, 7, 4)));
    }

    #[test]
    fn test_click_empty_cell_is_ignored() {
        let mut picker = make_picker(july_config());
        assert_eq!(picker.click_day(make_date(2015, 6, 30)), None);
        assert_eq!(picker.click_day(make_date(2015, 9, 1)), None);
    }

    #[test]
    fn test_click_outside_day_shifts_window() {
        let config = DayPickerConfig {
            enable_outside_days: true,
            ..july_config()
        };
        let mut picker = make_picker(config);

        let activation = picker.click_day(make_date(2015, 8, 1)).unwrap();
        assert!(activation.modifiers.is_outside);
        assert!(activation.window_shifted);
        assert_eq!(picker.window().anchor_month(), make_date(2015, 8, 1));

        // Jul 26 is a leading outside cell of August.
        let activation = picker.click_day(make_date(2015, 7, 26)).unwrap();
        assert!(activation.window_shifted);
        assert_eq!(picker.window().anchor_month(), make_date(2015, 7, 1));
    }

    #[test]
    fn test_container_keys() {
        let mut picker = make_picker(july_config());

        assert_eq!(
            picker.handle_key(Key::Right, KeyTarget::Container),
            KeyOutcome::Navigated { changed: true }
        );
        assert_eq!(picker.window().anchor_month(), make_date(2015, 8, 1));

        picker.handle_key(Key::Down, KeyTarget::Container);
        assert_eq!(picker.window().anchor_month(), make_date(2016, 8, 1));

        picker.handle_key(Key::Up, KeyTarget::Container);
        picker.handle_key(Key::Left, KeyTarget::Container);
        assert_eq!(picker.window().anchor_month(), make_date(2015, 7, 1));

        assert_eq!(
            picker.handle_key(Key::Enter, KeyTarget::Container),
            KeyOutcome::Ignored
        );
    }

    #[test]
    fn test_day_keys() {
        let mut picker = make_picker(july_config());
        let day = make_date(2015, 7, 10);

        let KeyOutcome::Focused(step) = picker.handle_key(Key::Down, KeyTarget::Day(day)) else {
            panic!("expected a focus step");
        };
        assert_eq!(step.focus_move.new_focus, make_date(2015, 7, 17));

        let KeyOutcome::Focused(step) = picker.handle_key(Key::Left, KeyTarget::Day(day)) else {
            panic!("expected a focus step");
        };
        assert_eq!(step.focus_move.new_focus, make_date(2015, 7, 9));

        let KeyOutcome::Activated(activation) =
            picker.handle_key(Key::Space, KeyTarget::Day(day))
        else {
            panic!("expected an activation");
        };
        assert_eq!(activation.date, day);
    }

    #[test]
    fn test_show_today() {
        let config = DayPickerConfig {
            initial_month: Some(make_date(2014, 1, 1)),
            ..DayPickerConfig::default()
        };
        let mut picker = make_picker(config);

        assert!(picker.show_today());
        assert_eq!(picker.window().anchor_month(), make_date(2015, 7, 1));
        assert!(!picker.show_today());
    }

    #[test]
    fn test_labels() {
        let config = DayPickerConfig {
            first_day_of_week: Some(1),
            ..july_config()
        };
        let picker = make_picker(config);

        assert_eq!(picker.format_day(make_date(2015, 7, 1)), "Wed Jul 01 2015");
        let labels = picker.weekday_labels();
        assert_eq!(labels[0].short, "Mo");
        assert_eq!(labels[6].long, "Sunday");
    }
}
