use serde::Serialize;

use crate::config::{ConfigError, DayPickerConfig};
use crate::date::{clamp_date, months_between, CalendarDate};
use crate::grid::{build_month_grid, GridOptions, MonthGrid};

/// Inclusive month bounds on which months may become the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct NavigationBounds {
    pub from_month: Option<CalendarDate>,
    pub to_month: Option<CalendarDate>,
}

impl NavigationBounds {
    /// Creates bounds normalized to month starts.
    pub fn new(
        from_month: Option<CalendarDate>,
        to_month: Option<CalendarDate>,
    ) -> Result<Self, ConfigError> {
        let from_month = from_month.map(CalendarDate::start_of_month);
        let to_month = to_month.map(CalendarDate::start_of_month);
        if let (Some(from), Some(to)) = (from_month, to_month) {
            if from > to {
                return Err(ConfigError::InvertedBounds { from, to });
            }
        }
        Ok(Self {
            from_month,
            to_month,
        })
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Returns true if `month` is before `from_month`, at month granularity.
    pub fn is_before_from(&self, month: CalendarDate) -> bool {
        self.from_month
            .is_some_and(|from| months_between(from, month) < 0)
    }

    /// Returns true if `month` is after `to_month`, at month granularity.
    pub fn is_after_to(&self, month: CalendarDate) -> bool {
        self.to_month.is_some_and(|to| months_between(month, to) < 0)
    }

    /// Returns true if `month` may become the anchor.
    pub fn allows(&self, month: CalendarDate) -> bool {
        !self.is_before_from(month) && !self.is_after_to(month)
    }
}

/// The displayed month window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthWindowState {
    /// First day of the first displayed month.
    pub anchor_month: CalendarDate,
    pub number_of_months: u32,
    pub paged_navigation: bool,
    pub reverse_months: bool,
}

/// Owns the anchor month and decides which navigation transitions are allowed.
///
/// Every transition either moves the anchor or leaves the state untouched and
/// returns `false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthWindow {
    state: MonthWindowState,
    bounds: NavigationBounds,
    can_change_month: bool,
}

impl MonthWindow {
    /// Creates the window from a validated configuration.
    ///
    /// The initial month is clamped into the bounds. With paged navigation and a
    /// `from_month`, it is then snapped to the start of its page so that pages
    /// always begin at `from_month + k * number_of_months`.
    pub fn new(initial_month: CalendarDate, config: &DayPickerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let bounds = config.bounds()?;
        let number_of_months = config.number_of_months;

        let mut anchor_month = clamp_date(
            initial_month.start_of_month(),
            bounds.from_month,
            bounds.to_month,
        );
        let paged = config.paged_navigation && number_of_months > 1;
        if let Some(from) = bounds.from_month.filter(|_| paged) {
            let page = months_between(from, anchor_month).div_euclid(number_of_months as i32);
            anchor_month = from.add_months(page * number_of_months as i32);
        }

        tracing::debug!(anchor = %anchor_month, number_of_months, "Month window created");

        Ok(Self {
            state: MonthWindowState {
                anchor_month,
                number_of_months,
                paged_navigation: config.paged_navigation,
                reverse_months: config.reverse_months,
            },
            bounds,
            can_change_month: config.can_change_month,
        })
    }

    pub fn state(&self) -> MonthWindowState {
        self.state
    }

    pub fn anchor_month(&self) -> CalendarDate {
        self.state.anchor_month
    }

    pub fn bounds(&self) -> NavigationBounds {
        self.bounds
    }

    pub fn can_change_month(&self) -> bool {
        self.can_change_month
    }

    /// Last month of the window, in calendar order.
    pub fn last_visible_month(&self) -> CalendarDate {
        self.state
            .anchor_month
            .add_months(self.state.number_of_months as i32 - 1)
    }

    /// Returns true if the month of `date` is currently displayed.
    pub fn contains_month(&self, date: CalendarDate) -> bool {
        let offset = months_between(self.state.anchor_month, date);
        (0..self.state.number_of_months as i32).contains(&offset)
    }

    /// Whether the next-month control should be enabled.
    pub fn can_go_next(&self) -> bool {
        self.can_change_month
            && self.bounds.to_month.is_none_or(|to| {
                months_between(self.state.anchor_month, to) >= self.state.number_of_months as i32
            })
    }

    /// Whether the previous-month control should be enabled.
    ///
    /// The anchor reached by the step must not precede `from_month`, so a paged
    /// window that is off its page grid cannot step back past the bound.
    pub fn can_go_previous(&self) -> bool {
        self.can_change_month
            && !self
                .bounds
                .is_before_from(self.state.anchor_month.add_months(-self.step()))
    }

    /// Whether year navigation is available at all.
    pub fn can_change_year(&self) -> bool {
        self.can_change_month
    }

    /// Shows the month containing `target`, unless it is outside the bounds.
    pub fn show_month(&mut self, target: CalendarDate) -> bool {
        let target = target.start_of_month();
        if !self.bounds.allows(target) {
            tracing::debug!(target = %target, "Month outside navigation bounds");
            return false;
        }
        self.set_anchor(target)
    }

    /// Advances by one month, or by a whole page with paged navigation.
    pub fn show_next_month(&mut self) -> bool {
        if !self.can_go_next() {
            tracing::debug!(anchor = %self.state.anchor_month, "Next month blocked");
            return false;
        }
        let target = self.state.anchor_month.add_months(self.step());
        self.set_anchor(target)
    }

    /// Goes back by one month, or by a whole page with paged navigation.
    pub fn show_previous_month(&mut self) -> bool {
        if !self.can_go_previous() {
            tracing::debug!(anchor = %self.state.anchor_month, "Previous month blocked");
            return false;
        }
        let target = self.state.anchor_month.add_months(-self.step());
        self.set_anchor(target)
    }

    /// Advances by twelve months, unless the window would pass `to_month`.
    pub fn show_next_year(&mut self) -> bool {
        let target = self.state.anchor_month.add_months(12);
        let last = target.add_months(self.state.number_of_months as i32 - 1);
        if !self.can_change_year() || self.bounds.is_after_to(last) {
            tracing::debug!(anchor = %self.state.anchor_month, "Next year blocked");
            return false;
        }
        self.set_anchor(target)
    }

    /// Goes back twelve months, unless the anchor would precede `from_month`.
    pub fn show_previous_year(&mut self) -> bool {
        let target = self.state.anchor_month.add_months(-12);
        if !self.can_change_year() || self.bounds.is_before_from(target) {
            tracing::debug!(anchor = %self.state.anchor_month, "Previous year blocked");
            return false;
        }
        self.set_anchor(target)
    }

    /// Moves the window so the month of `date` is displayed.
    ///
    /// Paged windows stay aligned to pages counted from `from_month`, or from
    /// the current anchor when there is no lower bound. Refused when month
    /// changes are disabled or the target anchor is out of bounds.
    pub fn reveal_month(&mut self, date: CalendarDate) -> bool {
        let month = date.start_of_month();
        if self.contains_month(month) {
            return false;
        }
        if !self.can_change_month {
            tracing::debug!(month = %month, "Reveal blocked");
            return false;
        }
        let number_of_months = self.state.number_of_months as i32;
        let target = if self.state.paged_navigation && number_of_months > 1 {
            let origin = self.bounds.from_month.unwrap_or(self.state.anchor_month);
            let page = months_between(origin, month).div_euclid(number_of_months);
            origin.add_months(page * number_of_months)
        } else {
            month
        };
        self.show_month(target)
    }

    /// Shows the month containing `today`.
    pub fn show_today(&mut self, today: CalendarDate) -> bool {
        if !self.can_change_month {
            return false;
        }
        self.show_month(today)
    }

    /// Anchors of the displayed months, in display order.
    pub fn visible_anchors(&self) -> Vec<CalendarDate> {
        let mut anchors: Vec<CalendarDate> = (0..self.state.number_of_months as i32)
            .map(|offset| self.state.anchor_month.add_months(offset))
            .collect();
        if self.state.reverse_months {
            anchors.reverse();
        }
        anchors
    }

    /// Builds the grids of the displayed months, in display order.
    pub fn visible_months(&self, options: &GridOptions) -> Vec<MonthGrid> {
        self.visible_anchors()
            .into_iter()
            .map(|anchor| build_month_grid(anchor, options))
            .collect()
    }

    fn step(&self) -> i32 {
        if self.state.paged_navigation {
            self.state.number_of_months as i32
        } else {
            1
        }
    }

    fn set_anchor(&mut self, target: CalendarDate) -> bool {
        if target == self.state.anchor_month {
            return false;
        }
        tracing::debug!(from = %self.state.anchor_month, to = %target, "Anchor month changed");
        self.state.anchor_month = target;
        true
    }
}
