use std::collections::BTreeSet;

use serde::Serialize;

use crate::date::CalendarDate;

use super::matcher::Matcher;

/// Reserved modifier name for the current day.
pub const TODAY: &str = "today";
/// Reserved modifier name for days outside the displayed month.
pub const OUTSIDE: &str = "outside";
/// Reserved modifier name for selected days.
pub const SELECTED: &str = "selected";
/// Reserved modifier name for disabled days.
pub const DISABLED: &str = "disabled";

/// The rules used to classify day cells.
///
/// `selected` and `disabled` feed the reserved modifiers; `custom` entries are
/// evaluated in insertion order and may overlap with them.
#[derive(Debug, Clone, Default)]
pub struct Modifiers {
    pub selected: Option<Matcher>,
    pub disabled: Option<Matcher>,
    custom: Vec<(String, Matcher)>,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the matcher for selected days.
    pub fn with_selected(mut self, matcher: impl Into<Matcher>) -> Self {
        self.selected = Some(matcher.into());
        self
    }

    /// Sets the matcher for disabled days.
    pub fn with_disabled(mut self, matcher: impl Into<Matcher>) -> Self {
        self.disabled = Some(matcher.into());
        self
    }

    /// Adds a named custom modifier. A repeated name replaces the earlier matcher.
    ///
    /// `selected` and `disabled` set the matching reserved rule. `today` and
    /// `outside` are computed from the grid and cannot be overridden, so they
    /// are ignored.
    pub fn with_modifier(mut self, name: impl Into<String>, matcher: impl Into<Matcher>) -> Self {
        let name = name.into();
        let matcher = matcher.into();
        match name.as_str() {
            SELECTED => return self.with_selected(matcher),
            DISABLED => return self.with_disabled(matcher),
            TODAY | OUTSIDE => {
                tracing::warn!(name = %name, "Ignoring custom modifier with a computed name");
                return self;
            }
            _ => {}
        }
        match self.custom.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = matcher,
            None => self.custom.push((name, matcher)),
        }
        self
    }

    /// Custom modifiers in insertion order.
    pub fn custom(&self) -> impl Iterator<Item = (&str, &Matcher)> {
        self.custom.iter().map(|(name, matcher)| (name.as_str(), matcher))
    }

    /// Returns true if no selection, disabled or custom rules are set.
    pub fn is_empty(&self) -> bool {
        self.selected.is_none() && self.disabled.is_none() && self.custom.is_empty()
    }
}

/// The modifiers active on a single day cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellModifiers {
    pub date: CalendarDate,
    /// Every active modifier, reserved names included.
    pub names: BTreeSet<String>,
    pub is_today: bool,
    pub is_outside: bool,
    pub is_disabled: bool,
    pub is_selected: bool,
}

impl CellModifiers {
    pub fn has(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}

/// Modifier classification of every cell in one month grid, in grid order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModifierResult {
    pub anchor_month: CalendarDate,
    pub cells: Vec<CellModifiers>,
}

impl ModifierResult {
    /// Returns the modifiers computed for `date`.
    pub fn get(&self, date: CalendarDate) -> Option<&CellModifiers> {
        self.cells.iter().find(|cell| cell.date == date)
    }

    /// Number of cells carrying the named modifier.
    pub fn count(&self, name: &str) -> usize {
        self.cells.iter().filter(|cell| cell.has(name)).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CellModifiers> {
        self.cells.iter()
    }
}
