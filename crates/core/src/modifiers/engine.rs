use std::collections::BTreeSet;

use crate::date::CalendarDate;
use crate::grid::MonthGrid;

use super::types::{
    CellModifiers, ModifierResult, Modifiers, DISABLED, OUTSIDE, SELECTED, TODAY,
};

/// Classifies every cell of `grid` against the built-in and custom modifiers.
///
/// `today` is called once per pass. Predicates see the raw cell date, so
/// outside cells are classified like any other. Nothing is cached: calling
/// this twice with the same inputs yields equal results.
pub fn evaluate<F>(grid: &MonthGrid, modifiers: &Modifiers, today: F) -> ModifierResult
where
    F: Fn() -> CalendarDate,
{
    let today = today();

    let cells: Vec<CellModifiers> = grid
        .cells()
        .map(|cell| {
            let date = cell.date;
            let is_today = date.is_same_day(&today);
            let is_outside = cell.is_outside();
            let is_selected = modifiers.selected.as_ref().is_some_and(|m| m.matches(date));
            let is_disabled = modifiers.disabled.as_ref().is_some_and(|m| m.matches(date));

            let mut names = BTreeSet::new();
            for (flag, name) in [
                (is_today, TODAY),
                (is_outside, OUTSIDE),
                (is_selected, SELECTED),
                (is_disabled, DISABLED),
            ] {
                if flag {
                    names.insert(name.to_string());
                }
            }
            for (name, matcher) in modifiers.custom() {
                if matcher.matches(date) {
                    names.insert(name.to_string());
                }
            }

            CellModifiers {
                date,
                names,
                is_today,
                is_outside,
                is_disabled,
                is_selected,
            }
        })
        .collect();

    tracing::trace!(month = %grid.anchor_month, cells = cells.len(), "Evaluated modifiers");

    ModifierResult {
        anchor_month: grid.anchor_month,
        cells,
    }
}
