mod error;

pub use error::ConfigError;

use serde::{Deserialize, Serialize};

use crate::date::CalendarDate;
use crate::grid::GridOptions;
use crate::locale::LocaleUtils;
use crate::navigation::NavigationBounds;
use crate::serde::deserialize_optional_month;

/// Display and navigation options for a day picker.
///
/// Deserializes from camelCase JSON; every field is optional.
///
/// ```
/// use daypicker_core::config::DayPickerConfig;
///
/// let config: DayPickerConfig =
///     serde_json::from_str(r#"{"numberOfMonths": 2, "fromMonth": "2015-07"}"#).unwrap();
///
/// assert_eq!(config.number_of_months, 2);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DayPickerConfig {
    pub locale: String,
    /// Month shown first; defaults to the current month.
    #[serde(deserialize_with = "deserialize_optional_month")]
    pub initial_month: Option<CalendarDate>,
    pub number_of_months: u32,
    /// 0 = Sunday. When unset, the locale decides.
    pub first_day_of_week: Option<u32>,
    pub fixed_weeks: bool,
    pub enable_outside_days: bool,
    pub paged_navigation: bool,
    pub reverse_months: bool,
    pub can_change_month: bool,
    #[serde(deserialize_with = "deserialize_optional_month")]
    pub from_month: Option<CalendarDate>,
    #[serde(deserialize_with = "deserialize_optional_month")]
    pub to_month: Option<CalendarDate>,
    pub show_week_numbers: bool,
}

impl Default for DayPickerConfig {
    fn default() -> Self {
        Self {
            locale: "en".to_string(),
            initial_month: None,
            number_of_months: 1,
            first_day_of_week: None,
            fixed_weeks: false,
            enable_outside_days: false,
            paged_navigation: false,
            reverse_months: false,
            can_change_month: true,
            from_month: None,
            to_month: None,
            show_week_numbers: false,
        }
    }
}

impl DayPickerConfig {
    /// Checks the configuration once, before any state is built from it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.number_of_months == 0 {
            return Err(ConfigError::ZeroMonths);
        }
        NavigationBounds::new(self.from_month, self.to_month).map(|_| ())
    }

    /// Navigation bounds normalized to month starts.
    pub fn bounds(&self) -> Result<NavigationBounds, ConfigError> {
        NavigationBounds::new(self.from_month, self.to_month)
    }

    /// Resolves the first day of the week, asking the locale when unset.
    pub fn resolve_first_day_of_week(&self, locale_utils: &dyn LocaleUtils) -> u32 {
        self.first_day_of_week
            .unwrap_or_else(|| locale_utils.first_day_of_week(&self.locale))
            % 7
    }

    /// Grid layout options derived from this configuration.
    pub fn grid_options(&self, locale_utils: &dyn LocaleUtils) -> GridOptions {
        GridOptions {
            first_day_of_week: self.resolve_first_day_of_week(locale_utils),
            fixed_weeks: self.fixed_weeks,
            include_outside_days: self.enable_outside_days,
            show_week_numbers: self.show_week_numbers,
        }
    }
}
