//! Builds the picker from a config file and command line flags.

use std::path::Path;

use daypicker_core::config::DayPickerConfig;
use daypicker_core::modifiers::{Matcher, Modifiers};
use daypicker_core::picker::{Capabilities, DayPicker};
use daypicker_core::DayPickerError;

use crate::cli::PickerArgs;
use crate::error::{CliError, Result};

/// Reads `--config` when given, then applies the flags on top.
pub fn load_config(args: &PickerArgs) -> Result<DayPickerConfig> {
    let mut config = match &args.config {
        Some(path) => read_config_file(path)?,
        None => DayPickerConfig::default(),
    };
    apply_args(&mut config, args);
    config.validate().map_err(DayPickerError::from)?;

    tracing::debug!(
        number_of_months = config.number_of_months,
        paged = config.paged_navigation,
        "Configuration loaded"
    );

    Ok(config)
}

/// Parses a JSON configuration file.
pub fn read_config_file(path: &Path) -> Result<DayPickerConfig> {
    let contents = std::fs::read_to_string(path).map_err(|source| CliError::ReadConfig {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| CliError::ParseConfig {
        path: path.to_path_buf(),
        source,
    })
}

/// Overrides `config` with the flags that were given. Boolean flags can only
/// turn options on, except `--locked` which turns navigation off.
pub fn apply_args(config: &mut DayPickerConfig, args: &PickerArgs) {
    if let Some(month) = args.month {
        config.initial_month = Some(month);
    }
    if let Some(months) = args.months {
        config.number_of_months = months;
    }
    if let Some(first_day_of_week) = args.first_day_of_week {
        config.first_day_of_week = Some(first_day_of_week);
    }
    if let Some(locale) = &args.locale {
        config.locale = locale.clone();
    }
    if let Some(from) = args.from {
        config.from_month = Some(from);
    }
    if let Some(to) = args.to {
        config.to_month = Some(to);
    }
    config.fixed_weeks |= args.fixed_weeks;
    config.enable_outside_days |= args.outside_days;
    config.show_week_numbers |= args.week_numbers;
    config.paged_navigation |= args.paged;
    config.reverse_months |= args.reverse;
    if args.locked {
        config.can_change_month = false;
    }
}

/// Modifiers from `--selected` and `--disabled`.
pub fn build_modifiers(args: &PickerArgs) -> Modifiers {
    let mut modifiers = Modifiers::new();
    if let Some(selected) = combine(&args.selected) {
        modifiers = modifiers.with_selected(selected);
    }
    if let Some(disabled) = combine(&args.disabled) {
        modifiers = modifiers.with_disabled(disabled);
    }
    modifiers
}

pub fn build_picker(args: &PickerArgs) -> Result<DayPicker> {
    let config = load_config(args)?;
    let mut capabilities = Capabilities::default();
    if let Some(today) = args.today {
        capabilities = capabilities.with_fixed_today(today);
    }
    let picker = DayPicker::with_capabilities(config, capabilities)?;
    Ok(picker.with_modifiers(build_modifiers(args)))
}

fn combine(matchers: &[Matcher]) -> Option<Matcher> {
    match matchers {
        [] => None,
        [matcher] => Some(matcher.clone()),
        many => Some(Matcher::Any(many.to_vec())),
    }
}
