use thiserror::Error;

use crate::config::ConfigError;
use crate::date::DateError;
use crate::modifiers::ModifierError;
use crate::picker::KeyError;

/// Any error the day picker core can return.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DayPickerError {
    #[error(transparent)]
    Date(#[from] DateError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Modifier(#[from] ModifierError),

    #[error(transparent)]
    Key(#[from] KeyError),
}

pub type Result<T> = std::result::Result<T, DayPickerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_is_transparent() {
        let err: DayPickerError = ConfigError::ZeroMonths.into();
        assert_eq!(err.to_string(), "Number of months must be at least 1");

        let err: DayPickerError = DateError::YearOutOfRange(0).into();
        assert_eq!(
            err.to_string(),
            "Year 0 is outside the supported range (1-9999)"
        );
    }
}
