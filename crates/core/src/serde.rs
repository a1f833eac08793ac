//! Serde helper functions for configuration deserialization.
//!
//! Hosts often hand over configuration straight from form fields or JSON files,
//! where an empty string means "unset".

use serde::{Deserialize, Deserializer};

use crate::date::CalendarDate;

/// Deserialize an optional month, treating empty strings as None.
/// Accepts formats: YYYY-MM or YYYY-MM-DD. The result is the first day of the month.
pub fn deserialize_optional_month<'de, D>(
    deserializer: D,
) -> Result<Option<CalendarDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if !s.trim().is_empty() => CalendarDate::parse_month(&s)
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}
