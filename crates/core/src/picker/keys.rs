use std::str::FromStr;

use serde::Serialize;

use crate::date::CalendarDate;

use super::error::KeyError;

/// Keys the day picker reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Key {
    Left,
    Up,
    Right,
    Down,
    Enter,
    Space,
}

impl Key {
    /// Maps a DOM-style key code.
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            37 => Some(Key::Left),
            38 => Some(Key::Up),
            39 => Some(Key::Right),
            40 => Some(Key::Down),
            13 => Some(Key::Enter),
            32 => Some(Key::Space),
            _ => None,
        }
    }

    pub fn code(self) -> u32 {
        match self {
            Key::Left => 37,
            Key::Up => 38,
            Key::Right => 39,
            Key::Down => 40,
            Key::Enter => 13,
            Key::Space => 32,
        }
    }
}

impl FromStr for Key {
    type Err = KeyError;

    /// Accepts key names (`left`, `ArrowLeft`, `enter`, ...) or numeric codes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(code) = trimmed.parse::<u32>() {
            return Key::from_code(code).ok_or_else(|| KeyError::Unknown(trimmed.to_string()));
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "left" | "arrowleft" => Ok(Key::Left),
            "up" | "arrowup" => Ok(Key::Up),
            "right" | "arrowright" => Ok(Key::Right),
            "down" | "arrowdown" => Ok(Key::Down),
            "enter" | "return" => Ok(Key::Enter),
            "space" => Ok(Key::Space),
            _ => Err(KeyError::Unknown(trimmed.to_string())),
        }
    }
}

/// Where a key press happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum KeyTarget {
    /// The picker container: arrows move months and years.
    Container,
    /// A day cell: arrows move focus, enter and space activate the day.
    Day(CalendarDate),
}
