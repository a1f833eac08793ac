//! Headless day picker.
//!
//! Builds month grids, classifies days with modifiers, and drives month
//! navigation and keyboard focus. Rendering is left to the host through
//! [`render::MonthRenderer`].

pub mod config;
pub mod date;
pub mod error;
pub mod grid;
pub mod locale;
pub mod modifiers;
pub mod navigation;
pub mod picker;
pub mod render;
pub mod serde;

pub use config::DayPickerConfig;
pub use date::CalendarDate;
pub use error::{DayPickerError, Result};
pub use picker::{Capabilities, DayPicker};
