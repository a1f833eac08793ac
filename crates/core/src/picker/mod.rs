mod day_picker;
mod error;
mod keys;

pub use day_picker::{
    Capabilities, DayActivation, DayPicker, FocusStep, KeyOutcome, RenderedMonth, TodayFn,
};
pub use error::KeyError;
pub use keys::{Key, KeyTarget};
