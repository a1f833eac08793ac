mod focus;
mod window;

pub use focus::{AnchorShift, FocusDirection, FocusMove, FocusNavigator};
pub use window::{MonthWindow, MonthWindowState, NavigationBounds};
