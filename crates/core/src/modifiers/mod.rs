mod engine;
mod error;
mod matcher;
mod types;

pub use engine::evaluate;
pub use error::ModifierError;
pub use matcher::{Matcher, Predicate};
pub use types::{
    CellModifiers, ModifierResult, Modifiers, DISABLED, OUTSIDE, SELECTED, TODAY,
};
