use thiserror::Error;

/// Errors that can occur when parsing a declarative day matcher.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModifierError {
    #[error("Matcher cannot be empty")]
    EmptyMatcher,
    #[error("Invalid matcher: {0}")]
    InvalidMatcher(String),
}
