//! Parsing of numeric console input.
//!
//! The shell reads everything as text; these helpers turn it into task
//! numbers and priorities and report bad input as a typed error so the
//! caller can abort the operation before anything is loaded or written.

use super::task::PRIORITY_RANGE;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("'{0}' is not a whole number")]
    NotANumber(String),
    #[error("priority {0} is outside the range 1-5")]
    PriorityOutOfRange(i64),
}

/// Parses a signed integer, ignoring surrounding whitespace.
///
/// Zero and negative values are accepted here; range checks against the
/// task list happen in the operations.
pub fn parse_number(text: &str) -> Result<i64, InputError> {
    let trimmed = text.trim();
    trimmed.parse::<i64>().map_err(|_| InputError::NotANumber(trimmed.to_string()))
}

/// Parses a priority for a new task, requiring it to lie in 1-5.
pub fn parse_priority(text: &str) -> Result<i32, InputError> {
    let value = parse_number(text)?;
    match i32::try_from(value) {
        Ok(priority) if PRIORITY_RANGE.contains(&priority) => Ok(priority),
        _ => Err(InputError::PriorityOutOfRange(value)),
    }
}

/// Parses a priority without a range check, as the edit flow does.
pub fn parse_any_priority(text: &str) -> Result<i32, InputError> {
    let value = parse_number(text)?;
    i32::try_from(value).map_err(|_| InputError::NotANumber(text.trim().to_string()))
}
