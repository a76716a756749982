//! Error types for civil date-time handling.

use thiserror::Error;

/// Errors from parsing or constructing a civil date-time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// The date or time input was empty.
    #[error("empty {0} input")]
    Empty(&'static str),
    /// The date string is not a valid `YYYY-MM-DD` calendar date.
    #[error("invalid date: {0}")]
    InvalidDate(String),
    /// The time string is not a valid 24-hour `HH:mm` time.
    #[error("invalid time: {0}")]
    InvalidTime(String),
    /// A derived date falls outside the representable calendar range.
    #[error("date out of range: {0}")]
    OutOfRange(String),
}
