//! Error types for chart calculations.

use bazi_time::TimeError;
use thiserror::Error;

/// Errors reported by a [`CalendarService`](crate::calendar::CalendarService).
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum CalendarError {
    /// Year outside the range the calendar can resolve.
    #[error("year {year} outside supported calendar range")]
    OutOfRange { year: i32 },
    /// Iterative solar-term search did not converge.
    #[error("no convergence: {0}")]
    NoConvergence(&'static str),
    /// No solar-term boundary was found in the searched tables.
    #[error("no solar-term boundary {0} the birth moment")]
    NoBoundary(&'static str),
    /// Calendar configuration failed validation.
    #[error("invalid calendar config: {0}")]
    InvalidConfig(&'static str),
    /// The calendar returned a pillar that is not one of the 60 cycle terms.
    #[error("invalid pillar: {0}")]
    InvalidPillar(String),
    /// Date-time construction failed.
    #[error("time error: {0}")]
    Time(#[from] TimeError),
}

/// Errors from parsing stems, branches, pillars and chart enums.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseError {
    #[error("unknown stem: {0}")]
    Stem(String),
    #[error("unknown branch: {0}")]
    Branch(String),
    #[error("invalid pillar: {0}")]
    Pillar(String),
    #[error("unknown gender: {0} (expected male or female)")]
    Gender(String),
}
