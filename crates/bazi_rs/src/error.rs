use bazi_base::{CalendarError, ParseError};
use bazi_time::TimeError;
use thiserror::Error;

/// Errors from the convenience API.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BaziError {
    #[error(transparent)]
    Time(#[from] TimeError),
    #[error(transparent)]
    Calendar(#[from] CalendarError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}
