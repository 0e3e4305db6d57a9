//! Error types for tickface_clock

use thiserror::Error;
use tickface_core::Diagnostic;

/// Errors that can occur while creating or addressing clocks
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ClockError {
    /// Hour offset outside -12..=14
    #[error("hour offset {0} is outside -12..=14")]
    InvalidHourOffset(i64),

    /// Minute offset other than 0, 30 or 45
    #[error("minute offset {0} is not one of 0, 30 or 45")]
    InvalidMinuteOffset(i64),

    /// No clock was created with this index
    #[error("no clock with index {0}")]
    UnknownClock(i64),

    /// Unrecognized user action name
    #[error("unknown clock action `{0}`")]
    UnknownAction(String),
}

impl ClockError {
    /// The diagnostic reported for this error, if it is one the core reports
    pub fn diagnostic(&self) -> Option<Diagnostic> {
        match self {
            ClockError::InvalidHourOffset(hour) => {
                Some(Diagnostic::InvalidHourOffset { hour: *hour })
            }
            ClockError::InvalidMinuteOffset(minute) => Some(Diagnostic::InvalidMinuteOffset {
                minute: *minute,
            }),
            ClockError::UnknownClock(index) => Some(Diagnostic::UnknownClock { index: *index }),
            ClockError::UnknownAction(_) => None,
        }
    }
}

/// Result type for tickface_clock operations
pub type Result<T> = std::result::Result<T, ClockError>;
