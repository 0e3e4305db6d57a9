//! Error types for tickface_animation

use thiserror::Error;

/// Errors that can occur while building or sampling animations
#[derive(Error, Clone, Debug, PartialEq)]
pub enum AnimationError {
    /// The sample time was NaN or infinite
    #[error("cannot sample animation at non-finite time {0}")]
    NonFiniteTime(f64),

    /// The loop progress could not be computed for this time and duration
    #[error("animation progress overflowed at time {0}")]
    ProgressOverflow(f64),

    /// No animation kind has this numeric code
    #[error("unknown animation kind code {0}")]
    UnknownKindCode(i64),

    /// No animation kind has this name
    #[error("unknown animation kind `{0}`")]
    UnknownKindName(String),
}

/// Result type for tickface_animation operations
pub type Result<T> = std::result::Result<T, AnimationError>;
