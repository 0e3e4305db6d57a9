//! Diagnostic reporting
//!
//! Recoverable conditions (bad numeric input, unknown clock references,
//! failed animation samples) never abort the caller. The core substitutes a
//! safe default and hands a [`Diagnostic`] to a [`DiagnosticSink`]; the
//! boundary decides whether that becomes a log line, a dialog or an error.

use std::fmt;
use std::sync::{Mutex, PoisonError};

use thiserror::Error;

/// Vector component named in a diagnostic
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

/// A recoverable condition reported by the core
#[derive(Error, Clone, Debug, PartialEq)]
pub enum Diagnostic {
    /// A vector component was not a finite number and was replaced by 0
    #[error("invalid {axis} component {value} for 2D vector, using 0")]
    InvalidVectorComponent { axis: Axis, value: f64 },

    /// An animation kind could not be recognized and was replaced by none
    #[error("invalid 2D animation kind `{found}`, using none")]
    InvalidAnimationKind { found: String },

    /// An animation time offset was not finite and was replaced by 0
    #[error("invalid 2D animation time offset {value}, using 0")]
    InvalidTimeOffset { value: f64 },

    /// An animation duration was not finite or negative and was replaced by 0
    #[error("invalid 2D animation duration {value}, using 0")]
    InvalidDuration { value: f64 },

    /// An animation could not be sampled; identity was used instead
    #[error("invalid time {time} to sample 2D animation, using identity")]
    SamplingFailed { time: f64 },

    /// Clock creation was refused because of its hour offset
    #[error("invalid hour offset {hour} to create clock (expected -12..=14)")]
    InvalidHourOffset { hour: i64 },

    /// Clock creation was refused because of its minute offset
    #[error("invalid minute offset {minute} to create clock (expected 0, 30 or 45)")]
    InvalidMinuteOffset { minute: i64 },

    /// An animation targeted a clock that does not exist and was dropped
    #[error("invalid clock index {index} to add an animation")]
    UnknownClock { index: i64 },
}

/// Receiver for [`Diagnostic`]s
///
/// Implemented for [`TracingSink`], [`CollectingSink`] and any
/// `Fn(&Diagnostic)` closure.
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, diagnostic: &Diagnostic);
}

impl<F> DiagnosticSink for F
where
    F: Fn(&Diagnostic) + Send + Sync,
{
    fn report(&self, diagnostic: &Diagnostic) {
        self(diagnostic)
    }
}

/// Sink that logs every diagnostic as a `tracing` warning
///
/// Used by the convenience constructors that don't take a sink.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: &Diagnostic) {
        tracing::warn!("{}", diagnostic);
    }
}

/// Sink that keeps every diagnostic in memory
#[derive(Debug, Default)]
pub struct CollectingSink {
    entries: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything reported so far
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.lock().clone()
    }

    /// Drain everything reported so far
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.lock())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Diagnostic>> {
        // A panic while pushing can't leave the Vec half-written
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&self, diagnostic: &Diagnostic) {
        self.lock().push(diagnostic.clone());
    }
}
