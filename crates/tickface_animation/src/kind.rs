//! Animation kinds
//!
//! The closed set of transforms an animation can drive, and the exhaustive
//! mapping from an interpolated value to a matrix.

use std::fmt;
use std::str::FromStr;

use tickface_core::{AffineMatrix, Diagnostic, DiagnosticSink, Vector2};

use crate::error::AnimationError;

/// Transform driven by an animation
///
/// The discriminants are the wire codes used by configuration files.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AnimationKind {
    /// Contributes nothing; skipped during composition
    #[default]
    None = 0,
    /// Moves the content by `(x, y)` pixels
    Translation = 1,
    /// Orbits the content by `x` degrees around the pivot, keeping its orientation
    CircularTranslation = 2,
    /// Scales the content by `(x, y)` about the pivot
    Homothety = 3,
    /// Rotates the content by `x` degrees about the pivot
    Rotation = 4,
}

impl AnimationKind {
    pub const ALL: [AnimationKind; 5] = [
        AnimationKind::None,
        AnimationKind::Translation,
        AnimationKind::CircularTranslation,
        AnimationKind::Homothety,
        AnimationKind::Rotation,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            AnimationKind::None => "none",
            AnimationKind::Translation => "translation",
            AnimationKind::CircularTranslation => "circular_translation",
            AnimationKind::Homothety => "homothety",
            AnimationKind::Rotation => "rotation",
        }
    }

    /// Resolve a wire code, falling back to [`AnimationKind::None`] with a
    /// diagnostic when the code is unknown.
    pub fn from_code(code: i64, sink: &dyn DiagnosticSink) -> Self {
        Self::try_from(code).unwrap_or_else(|_| {
            sink.report(&Diagnostic::InvalidAnimationKind {
                found: code.to_string(),
            });
            AnimationKind::None
        })
    }

    /// Resolve a kind name, falling back to [`AnimationKind::None`] with a
    /// diagnostic when the name is unknown.
    pub fn from_name(name: &str, sink: &dyn DiagnosticSink) -> Self {
        name.parse().unwrap_or_else(|_| {
            sink.report(&Diagnostic::InvalidAnimationKind {
                found: name.to_string(),
            });
            AnimationKind::None
        })
    }

    /// Whether the pivot point affects the transform
    pub fn uses_pivot(self) -> bool {
        matches!(
            self,
            AnimationKind::CircularTranslation | AnimationKind::Homothety | AnimationKind::Rotation
        )
    }

    /// Whether the `y` component of the animated value is read
    /// (angle-driven kinds only read `x`).
    pub fn uses_y(self) -> bool {
        matches!(self, AnimationKind::Translation | AnimationKind::Homothety)
    }

    /// Matrix for an interpolated `value`
    pub fn matrix(self, value: Vector2, pivot: Vector2) -> AffineMatrix {
        match self {
            AnimationKind::None => AffineMatrix::IDENTITY,
            AnimationKind::Translation => AffineMatrix::translation(value.x(), value.y()),
            AnimationKind::CircularTranslation => {
                AffineMatrix::circular_translation(value.x(), pivot)
            }
            AnimationKind::Homothety => AffineMatrix::homothety(value.x(), value.y(), pivot),
            AnimationKind::Rotation => AffineMatrix::rotation(value.x(), pivot),
        }
    }
}

impl TryFrom<i64> for AnimationKind {
    type Error = AnimationError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(AnimationKind::None),
            1 => Ok(AnimationKind::Translation),
            2 => Ok(AnimationKind::CircularTranslation),
            3 => Ok(AnimationKind::Homothety),
            4 => Ok(AnimationKind::Rotation),
            _ => Err(AnimationError::UnknownKindCode(code)),
        }
    }
}

impl FromStr for AnimationKind {
    type Err = AnimationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        AnimationKind::ALL
            .into_iter()
            .find(|kind| kind.name() == normalized)
            .ok_or_else(|| AnimationError::UnknownKindName(s.to_string()))
    }
}

impl fmt::Display for AnimationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tickface_core::CollectingSink;

    #[test]
    fn test_codes_round_trip() {
        for kind in AnimationKind::ALL {
            assert_eq!(AnimationKind::try_from(kind.code() as i64), Ok(kind));
        }
    }

    #[test]
    fn test_unknown_code_falls_back_to_none() {
        let sink = CollectingSink::new();
        assert_eq!(AnimationKind::from_code(7, &sink), AnimationKind::None);
        assert_eq!(AnimationKind::from_code(-1, &sink), AnimationKind::None);
        assert_eq!(
            sink.take(),
            vec![
                Diagnostic::InvalidAnimationKind { found: "7".into() },
                Diagnostic::InvalidAnimationKind { found: "-1".into() },
            ]
        );
    }

    #[test]
    fn test_known_code_reports_nothing() {
        let sink = CollectingSink::new();
        assert_eq!(AnimationKind::from_code(4, &sink), AnimationKind::Rotation);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_parse_names() {
        assert_eq!(
            "Circular-Translation".parse::<AnimationKind>(),
            Ok(AnimationKind::CircularTranslation)
        );
        assert_eq!(" homothety ".parse::<AnimationKind>(), Ok(AnimationKind::Homothety));

        let sink = CollectingSink::new();
        assert_eq!(AnimationKind::from_name("shear", &sink), AnimationKind::None);
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_parameter_usage() {
        assert!(!AnimationKind::Translation.uses_pivot());
        assert!(AnimationKind::Translation.uses_y());
        assert!(AnimationKind::Rotation.uses_pivot());
        assert!(!AnimationKind::Rotation.uses_y());
        assert!(!AnimationKind::CircularTranslation.uses_y());
    }

    #[test]
    fn test_rotation_matrix_reads_only_x() {
        let sink = CollectingSink::new();
        let pivot = Vector2::with_sink(10.0, 10.0, &sink);
        let a = AnimationKind::Rotation.matrix(Vector2::with_sink(45.0, 0.0, &sink), pivot);
        let b = AnimationKind::Rotation.matrix(Vector2::with_sink(45.0, 999.0, &sink), pivot);
        assert_eq!(a, b);
        assert_eq!(a, AffineMatrix::rotation(45.0, pivot));
    }

    #[test]
    fn test_none_matrix_is_identity() {
        let value = Vector2::ONE;
        assert!(AnimationKind::None.matrix(value, value).is_identity());
    }
}
