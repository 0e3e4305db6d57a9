//! Looping 2D animations
//!
//! An [`Animation`] interpolates linearly from a start value to an end value
//! over `duration` seconds, restarting forever in both time directions from
//! `time_offset`. The interpolated value is turned into a matrix according to
//! the animation's [`AnimationKind`].

use tickface_core::{AffineMatrix, Diagnostic, DiagnosticSink, TracingSink, Vector2};

use crate::error::{AnimationError, Result};
use crate::kind::AnimationKind;

/// One timed, looping transform animation
#[derive(Clone, Debug, PartialEq)]
pub struct Animation {
    kind: AnimationKind,
    pivot: Vector2,
    start: Vector2,
    end: Vector2,
    /// Seconds
    time_offset: f64,
    /// Seconds, never negative; zero means "always at the end value"
    duration: f64,
}

impl Animation {
    /// Create an animation, logging a warning for each invalid timing value
    pub fn new(
        kind: AnimationKind,
        pivot: Vector2,
        start: Vector2,
        end: Vector2,
        time_offset: f64,
        duration: f64,
    ) -> Self {
        Self::with_sink(kind, pivot, start, end, time_offset, duration, &TracingSink)
    }

    /// Create an animation, reporting invalid timing values to `sink`.
    ///
    /// A non-finite `time_offset` becomes 0. A non-finite or negative
    /// `duration` becomes 0.
    #[allow(clippy::too_many_arguments)]
    pub fn with_sink(
        kind: AnimationKind,
        pivot: Vector2,
        start: Vector2,
        end: Vector2,
        time_offset: f64,
        duration: f64,
        sink: &dyn DiagnosticSink,
    ) -> Self {
        let time_offset = if time_offset.is_finite() {
            time_offset
        } else {
            sink.report(&Diagnostic::InvalidTimeOffset { value: time_offset });
            0.0
        };

        let duration = if duration.is_finite() && duration >= 0.0 {
            duration
        } else {
            sink.report(&Diagnostic::InvalidDuration { value: duration });
            0.0
        };

        Self {
            kind,
            pivot,
            start,
            end,
            time_offset,
            duration,
        }
    }

    pub fn kind(&self) -> AnimationKind {
        self.kind
    }

    pub fn pivot(&self) -> Vector2 {
        self.pivot
    }

    pub fn start(&self) -> Vector2 {
        self.start
    }

    pub fn end(&self) -> Vector2 {
        self.end
    }

    pub fn time_offset(&self) -> f64 {
        self.time_offset
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Whether this animation contributes nothing to a composition
    pub fn is_noop(&self) -> bool {
        self.kind == AnimationKind::None
    }

    /// Loop progress in [0, 1) at time `t` (seconds)
    ///
    /// Times before `time_offset` loop backwards, so the progress is always
    /// non-negative. A zero-duration animation is permanently finished (1.0).
    pub fn progress(&self, t: f64) -> Result<f64> {
        if !t.is_finite() {
            return Err(AnimationError::NonFiniteTime(t));
        }
        if self.duration == 0.0 {
            return Ok(1.0);
        }

        let loops = (t - self.time_offset) / self.duration;
        if !loops.is_finite() {
            return Err(AnimationError::ProgressOverflow(t));
        }
        Ok(loops - loops.floor())
    }

    /// Interpolated value at time `t` (seconds)
    pub fn value_at(&self, t: f64) -> Result<Vector2> {
        let progress = self.progress(t)?;
        if self.duration == 0.0 {
            return Ok(self.end);
        }
        Ok(self.start.lerp(&self.end, progress))
    }

    /// Transform at time `t` (seconds)
    pub fn sample(&self, t: f64) -> Result<AffineMatrix> {
        let value = self.value_at(t)?;
        Ok(self.kind.matrix(value, self.pivot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tickface_core::CollectingSink;

    fn v(x: f64, y: f64) -> Vector2 {
        Vector2::with_sink(x, y, &CollectingSink::new())
    }

    fn translation(start: Vector2, end: Vector2, time_offset: f64, duration: f64) -> Animation {
        Animation::with_sink(
            AnimationKind::Translation,
            Vector2::ZERO,
            start,
            end,
            time_offset,
            duration,
            &CollectingSink::new(),
        )
    }

    #[test]
    fn test_translation_midpoint() {
        let animation = translation(Vector2::ZERO, v(100.0, 0.0), 0.0, 10.0);
        let m = animation.sample(5.0).unwrap();
        assert!(m.approx_eq(&AffineMatrix::translation(50.0, 0.0), 1e-9));
    }

    #[test]
    fn test_rotation_half_way() {
        let pivot = v(50.0, 50.0);
        let animation = Animation::with_sink(
            AnimationKind::Rotation,
            pivot,
            Vector2::ZERO,
            v(360.0, 0.0),
            0.0,
            360.0,
            &CollectingSink::new(),
        );
        let m = animation.sample(180.0).unwrap();
        assert!(m.approx_eq(&AffineMatrix::rotation(180.0, pivot), 1e-9));
    }

    #[test]
    fn test_sample_is_periodic() {
        let animation = Animation::with_sink(
            AnimationKind::Homothety,
            v(20.0, 30.0),
            v(1.0, 1.0),
            v(2.0, 0.5),
            3.0,
            4.0,
            &CollectingSink::new(),
        );
        for t in [-13.2, -1.0, 0.0, 2.5, 3.0, 7.75, 1_700_000_000.125] {
            let a = animation.sample(t).unwrap();
            let b = animation.sample(t + animation.duration()).unwrap();
            assert!(a.approx_eq(&b, 1e-6), "t = {t}");
        }
    }

    #[test]
    fn test_progress_loops_before_offset() {
        let animation = translation(Vector2::ZERO, v(10.0, 0.0), 100.0, 10.0);
        let progress = animation.progress(97.5).unwrap();
        assert!((progress - 0.75).abs() < 1e-12);

        let value = animation.value_at(97.5).unwrap();
        assert!((value.x() - 7.5).abs() < 1e-9);
    }

    #[test]
    fn test_progress_stays_in_unit_range() {
        let animation = translation(Vector2::ZERO, Vector2::ONE, 0.3, 0.7);
        for i in -50..50 {
            let p = animation.progress(i as f64 * 0.37).unwrap();
            assert!((0.0..1.0).contains(&p), "progress {p}");
        }
    }

    #[test]
    fn test_zero_duration_holds_end_value() {
        let animation = translation(v(5.0, 5.0), v(-3.0, 8.0), 0.0, 0.0);
        for t in [-100.0, 0.0, 42.0] {
            assert_eq!(animation.value_at(t).unwrap(), v(-3.0, 8.0));
        }
    }

    #[test]
    fn test_non_finite_time_fails() {
        let animation = translation(Vector2::ZERO, Vector2::ONE, 0.0, 1.0);
        assert!(matches!(
            animation.sample(f64::NAN),
            Err(AnimationError::NonFiniteTime(_))
        ));
        assert_eq!(
            animation.sample(f64::INFINITY),
            Err(AnimationError::NonFiniteTime(f64::INFINITY))
        );
    }

    #[test]
    fn test_tiny_duration_overflows_progress() {
        // Finite and positive, so it survives validation
        let animation = translation(Vector2::ZERO, Vector2::ONE, 0.0, 1e-320);
        assert_eq!(animation.duration(), 1e-320);
        assert_eq!(
            animation.sample(1e10),
            Err(AnimationError::ProgressOverflow(1e10))
        );
    }

    #[test]
    fn test_invalid_timing_is_replaced() {
        let sink = CollectingSink::new();
        let animation = Animation::with_sink(
            AnimationKind::Translation,
            Vector2::ZERO,
            Vector2::ZERO,
            Vector2::ONE,
            f64::NAN,
            -2.0,
            &sink,
        );

        assert_eq!(animation.time_offset(), 0.0);
        assert_eq!(animation.duration(), 0.0);

        let reported = sink.take();
        assert_eq!(reported.len(), 2);
        assert!(matches!(reported[0], Diagnostic::InvalidTimeOffset { .. }));
        assert_eq!(reported[1], Diagnostic::InvalidDuration { value: -2.0 });
    }

    #[test]
    fn test_circular_translation_ignores_y() {
        let pivot = v(0.0, 100.0);
        let animation = Animation::with_sink(
            AnimationKind::CircularTranslation,
            pivot,
            v(0.0, -50.0),
            v(90.0, 50.0),
            0.0,
            0.0,
            &CollectingSink::new(),
        );
        let m = animation.sample(0.0).unwrap();
        assert!(m.approx_eq(&AffineMatrix::circular_translation(90.0, pivot), 1e-9));
    }
}
