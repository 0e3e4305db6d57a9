//! Animation composition
//!
//! A clock's animations are composed left to right into a single matrix:
//! `I · M₀ · M₁ · … · Mₙ`. Earlier entries therefore end up as the outer
//! transforms, applied last to the content.

use smallvec::SmallVec;
use tickface_core::{AffineMatrix, Diagnostic, DiagnosticSink};

use crate::animation::Animation;

/// Append-only ordered list of animations attached to one visual target
#[derive(Clone, Debug, Default)]
pub struct AnimationStack {
    entries: SmallVec<[Animation; 4]>,
}

impl AnimationStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, animation: Animation) {
        self.entries.push(animation);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Animation> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[Animation] {
        &self.entries
    }

    /// Net transform at time `t` (seconds)
    pub fn compose(&self, t: f64, sink: &dyn DiagnosticSink) -> AffineMatrix {
        compose(&self.entries, t, sink)
    }
}

impl FromIterator<Animation> for AnimationStack {
    fn from_iter<I: IntoIterator<Item = Animation>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a AnimationStack {
    type Item = &'a Animation;
    type IntoIter = std::slice::Iter<'a, Animation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Compose `animations` in order at time `t` (seconds).
///
/// Animations of kind none are skipped. An animation that cannot be sampled
/// contributes identity and is reported to `sink`.
pub fn compose(animations: &[Animation], t: f64, sink: &dyn DiagnosticSink) -> AffineMatrix {
    animations
        .iter()
        .filter(|animation| !animation.is_noop())
        .fold(AffineMatrix::IDENTITY, |acc, animation| {
            match animation.sample(t) {
                Ok(matrix) => acc.multiply(&matrix),
                Err(err) => {
                    tracing::trace!("skipping {} animation: {}", animation.kind(), err);
                    sink.report(&Diagnostic::SamplingFailed { time: t });
                    acc
                }
            }
        })
}
