//! Clock registry
//!
//! The registry owns every clock created by the application, in creation
//! order. It is an ordinary value owned by the composition root and handed
//! to whatever drives the tick loop; clocks are never removed.

use std::sync::Arc;

use tickface_animation::Animation;
use tickface_core::{DiagnosticSink, TracingSink};

use crate::error::{ClockError, Result};
use crate::instance::{ClockFrame, ClockId, ClockInstance};
use crate::offset::UtcOffset;
use crate::state::ClockAction;
use crate::time::WallClock;

/// Receiver of rendered clock frames
///
/// Implemented for any `FnMut(&ClockFrame)` closure and for [`RecordingTarget`].
pub trait RenderTarget {
    fn render(&mut self, frame: &ClockFrame);
}

impl<F> RenderTarget for F
where
    F: FnMut(&ClockFrame),
{
    fn render(&mut self, frame: &ClockFrame) {
        self(frame)
    }
}

/// Render target that records every frame it receives
#[derive(Clone, Debug, Default)]
pub struct RecordingTarget {
    frames: Vec<ClockFrame>,
}

impl RecordingTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[ClockFrame] {
        &self.frames
    }

    /// Drain the recorded frames
    pub fn take(&mut self) -> Vec<ClockFrame> {
        std::mem::take(&mut self.frames)
    }

    /// Most recent frame of clock `id`
    pub fn last_for(&self, id: ClockId) -> Option<&ClockFrame> {
        self.frames.iter().rev().find(|frame| frame.id == id)
    }
}

impl RenderTarget for RecordingTarget {
    fn render(&mut self, frame: &ClockFrame) {
        self.frames.push(frame.clone());
    }
}

/// Append-only collection of clocks
pub struct ClockRegistry {
    clocks: Vec<ClockInstance>,
    sink: Arc<dyn DiagnosticSink>,
}

impl ClockRegistry {
    /// Registry that logs diagnostics through `tracing`
    pub fn new() -> Self {
        Self::with_sink(Arc::new(TracingSink))
    }

    pub fn with_sink(sink: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            clocks: Vec::new(),
            sink,
        }
    }

    pub fn sink(&self) -> &dyn DiagnosticSink {
        &*self.sink
    }

    /// Create a clock for the zone `hour:minute` away from UTC.
    ///
    /// Invalid offsets are reported and no clock (nor id) is created.
    pub fn create_clock(&mut self, hour_offset: i64, minute_offset: i64) -> Result<ClockId> {
        let utc_offset = match UtcOffset::from_parts(hour_offset, minute_offset) {
            Ok(offset) => offset,
            Err(err) => {
                self.report(&err);
                return Err(err);
            }
        };

        let id = ClockId(self.clocks.len());
        self.clocks.push(ClockInstance::new(id, utc_offset));
        tracing::debug!("created {} ({})", id, utc_offset);
        Ok(id)
    }

    /// Attach `animation` to the clock `id`; unknown ids drop the animation.
    pub fn add_animation(&mut self, id: ClockId, animation: Animation) -> Result<()> {
        if id.index() >= self.clocks.len() {
            let err = unknown_clock(id);
            self.report(&err);
            return Err(err);
        }

        tracing::debug!("adding {} animation to {}", animation.kind(), id);
        self.clocks[id.index()].push_animation(animation);
        Ok(())
    }

    /// [`ClockRegistry::add_animation`] for an untyped index
    pub fn add_animation_at(&mut self, index: i64, animation: Animation) -> Result<()> {
        match ClockId::from_raw(index) {
            Some(id) => self.add_animation(id, animation),
            None => {
                let err = ClockError::UnknownClock(index);
                self.report(&err);
                Err(err)
            }
        }
    }

    pub fn get(&self, id: ClockId) -> Option<&ClockInstance> {
        self.clocks.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.clocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clocks.is_empty()
    }

    /// Clocks in creation order
    pub fn iter(&self) -> std::slice::Iter<'_, ClockInstance> {
        self.clocks.iter()
    }

    /// Frame of one clock at `wall`
    pub fn frame(&self, id: ClockId, wall: &WallClock) -> Option<ClockFrame> {
        self.get(id).map(|clock| clock.frame(wall, &*self.sink))
    }

    /// Apply a button press to clock `id` without rendering it.
    ///
    /// Returns whether the clock's visible state changed.
    pub fn apply(&mut self, id: ClockId, action: ClockAction) -> Result<bool> {
        let Some(clock) = self.clocks.get_mut(id.index()) else {
            return Err(unknown_clock(id));
        };

        tracing::debug!("{}: {}", id, action);
        Ok(clock.apply(action))
    }

    /// Apply a button press to clock `id`.
    ///
    /// When the press changes what the clock shows, the clock is rendered to
    /// `target` immediately instead of waiting for the next tick. Returns
    /// whether a frame was rendered.
    pub fn dispatch(
        &mut self,
        id: ClockId,
        action: ClockAction,
        wall: &WallClock,
        target: &mut dyn RenderTarget,
    ) -> Result<bool> {
        if !self.apply(id, action)? {
            return Ok(false);
        }

        if let Some(frame) = self.frame(id, wall) {
            target.render(&frame);
        }
        Ok(true)
    }

    /// Render every clock at `wall`, in creation order
    pub fn render_all(&self, wall: &WallClock, target: &mut dyn RenderTarget) -> usize {
        for clock in &self.clocks {
            target.render(&clock.frame(wall, &*self.sink));
        }
        self.clocks.len()
    }

    fn report(&self, err: &ClockError) {
        if let Some(diagnostic) = err.diagnostic() {
            self.sink.report(&diagnostic);
        }
    }
}

fn unknown_clock(id: ClockId) -> ClockError {
    ClockError::UnknownClock(i64::try_from(id.index()).unwrap_or(i64::MAX))
}

impl Default for ClockRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a ClockRegistry {
    type Item = &'a ClockInstance;
    type IntoIter = std::slice::Iter<'a, ClockInstance>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tickface_animation::AnimationKind;
    use tickface_core::{CollectingSink, Diagnostic, Vector2};

    fn registry() -> (ClockRegistry, Arc<CollectingSink>) {
        let sink = Arc::new(CollectingSink::new());
        (ClockRegistry::with_sink(sink.clone()), sink)
    }

    fn slide() -> Animation {
        let sink = CollectingSink::new();
        Animation::with_sink(
            AnimationKind::Translation,
            Vector2::ZERO,
            Vector2::ZERO,
            Vector2::with_sink(10.0, 0.0, &sink),
            0.0,
            1.0,
            &sink,
        )
    }

    #[test]
    fn test_ids_follow_creation_order() {
        let (mut registry, sink) = registry();
        assert_eq!(registry.create_clock(0, 0), Ok(ClockId(0)));
        assert_eq!(registry.create_clock(-3, 30), Ok(ClockId(1)));
        assert_eq!(registry.len(), 2);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_invalid_offsets_allocate_nothing() {
        let (mut registry, sink) = registry();
        assert_eq!(
            registry.create_clock(2, 15),
            Err(ClockError::InvalidMinuteOffset(15))
        );
        assert_eq!(
            registry.create_clock(-13, 0),
            Err(ClockError::InvalidHourOffset(-13))
        );
        assert!(registry.is_empty());
        assert_eq!(
            sink.take(),
            vec![
                Diagnostic::InvalidMinuteOffset { minute: 15 },
                Diagnostic::InvalidHourOffset { hour: -13 },
            ]
        );

        // The next valid clock still gets the first index
        assert_eq!(registry.create_clock(1, 0), Ok(ClockId(0)));
    }

    #[test]
    fn test_add_animation_to_unknown_clock() {
        let (mut registry, sink) = registry();
        let id = registry.create_clock(0, 0).unwrap();

        assert_eq!(
            registry.add_animation(ClockId(1), slide()),
            Err(ClockError::UnknownClock(1))
        );
        assert_eq!(
            registry.add_animation_at(-1, slide()),
            Err(ClockError::UnknownClock(-1))
        );
        assert!(registry.get(id).unwrap().animations().is_empty());
        assert_eq!(sink.len(), 2);

        registry.add_animation_at(0, slide()).unwrap();
        assert_eq!(registry.get(id).unwrap().animations().len(), 1);
    }

    #[test]
    fn test_dispatch_renders_immediately() {
        let (mut registry, _sink) = registry();
        let id = registry.create_clock(0, 0).unwrap();
        let wall = WallClock::new(0, 0);
        let mut frames = RecordingTarget::new();

        // Increase outside edit mode changes nothing
        assert_eq!(
            registry.dispatch(id, ClockAction::Increase, &wall, &mut frames),
            Ok(false)
        );
        assert_eq!(
            registry.dispatch(id, ClockAction::CycleEditMode, &wall, &mut frames),
            Ok(false)
        );
        assert!(frames.frames().is_empty());

        assert_eq!(
            registry.dispatch(id, ClockAction::Increase, &wall, &mut frames),
            Ok(true)
        );
        let rendered = frames.take();
        assert_eq!(rendered.len(), 1);
        assert_eq!(rendered[0].display, "01:00'00\"");
    }

    #[test]
    fn test_dispatch_unknown_clock() {
        let (mut registry, _sink) = registry();
        let mut frames = RecordingTarget::new();
        assert_eq!(
            registry.dispatch(
                ClockId(0),
                ClockAction::Reset,
                &WallClock::default(),
                &mut frames
            ),
            Err(ClockError::UnknownClock(0))
        );
    }

    #[test]
    fn test_render_all_in_creation_order() {
        let (mut registry, _sink) = registry();
        registry.create_clock(5, 30).unwrap();
        registry.create_clock(-8, 0).unwrap();

        let mut seen = Vec::new();
        let mut target = |frame: &ClockFrame| seen.push(frame.id);
        assert_eq!(registry.render_all(&WallClock::default(), &mut target), 2);
        assert_eq!(seen, vec![ClockId(0), ClockId(1)]);
    }
}
