//! Tick driver
//!
//! One tick renders every registered clock, strictly one after another in
//! creation order. The ticker doesn't sleep or spawn anything: the caller
//! decides when ticks happen, typically every [`ClockTicker::frame_interval`].

use std::time::Duration;

use crate::instance::ClockId;
use crate::registry::{ClockRegistry, RenderTarget};
use crate::state::ClockAction;
use crate::time::{TimeSource, WallClock};

/// Ticks per second when none is configured
pub const DEFAULT_FRAME_RATE: u32 = 8;

/// Drives periodic re-rendering of a [`ClockRegistry`]
pub struct ClockTicker {
    registry: ClockRegistry,
    frame_rate: u32,
    ticks: u64,
}

impl ClockTicker {
    pub fn new(registry: ClockRegistry) -> Self {
        Self::with_frame_rate(registry, DEFAULT_FRAME_RATE)
    }

    /// A `frame_rate` of zero is treated as one tick per second
    pub fn with_frame_rate(registry: ClockRegistry, frame_rate: u32) -> Self {
        Self {
            registry,
            frame_rate: frame_rate.max(1),
            ticks: 0,
        }
    }

    pub fn frame_rate(&self) -> u32 {
        self.frame_rate
    }

    /// Time between two ticks
    pub fn frame_interval(&self) -> Duration {
        Duration::from_micros(1_000_000 / self.frame_rate as u64)
    }

    /// Number of ticks run so far
    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    pub fn registry(&self) -> &ClockRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut ClockRegistry {
        &mut self.registry
    }

    pub fn into_registry(self) -> ClockRegistry {
        self.registry
    }

    /// Render every clock at `wall`; returns how many were rendered
    pub fn tick(&mut self, wall: &WallClock, target: &mut dyn RenderTarget) -> usize {
        self.ticks += 1;
        let rendered = self.registry.render_all(wall, target);
        tracing::trace!("tick {}: rendered {} clocks", self.ticks, rendered);
        rendered
    }

    /// [`ClockTicker::tick`] at the time reported by `source`
    pub fn tick_from(&mut self, source: &dyn TimeSource, target: &mut dyn RenderTarget) -> usize {
        let wall = source.now();
        self.tick(&wall, target)
    }

    /// Forward a button press to the registry, rendering the clock right away
    /// when its visible state changed.
    pub fn press(
        &mut self,
        id: ClockId,
        action: ClockAction,
        source: &dyn TimeSource,
        target: &mut dyn RenderTarget,
    ) -> crate::Result<bool> {
        let wall = source.now();
        self.registry.dispatch(id, action, &wall, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::RecordingTarget;
    use crate::time::FixedTimeSource;

    #[test]
    fn test_frame_interval() {
        let ticker = ClockTicker::new(ClockRegistry::new());
        assert_eq!(ticker.frame_rate(), DEFAULT_FRAME_RATE);
        assert_eq!(ticker.frame_interval(), Duration::from_millis(125));

        let ticker = ClockTicker::with_frame_rate(ClockRegistry::new(), 0);
        assert_eq!(ticker.frame_interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_tick_renders_all_clocks_in_order() {
        let mut registry = ClockRegistry::new();
        let first = registry.create_clock(1, 0).unwrap();
        let second = registry.create_clock(-1, 0).unwrap();

        let mut ticker = ClockTicker::new(registry);
        let mut target = RecordingTarget::new();
        let source = FixedTimeSource(WallClock::new(3_600_000, 0));

        assert_eq!(ticker.tick_from(&source, &mut target), 2);
        assert_eq!(ticker.tick_from(&source, &mut target), 2);
        assert_eq!(ticker.tick_count(), 2);

        let ids: Vec<_> = target.frames().iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![first, second, first, second]);
        assert_eq!(target.last_for(first).unwrap().display, "02:00'00\"");
        assert_eq!(target.last_for(second).unwrap().display, "00:00'00\"");
    }

    #[test]
    fn test_press_goes_through_registry() {
        let mut registry = ClockRegistry::new();
        let id = registry.create_clock(0, 0).unwrap();
        let mut ticker = ClockTicker::new(registry);
        let mut target = RecordingTarget::new();
        let source = FixedTimeSource(WallClock::new(0, 0));

        assert_eq!(
            ticker.press(id, ClockAction::ToggleFormat, &source, &mut target),
            Ok(true)
        );
        assert_eq!(target.frames()[0].display, "12:00'00\" AM");
        // A press is not a tick
        assert_eq!(ticker.tick_count(), 0);
    }
}
