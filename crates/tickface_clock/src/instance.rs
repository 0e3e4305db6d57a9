//! Clock instances
//!
//! A [`ClockInstance`] pairs one [`ClockTimeState`] with the animations
//! attached to its visual container, and produces a [`ClockFrame`] per tick.

use std::fmt;

use tickface_animation::{Animation, AnimationStack};
use tickface_core::{AffineMatrix, DiagnosticSink};

use crate::offset::UtcOffset;
use crate::state::{ClockAction, ClockTimeState, EditMode, LightState};
use crate::time::WallClock;

/// Identity of a clock: its creation index in the registry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClockId(pub usize);

impl ClockId {
    pub fn index(self) -> usize {
        self.0
    }

    /// Convert an untyped index; negative values have no clock
    pub fn from_raw(raw: i64) -> Option<Self> {
        usize::try_from(raw).ok().map(ClockId)
    }
}

impl fmt::Display for ClockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "clock#{}", self.0)
    }
}

/// Everything a render target needs to paint one clock
#[derive(Clone, Debug, PartialEq)]
pub struct ClockFrame {
    pub id: ClockId,
    /// Formatted time, e.g. `09:30'00"`
    pub display: String,
    /// Zone label, e.g. `GMT+09:30`
    pub zone_label: String,
    /// Net transform of the clock's visual container
    pub transform: AffineMatrix,
    pub light: LightState,
    pub edit_mode: EditMode,
}

impl ClockFrame {
    /// Transform components in `(a, c, b, d, tx, ty)` order
    pub fn css_matrix(&self) -> [f64; 6] {
        self.transform.to_css_matrix()
    }
}

/// One clock: time state plus an append-only animation list
#[derive(Clone, Debug)]
pub struct ClockInstance {
    id: ClockId,
    state: ClockTimeState,
    animations: AnimationStack,
}

impl ClockInstance {
    pub(crate) fn new(id: ClockId, utc_offset: UtcOffset) -> Self {
        Self {
            id,
            state: ClockTimeState::new(utc_offset),
            animations: AnimationStack::new(),
        }
    }

    pub fn id(&self) -> ClockId {
        self.id
    }

    pub fn state(&self) -> &ClockTimeState {
        &self.state
    }

    pub fn animations(&self) -> &AnimationStack {
        &self.animations
    }

    pub(crate) fn push_animation(&mut self, animation: Animation) {
        self.animations.push(animation);
    }

    /// Apply a button press.
    ///
    /// Returns whether the clock's visible state changed and should be
    /// re-rendered right away.
    pub fn apply(&mut self, action: ClockAction) -> bool {
        match action {
            ClockAction::CycleEditMode => {
                self.state.cycle_edit_mode();
                false
            }
            ClockAction::Increase => self.state.apply_increase(),
            ClockAction::Reset => {
                self.state.reset();
                true
            }
            ClockAction::ToggleFormat => {
                self.state.toggle_format();
                true
            }
            ClockAction::ToggleLight => {
                self.state.toggle_light();
                true
            }
        }
    }

    /// Display text and net transform at `wall`
    pub fn frame(&self, wall: &WallClock, sink: &dyn DiagnosticSink) -> ClockFrame {
        ClockFrame {
            id: self.id,
            display: self.state.display_time(wall).to_string(),
            zone_label: self.state.utc_offset().to_string(),
            transform: self.animations.compose(wall.seconds_f64(), sink),
            light: self.state.light(),
            edit_mode: self.state.edit_mode(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tickface_animation::AnimationKind;
    use tickface_core::{CollectingSink, Vector2};

    fn clock() -> ClockInstance {
        ClockInstance::new(ClockId(0), UtcOffset::from_parts(2, 0).unwrap())
    }

    #[test]
    fn test_clock_id_from_raw() {
        assert_eq!(ClockId::from_raw(3), Some(ClockId(3)));
        assert_eq!(ClockId::from_raw(-1), None);
        assert_eq!(ClockId(4).to_string(), "clock#4");
    }

    #[test]
    fn test_frame_without_animations() {
        let sink = CollectingSink::new();
        let frame = clock().frame(&WallClock::new(0, 0), &sink);
        assert_eq!(frame.display, "02:00'00\"");
        assert_eq!(frame.zone_label, "GMT+02:00");
        assert!(frame.transform.is_identity());
        assert_eq!(frame.light, LightState::Off);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_frame_samples_at_wall_seconds() {
        let sink = CollectingSink::new();
        let mut c = clock();
        c.push_animation(Animation::with_sink(
            AnimationKind::Translation,
            Vector2::ZERO,
            Vector2::ZERO,
            Vector2::with_sink(100.0, 0.0, &sink),
            0.0,
            10.0,
            &sink,
        ));

        let frame = c.frame(&WallClock::new(2_500, 0), &sink);
        assert!(frame
            .transform
            .approx_eq(&AffineMatrix::translation(25.0, 0.0), 1e-9));
        assert_eq!(frame.css_matrix()[4], 25.0);
    }

    #[test]
    fn test_apply_reports_visible_changes() {
        let mut c = clock();
        assert!(!c.apply(ClockAction::Increase));
        assert!(!c.apply(ClockAction::CycleEditMode));
        assert!(c.apply(ClockAction::Increase));
        assert_eq!(c.state().user_hour_offset(), 1);
        assert!(c.apply(ClockAction::Reset));
        assert!(c.apply(ClockAction::ToggleFormat));
        assert!(c.apply(ClockAction::ToggleLight));
        assert!(c.state().light().is_on());
    }
}
