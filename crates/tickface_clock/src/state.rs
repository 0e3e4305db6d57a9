//! Per-clock time state
//!
//! [`ClockTimeState`] holds everything a user can change on one clock (edit
//! mode, hour/minute correction, 12/24-hour format, backlight) and turns a
//! [`WallClock`] reading into the text shown on its display.

use std::fmt;
use std::str::FromStr;

use crate::error::ClockError;
use crate::offset::UtcOffset;
use crate::time::{WallClock, MINUTES_PER_DAY};

// ─────────────────────────────────────────────────────────────────────────────
// Edit mode
// ─────────────────────────────────────────────────────────────────────────────

/// Which field the increase button currently adjusts
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EditMode {
    #[default]
    None,
    Hour,
    Minute,
}

impl EditMode {
    /// None → Hour → Minute → None
    pub fn next(self) -> Self {
        match self {
            EditMode::None => EditMode::Hour,
            EditMode::Hour => EditMode::Minute,
            EditMode::Minute => EditMode::None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Light
// ─────────────────────────────────────────────────────────────────────────────

/// Display backlight
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LightState {
    #[default]
    Off,
    On,
}

impl LightState {
    pub fn toggled(self) -> Self {
        match self {
            LightState::Off => LightState::On,
            LightState::On => LightState::Off,
        }
    }

    pub fn is_on(self) -> bool {
        self == LightState::On
    }

    /// Background color key a render target paints the display with
    pub fn color_key(self) -> &'static str {
        match self {
            LightState::Off => "transparent",
            LightState::On => "turquoise",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Displayed time
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Meridiem {
    Am,
    Pm,
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Meridiem::Am => f.write_str("AM"),
            Meridiem::Pm => f.write_str("PM"),
        }
    }
}

/// Time as shown on a clock display
///
/// Formats as `HH:MM'SS"`, followed by ` AM`/` PM` in 12-hour mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DisplayTime {
    /// [0, 23], or [1, 12] when `meridiem` is set
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
    pub meridiem: Option<Meridiem>,
}

impl fmt::Display for DisplayTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}'{:02}\"",
            self.hours, self.minutes, self.seconds
        )?;
        if let Some(meridiem) = self.meridiem {
            write!(f, " {}", meridiem)?;
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// User actions
// ─────────────────────────────────────────────────────────────────────────────

/// A button press on a clock
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClockAction {
    CycleEditMode,
    Increase,
    Reset,
    ToggleFormat,
    ToggleLight,
}

impl ClockAction {
    pub const ALL: [ClockAction; 5] = [
        ClockAction::CycleEditMode,
        ClockAction::Increase,
        ClockAction::Reset,
        ClockAction::ToggleFormat,
        ClockAction::ToggleLight,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ClockAction::CycleEditMode => "cycle_edit_mode",
            ClockAction::Increase => "increase",
            ClockAction::Reset => "reset",
            ClockAction::ToggleFormat => "toggle_format",
            ClockAction::ToggleLight => "toggle_light",
        }
    }
}

impl FromStr for ClockAction {
    type Err = ClockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        ClockAction::ALL
            .into_iter()
            .find(|action| action.name() == normalized)
            .ok_or_else(|| ClockError::UnknownAction(s.to_string()))
    }
}

impl fmt::Display for ClockAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Clock time state
// ─────────────────────────────────────────────────────────────────────────────

/// Time zone, user correction and display settings of one clock
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClockTimeState {
    utc_offset: UtcOffset,
    edit_mode: EditMode,
    /// [0, 23]
    user_hour_offset: u8,
    /// [0, 59]
    user_minute_offset: u8,
    twelve_hour: bool,
    light: LightState,
}

impl ClockTimeState {
    pub fn new(utc_offset: UtcOffset) -> Self {
        Self {
            utc_offset,
            ..Default::default()
        }
    }

    pub fn utc_offset(&self) -> UtcOffset {
        self.utc_offset
    }

    pub fn edit_mode(&self) -> EditMode {
        self.edit_mode
    }

    pub fn user_hour_offset(&self) -> u8 {
        self.user_hour_offset
    }

    pub fn user_minute_offset(&self) -> u8 {
        self.user_minute_offset
    }

    pub fn is_twelve_hour(&self) -> bool {
        self.twelve_hour
    }

    pub fn light(&self) -> LightState {
        self.light
    }

    /// Advance to the next edit mode and return it
    pub fn cycle_edit_mode(&mut self) -> EditMode {
        self.edit_mode = self.edit_mode.next();
        self.edit_mode
    }

    /// Bump the field selected by the edit mode.
    ///
    /// Returns whether the displayed time changed (false outside edit mode).
    pub fn apply_increase(&mut self) -> bool {
        match self.edit_mode {
            EditMode::None => false,
            EditMode::Hour => {
                self.user_hour_offset = (self.user_hour_offset + 1) % 24;
                true
            }
            EditMode::Minute => {
                self.user_minute_offset = (self.user_minute_offset + 1) % 60;
                true
            }
        }
    }

    /// Clear the user correction, whatever the edit mode
    pub fn reset(&mut self) {
        self.user_hour_offset = 0;
        self.user_minute_offset = 0;
    }

    /// Switch between 24-hour and 12-hour display; returns the new 12-hour flag
    pub fn toggle_format(&mut self) -> bool {
        self.twelve_hour = !self.twelve_hour;
        self.twelve_hour
    }

    pub fn toggle_light(&mut self) -> LightState {
        self.light = self.light.toggled();
        self.light
    }

    /// Minutes since midnight in the clock's zone, in [0, 1440)
    ///
    /// Starts from the observer's local time of day and corrects it back to
    /// UTC before applying the clock's own offset.
    pub fn day_minutes(&self, wall: &WallClock) -> i64 {
        let local = wall.hour() * 60 + wall.minute();
        let correction = -(wall.local_offset_minutes as i64);
        (local + correction + self.utc_offset.minutes() as i64).rem_euclid(MINUTES_PER_DAY)
    }

    pub fn display_time(&self, wall: &WallClock) -> DisplayTime {
        let day_minutes = self.day_minutes(wall);

        let hours = (day_minutes / 60 + self.user_hour_offset as i64) % 24;
        let minutes = (day_minutes % 60 + self.user_minute_offset as i64) % 60;
        let seconds = wall.second();

        let (hours, meridiem) = if self.twelve_hour {
            match hours {
                0 => (12, Some(Meridiem::Am)),
                1..=11 => (hours, Some(Meridiem::Am)),
                12 => (12, Some(Meridiem::Pm)),
                _ => (hours - 12, Some(Meridiem::Pm)),
            }
        } else {
            (hours, None)
        };

        DisplayTime {
            hours: hours as u8,
            minutes: minutes as u8,
            seconds: seconds as u8,
            meridiem,
        }
    }

    /// Display text for `utc_millis` seen from `local_offset_minutes`
    pub fn compute_display(&self, utc_millis: i64, local_offset_minutes: i32) -> String {
        self.display_time(&WallClock::new(utc_millis, local_offset_minutes))
            .to_string()
    }
}
