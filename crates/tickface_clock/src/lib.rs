//! Tickface Clocks
//!
//! Independently configurable clocks, each showing the time of an arbitrary
//! UTC offset and carrying its own stack of 2D animations.
//!
//! - [`ClockTimeState`]: zone offset, user correction, 12/24-hour format,
//!   edit-mode state machine and display formatting
//! - [`ClockInstance`]: one clock's state plus its animations, producing a
//!   [`ClockFrame`] (display text + net transform) per tick
//! - [`ClockRegistry`]: append-only set of clocks owned by the application
//! - [`ClockTicker`]: renders every clock, in creation order, once per tick
//!
//! Wall-clock time always comes from a [`TimeSource`]; rendering always goes
//! through a [`RenderTarget`].
//!
//! # Example
//!
//! ```rust
//! use tickface_clock::{ClockRegistry, ClockTicker, FixedTimeSource, RecordingTarget, WallClock};
//!
//! let mut registry = ClockRegistry::new();
//! let tokyo = registry.create_clock(9, 0).unwrap();
//!
//! let mut ticker = ClockTicker::new(registry);
//! let mut target = RecordingTarget::new();
//! ticker.tick_from(&FixedTimeSource(WallClock::new(0, 0)), &mut target);
//!
//! assert_eq!(target.last_for(tokyo).unwrap().display, "09:00'00\"");
//! ```

pub mod error;
pub mod instance;
pub mod offset;
pub mod registry;
pub mod state;
pub mod ticker;
pub mod time;


pub use error::{ClockError, Result};
pub use instance::{ClockFrame, ClockId, ClockInstance};
pub use offset::{UtcOffset, MAX_HOUR_OFFSET, MIN_HOUR_OFFSET, VALID_MINUTE_OFFSETS};
pub use registry::{ClockRegistry, RecordingTarget, RenderTarget};
pub use state::{ClockAction, ClockTimeState, DisplayTime, EditMode, LightState, Meridiem};
pub use ticker::{ClockTicker, DEFAULT_FRAME_RATE};
pub use time::{FixedTimeSource, TimeSource, WallClock, MINUTES_PER_DAY};
