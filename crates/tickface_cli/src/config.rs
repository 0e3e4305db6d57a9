//! Tickface configuration file handling
//!
//! A `tickface.toml` file lists the clocks to create, the animations attached
//! to each of them and the button presses to replay at start-up:
//!
//! ```toml
//! frame_rate = 8
//!
//! [[clock]]
//! hour_offset = 9
//! minute_offset = 30
//! twelve_hour = true
//!
//! [[clock.animation]]
//! kind = "rotation"
//! pivot = [50.0, 50.0]
//! end = [360.0, 0.0]
//! duration = 60.0
//!
//! [[animation]]
//! clock = 0
//! kind = 1
//! end = [100.0, 0.0]
//! duration = 10.0
//! ```

use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tickface_animation::{Animation, AnimationKind};
use tickface_clock::{ClockAction, ClockId, ClockRegistry, DEFAULT_FRAME_RATE};
use tickface_core::{DiagnosticSink, Vector2};
use tracing::{debug, warn};

// =============================================================================
// tickface.toml
// =============================================================================

/// Top-level configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct TickfaceConfig {
    /// Ticks per second
    #[serde(default = "default_frame_rate")]
    pub frame_rate: u32,
    #[serde(default, rename = "clock")]
    pub clocks: Vec<ClockConfig>,
    /// Animations attached to an already created clock by index
    #[serde(default, rename = "animation")]
    pub animations: Vec<AttachedAnimationConfig>,
}

fn default_frame_rate() -> u32 {
    DEFAULT_FRAME_RATE
}

impl Default for TickfaceConfig {
    fn default() -> Self {
        Self {
            frame_rate: default_frame_rate(),
            clocks: Vec::new(),
            animations: Vec::new(),
        }
    }
}

/// One clock to create
#[derive(Debug, Deserialize, Serialize)]
pub struct ClockConfig {
    pub hour_offset: i64,
    #[serde(default)]
    pub minute_offset: i64,
    /// Start in 12-hour mode
    #[serde(default)]
    pub twelve_hour: bool,
    /// Start with the light on
    #[serde(default)]
    pub light: bool,
    /// Button presses replayed after creation, e.g. `"cycle_edit_mode"`
    #[serde(default)]
    pub actions: Vec<String>,
    #[serde(default, rename = "animation")]
    pub animations: Vec<AnimationConfig>,
}

/// Animation parameters
#[derive(Debug, Deserialize, Serialize)]
pub struct AnimationConfig {
    pub kind: KindConfig,
    #[serde(default)]
    pub pivot: [f64; 2],
    #[serde(default)]
    pub start: [f64; 2],
    #[serde(default)]
    pub end: [f64; 2],
    /// Seconds
    #[serde(default)]
    pub time_offset: f64,
    /// Seconds
    #[serde(default)]
    pub duration: f64,
}

/// Animation kind given either by name or by numeric code
#[derive(Debug, Deserialize, Serialize)]
#[serde(untagged)]
pub enum KindConfig {
    Code(i64),
    Name(String),
}

/// Animation attached to the clock with creation index `clock`
#[derive(Debug, Deserialize, Serialize)]
pub struct AttachedAnimationConfig {
    pub clock: i64,
    #[serde(flatten)]
    pub animation: AnimationConfig,
}

/// What happened while building a registry from a configuration
#[derive(Debug, Default)]
pub struct BuildReport {
    /// Ids of the clocks that were created, in configuration order
    pub created: Vec<ClockId>,
    /// Clocks refused because of their offsets
    pub failed_clocks: usize,
    /// Animations that targeted a missing clock
    pub dropped_animations: usize,
    /// Action names that were not recognized
    pub unknown_actions: Vec<String>,
}

impl BuildReport {
    /// Fails when any configured clock was refused
    pub fn ensure_all_created(&self) -> Result<()> {
        if self.failed_clocks > 0 {
            anyhow::bail!("{} clocks have invalid offsets", self.failed_clocks);
        }
        Ok(())
    }
}

impl KindConfig {
    fn resolve(&self, sink: &dyn DiagnosticSink) -> AnimationKind {
        match self {
            KindConfig::Code(code) => AnimationKind::from_code(*code, sink),
            KindConfig::Name(name) => AnimationKind::from_name(name, sink),
        }
    }
}

impl AnimationConfig {
    /// Build the animation, reporting every coerced value to `sink`
    pub fn to_animation(&self, sink: &dyn DiagnosticSink) -> Animation {
        let vector = |[x, y]: [f64; 2]| Vector2::with_sink(x, y, sink);
        Animation::with_sink(
            self.kind.resolve(sink),
            vector(self.pivot),
            vector(self.start),
            vector(self.end),
            self.time_offset,
            self.duration,
            sink,
        )
    }
}

impl TickfaceConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Self::from_toml_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Single clock in the observer's own zone
    ///
    /// Zones whose minute part is not 0, 30 or 45 fall back to UTC. The hour
    /// is truncated toward zero and a zero hour counts as positive, so an
    /// offset of -30 minutes yields the +00:30 zone.
    pub fn for_local_offset(local_offset_minutes: i32) -> Self {
        let hour = (local_offset_minutes / 60) as i64;
        let minute = (local_offset_minutes - local_offset_minutes / 60 * 60).abs() as i64;
        let (hour_offset, minute_offset) = if [0, 30, 45].contains(&minute) {
            (hour, minute)
        } else {
            warn!(
                "local offset {} minutes has no matching clock zone, using UTC",
                local_offset_minutes
            );
            (0, 0)
        };

        Self {
            clocks: vec![ClockConfig {
                hour_offset,
                minute_offset,
                twelve_hour: false,
                light: false,
                actions: Vec::new(),
                animations: Vec::new(),
            }],
            ..Default::default()
        }
    }

    /// Create every configured clock and animation in a fresh registry.
    ///
    /// Invalid entries are reported to `sink` and skipped; the rest of the
    /// configuration still applies.
    pub fn build_registry(&self, sink: Arc<dyn DiagnosticSink>) -> (ClockRegistry, BuildReport) {
        let mut registry = ClockRegistry::with_sink(sink.clone());
        let mut report = BuildReport::default();

        for clock in &self.clocks {
            let Ok(id) = registry.create_clock(clock.hour_offset, clock.minute_offset) else {
                report.failed_clocks += 1;
                continue;
            };
            report.created.push(id);

            for animation in &clock.animations {
                if let Err(err) = registry.add_animation(id, animation.to_animation(&*sink)) {
                    warn!("{}: {}", id, err);
                }
            }

            let mut actions = Vec::new();
            if clock.twelve_hour {
                actions.push(ClockAction::ToggleFormat);
            }
            if clock.light {
                actions.push(ClockAction::ToggleLight);
            }
            for name in &clock.actions {
                match name.parse::<ClockAction>() {
                    Ok(action) => actions.push(action),
                    Err(err) => {
                        warn!("{}: {}", id, err);
                        report.unknown_actions.push(name.clone());
                    }
                }
            }
            for action in actions {
                if let Err(err) = registry.apply(id, action) {
                    warn!("{}: {}", id, err);
                }
            }
        }

        for attached in &self.animations {
            let animation = attached.animation.to_animation(&*sink);
            if registry.add_animation_at(attached.clock, animation).is_err() {
                report.dropped_animations += 1;
            }
        }

        debug!(
            "built {} clocks ({} refused, {} animations dropped)",
            report.created.len(),
            report.failed_clocks,
            report.dropped_animations
        );
        (registry, report)
    }
}
