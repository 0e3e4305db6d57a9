//! Terminal render target

use std::io::{self, Write};

use serde::Serialize;
use tickface_clock::{ClockFrame, EditMode, RenderTarget};
use tracing::error;

/// Serializable view of one rendered frame
#[derive(Debug, Serialize)]
pub struct FrameRecord<'a> {
    pub clock: usize,
    pub display: &'a str,
    pub zone: &'a str,
    /// CSS `matrix()` arguments in `(a, c, b, d, tx, ty)` order
    pub transform: [f64; 6],
    pub background: &'static str,
    pub editing: &'static str,
}

impl<'a> From<&'a ClockFrame> for FrameRecord<'a> {
    fn from(frame: &'a ClockFrame) -> Self {
        Self {
            clock: frame.id.index(),
            display: &frame.display,
            zone: &frame.zone_label,
            transform: frame.css_matrix(),
            background: frame.light.color_key(),
            editing: match frame.edit_mode {
                EditMode::None => "none",
                EditMode::Hour => "hour",
                EditMode::Minute => "minute",
            },
        }
    }
}

/// Output format of [`TerminalTarget`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    /// One JSON object per line
    Json,
}

/// Writes every frame it receives as a line of text or JSON
pub struct TerminalTarget<W: Write> {
    out: W,
    format: OutputFormat,
    failed: bool,
}

impl TerminalTarget<io::Stdout> {
    pub fn stdout(format: OutputFormat) -> Self {
        Self::new(io::stdout(), format)
    }
}

impl<W: Write> TerminalTarget<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self {
            out,
            format,
            failed: false,
        }
    }

    /// Whether a write has failed since creation
    pub fn failed(&self) -> bool {
        self.failed
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_frame(&mut self, frame: &ClockFrame) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Text => {
                let light = if frame.light.is_on() { " *" } else { "" };
                writeln!(
                    self.out,
                    "{} {:<10} {}{}  {}",
                    frame.id,
                    frame.zone_label,
                    frame.display,
                    light,
                    frame.transform.css_transform()
                )?;
            }
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, &FrameRecord::from(frame))?;
                writeln!(self.out)?;
            }
        }
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> RenderTarget for TerminalTarget<W> {
    fn render(&mut self, frame: &ClockFrame) {
        if let Err(e) = self.write_frame(frame) {
            // Report once; a closed pipe would otherwise log on every tick
            if !self.failed {
                error!("Failed to write frame for {}: {}", frame.id, e);
            }
            self.failed = true;
        }
    }
}
