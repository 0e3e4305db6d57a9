//! Tickface CLI
//!
//! Run, sample and validate timezone clock configurations in a terminal.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;
use std::time::Instant;
use tickface_clock::{ClockTicker, FixedTimeSource, WallClock};
use tickface_core::{CollectingSink, TracingSink};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;
mod render;
mod time;

use config::TickfaceConfig;
use render::{OutputFormat, TerminalTarget};
use time::SystemTimeSource;

#[derive(Parser)]
#[command(name = "tickface")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Timezone clocks with animated transforms", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render every clock periodically
    Run {
        /// Configuration file (defaults to one clock in the local zone)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Stop after this many ticks
        #[arg(short, long)]
        ticks: Option<u64>,

        /// Ticks per second, overriding the configuration
        #[arg(short, long)]
        frame_rate: Option<u32>,

        /// Print one JSON object per frame
        #[arg(long)]
        json: bool,

        /// Observer's offset from UTC in minutes, instead of the system's
        #[arg(long, allow_hyphen_values = true)]
        local_offset: Option<i32>,
    },

    /// Render every clock once at a given instant
    Frame {
        /// Configuration file (defaults to one clock in the observer's zone)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Epoch milliseconds or an RFC 3339 timestamp
        #[arg(long, allow_hyphen_values = true)]
        at: String,

        /// Observer's offset from UTC in minutes
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        local_offset: i32,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Validate a configuration file and list every problem found
    Check {
        /// Configuration file
        #[arg(default_value = "tickface.toml")]
        config: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stdout carries the frames
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::Run {
            config,
            ticks,
            frame_rate,
            json,
            local_offset,
        } => cmd_run(config.as_deref(), ticks, frame_rate, json, local_offset),

        Commands::Frame {
            config,
            at,
            local_offset,
            json,
        } => cmd_frame(config.as_deref(), &at, local_offset, json),

        Commands::Check { config } => cmd_check(&config),
    }
}

fn output_format(json: bool) -> OutputFormat {
    if json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    }
}

fn load_or_local(path: Option<&Path>, local_offset_minutes: i32) -> Result<TickfaceConfig> {
    match path {
        Some(path) => TickfaceConfig::load(path),
        None => Ok(TickfaceConfig::for_local_offset(local_offset_minutes)),
    }
}

fn cmd_run(
    config: Option<&Path>,
    ticks: Option<u64>,
    frame_rate: Option<u32>,
    json: bool,
    local_offset: Option<i32>,
) -> Result<()> {
    let source = SystemTimeSource::new(local_offset);
    let config = load_or_local(config, source.local_offset_minutes())?;

    let (registry, report) = config.build_registry(Arc::new(TracingSink));
    if registry.is_empty() {
        anyhow::bail!("No valid clock to run ({} refused)", report.failed_clocks);
    }

    let mut ticker =
        ClockTicker::with_frame_rate(registry, frame_rate.unwrap_or(config.frame_rate));
    let frame_duration = ticker.frame_interval();
    let mut target = TerminalTarget::stdout(output_format(json));

    info!(
        "Running {} clocks at {} fps",
        ticker.registry().len(),
        ticker.frame_rate()
    );

    loop {
        let start = Instant::now();
        ticker.tick_from(&source, &mut target);

        if target.failed() {
            anyhow::bail!("Output closed");
        }
        if ticks.is_some_and(|limit| ticker.tick_count() >= limit) {
            break;
        }

        let elapsed = start.elapsed();
        if elapsed < frame_duration {
            thread::sleep(frame_duration - elapsed);
        }
    }

    info!("Stopped after {} ticks", ticker.tick_count());
    Ok(())
}

fn cmd_frame(config: Option<&Path>, at: &str, local_offset: i32, json: bool) -> Result<()> {
    let utc_millis = time::parse_instant(at)?;
    let config = load_or_local(config, local_offset)?;
    let (registry, _) = config.build_registry(Arc::new(TracingSink));

    let wall = WallClock::new(utc_millis, local_offset);
    let mut ticker = ClockTicker::new(registry);
    let mut target = TerminalTarget::stdout(output_format(json));
    ticker.tick_from(&FixedTimeSource(wall), &mut target);

    if target.failed() {
        anyhow::bail!("Failed to write frames");
    }
    Ok(())
}

fn cmd_check(path: &Path) -> Result<()> {
    let config = TickfaceConfig::load(path)?;
    let sink = Arc::new(CollectingSink::new());
    let (_, report) = config.build_registry(sink.clone());

    let diagnostics = sink.take();
    for diagnostic in &diagnostics {
        warn!("{}", diagnostic);
    }

    info!(
        "{}: {} clocks, {} problems",
        path.display(),
        report.created.len(),
        diagnostics.len() + report.unknown_actions.len()
    );

    report.ensure_all_created()
}
