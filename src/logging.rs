//! Tracing initialization.
//! Builds a compact stdout subscriber with an EnvFilter derived from the
//! CLI verbosity flags.
//!
//! Behavior:
//! - Log level is driven by LogLevel (no RUST_LOG override here).
//! - Quiet keeps errors visible; Debug surfaces the per-file decisions the
//!   renamer logs while walking a batch.

use anyhow::Result;
use chrono::Local;
use std::fmt as stdfmt;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt as tsfmt;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry;
use tracing_subscriber::util::SubscriberInitExt;

/// Program-defined verbosity levels exposed to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Informational output (default)
    #[default]
    Normal,
    /// Debug/trace
    Debug,
}

/// Human-friendly timestamp formatter (DD/MM/YY HH:MM:SS)
struct LocalHumanTime;
impl FormatTime for LocalHumanTime {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> stdfmt::Result {
        let now = Local::now();
        write!(w, "{}", now.format("%d/%m/%y %H:%M:%S"))
    }
}

#[inline]
fn to_level_filter(lvl: &LogLevel) -> LevelFilter {
    match lvl {
        LogLevel::Quiet => LevelFilter::ERROR,
        LogLevel::Normal => LevelFilter::INFO,
        LogLevel::Debug => LevelFilter::TRACE,
    }
}

#[inline]
fn env_filter_from_level(level_filter: LevelFilter) -> EnvFilter {
    let level_str = match level_filter {
        LevelFilter::ERROR => "error",
        LevelFilter::WARN => "warn",
        LevelFilter::INFO => "info",
        LevelFilter::DEBUG => "debug",
        LevelFilter::TRACE => "trace",
        _ => "info",
    };
    EnvFilter::new(level_str)
}

/// Initialize tracing based on LogLevel.
pub fn init_tracing(lvl: &LogLevel) -> Result<()> {
    let env_filter = env_filter_from_level(to_level_filter(lvl));

    let stdout_layer = tsfmt::layer()
        .with_timer(LocalHumanTime)
        .with_level(true)
        .with_target(false)
        .compact();
    registry().with(env_filter).with(stdout_layer).init();
    Ok(())
}
