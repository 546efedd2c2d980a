//! Process-wide Logger Installation
//!
//! One-shot composition of the logging stack: rotating file sink + stdout,
//! installed as the process-wide default subscriber and wrapped in the
//! context-aware facade. The default is assigned once at startup; a second
//! call fails instead of reassigning it mid-run.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt::{self, format::Writer, time::FormatTime},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::RotationConfig;
use crate::context::BaseLogger;
use crate::error::InitError;
use crate::facade::ContextLogger;
use crate::sink;

/// Timestamp formatter emitting seconds since the Unix epoch.
#[derive(Debug, Clone, Copy, Default)]
pub struct EpochSeconds;

impl FormatTime for EpochSeconds {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        let elapsed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default();
        write!(w, "{}", elapsed.as_secs())
    }
}

/// Install the process-wide logger and return the facade.
///
/// Builds a rotating file sink at `<service_name>.log` in the working
/// directory with the resolved thresholds, prunes aged backups, and fans
/// events out to both stdout (compact, colored) and the file (flattened
/// JSON records with an epoch-seconds timestamp). `RUST_LOG` overrides the
/// default `info` level.
///
/// The returned [`WorkerGuard`] must be held for the process lifetime;
/// dropping it flushes and detaches the file writer.
pub fn init(
    service_name: &str,
    config: RotationConfig,
) -> Result<(ContextLogger, WorkerGuard), InitError> {
    let config = config.resolved();
    let cwd = Path::new(".");

    let roller = sink::build_rotating_sink(cwd, service_name, &config)?;
    sink::prune_aged_backups(cwd, &format!("{service_name}.log"), config.max_age_days)?;

    let (file_writer, guard) = tracing_appender::non_blocking(roller);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Console layer: colored, compact
    let console_layer = fmt::layer()
        .with_ansi(true)
        .compact()
        .with_target(true)
        .with_timer(EpochSeconds);

    // File layer: one flattened JSON record per event
    let file_layer = fmt::layer()
        .json()
        .flatten_event(true)
        .with_current_span(false)
        .with_span_list(false)
        .with_target(false)
        .with_timer(EpochSeconds)
        .with_writer(file_writer);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()?;

    Ok((ContextLogger::new(BaseLogger), guard))
}
