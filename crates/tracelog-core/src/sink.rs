//! Rotating File Sink
//!
//! Construction of the size-rotated, backup-bounded file sink and age-based
//! pruning of rotated backups. The rotation mechanics themselves live in the
//! rolling-writer library; this module only maps the resolved configuration
//! onto it. The roller bounds how many backups exist, pruning bounds how old
//! they may get.

use std::fs;
use std::io;
use std::path::Path;
use std::time::{Duration, SystemTime};

use logroller::{Compression, LogRoller, LogRollerBuilder, Rotation, RotationSize};
use tracing::debug;

use crate::config::RotationConfig;
use crate::error::InitError;

const SECONDS_PER_DAY: u64 = 86_400;

/// Build the rotating sink for `<service_name>.log` inside `dir`.
///
/// The active file rotates once it exceeds `max_size_mb`; at most
/// `max_backups` rotated files are kept, gzipped when `compress` is set.
pub fn build_rotating_sink(
    dir: &Path,
    service_name: &str,
    config: &RotationConfig,
) -> Result<LogRoller, InitError> {
    let file_name = format!("{service_name}.log");
    let mut builder = LogRollerBuilder::new(dir, Path::new(&file_name))
        .rotation(Rotation::SizeBased(RotationSize::MB(config.max_size_mb)))
        .max_keep_files(config.max_backups)
        .graceful_shutdown(true);
    if config.compress {
        builder = builder.compression(Compression::Gzip);
    }
    Ok(builder.build()?)
}

/// Remove rotated backups of `file_name` in `dir` older than `max_age_days`.
///
/// Backups carry a suffix after the base file name (`service.log.1`,
/// `service.log.1.gz`, ...); the active file never matches and is never
/// touched. Returns the number of files removed.
pub fn prune_aged_backups(dir: &Path, file_name: &str, max_age_days: u64) -> io::Result<usize> {
    let age = Duration::from_secs(max_age_days.saturating_mul(SECONDS_PER_DAY));
    let Some(cutoff) = SystemTime::now().checked_sub(age) else {
        return Ok(0);
    };

    let prefix = format!("{file_name}.");
    let mut removed = 0;
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };
        if !name.starts_with(&prefix) {
            continue;
        }
        let metadata = entry.metadata()?;
        if !metadata.is_file() {
            continue;
        }
        // Files without a readable mtime are left alone.
        let Ok(modified) = metadata.modified() else {
            continue;
        };
        if modified < cutoff {
            fs::remove_file(entry.path())?;
            debug!(file = name, "pruned aged log backup");
            removed += 1;
        }
    }
    Ok(removed)
}
