//! Rotation Configuration
//!
//! Thresholds for the rotating file sink. Every knob is optional: zero (or an
//! omitted field, when deserialized) falls back to the documented default, so
//! a zero-value configuration never yields zero thresholds.

use serde::{Deserialize, Serialize};

/// Default maximum size of the active log file, in megabytes.
pub const DEFAULT_MAX_SIZE_MB: u64 = 1024;
/// Default number of rotated backups retained.
pub const DEFAULT_MAX_BACKUPS: u64 = 7;
/// Default age in days after which rotated backups are pruned.
pub const DEFAULT_MAX_AGE_DAYS: u64 = 30;

/// Rotation thresholds for the file sink.
///
/// Read once at initialization; immutable thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationConfig {
    /// Rotate the active file once it exceeds this many megabytes.
    pub max_size_mb: u64,
    /// Keep at most this many rotated backups.
    pub max_backups: u64,
    /// Prune rotated backups older than this many days.
    pub max_age_days: u64,
    /// Gzip rotated backups.
    pub compress: bool,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            max_size_mb: DEFAULT_MAX_SIZE_MB,
            max_backups: DEFAULT_MAX_BACKUPS,
            max_age_days: DEFAULT_MAX_AGE_DAYS,
            compress: true,
        }
    }
}

impl RotationConfig {
    /// Replace zero thresholds with the documented defaults.
    pub fn resolved(self) -> Self {
        Self {
            max_size_mb: non_zero_or(self.max_size_mb, DEFAULT_MAX_SIZE_MB),
            max_backups: non_zero_or(self.max_backups, DEFAULT_MAX_BACKUPS),
            max_age_days: non_zero_or(self.max_age_days, DEFAULT_MAX_AGE_DAYS),
            compress: self.compress,
        }
    }
}

fn non_zero_or(value: u64, default: u64) -> u64 {
    if value == 0 {
        default
    } else {
        value
    }
}
