//! Initialization Errors
//!
//! A non-functional log sink is an operational emergency, so initialization
//! fails fast with a clear diagnostic instead of degrading silently. After
//! startup, logging never fails: write errors are swallowed by the
//! subscriber and never reach the request path.

use thiserror::Error;

/// Errors raised while installing the process-wide logger.
#[derive(Debug, Error)]
pub enum InitError {
    /// The rotating file sink could not be constructed (bad path,
    /// permissions).
    #[error("failed to create rotating log sink: {0}")]
    Sink(#[from] logroller::LogRollerError),

    /// Backup retention could not scan or remove rotated files.
    #[error("failed to prune aged log backups: {0}")]
    Retention(#[from] std::io::Error),

    /// A process-wide default logger was already installed. The default is
    /// assigned once at startup and never reassigned mid-run.
    #[error("global logger already installed: {0}")]
    AlreadyInitialized(#[from] tracing_subscriber::util::TryInitError),
}
