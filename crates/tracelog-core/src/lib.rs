//! # Tracelog Core
//!
//! Request-scoped structured logging for long-running services.
//!
//! Composes a rotating file sink and stdout into a process-wide default
//! logger, and provides the types that carry a per-request trace identifier
//! from an HTTP middleware down to arbitrary call sites:
//!
//! - `config` - rotation thresholds with documented defaults
//! - `context` - context-bound loggers and the typed request context
//! - `error` - initialization failures
//! - `facade` - context-aware `info`/`error` entry points
//! - `init` - one-shot process-wide logger installation
//! - `sink` - rotating file sink construction and backup retention
//! - `trace_id` - request correlation identifiers

pub mod config;
pub mod context;
pub mod error;
pub mod facade;
pub mod init;
pub mod sink;
pub mod trace_id;

// Re-export commonly used types
pub use config::RotationConfig;
pub use context::{BaseLogger, LogContext, ScopedLogger};
pub use error::InitError;
pub use facade::ContextLogger;
pub use init::init;
pub use trace_id::TraceId;
