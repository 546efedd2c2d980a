//! Context-bound Loggers
//!
//! A `ScopedLogger` is derived per request and carries the request's trace
//! identifier; a `BaseLogger` is the unscoped fallback. Both emit through the
//! process-wide dispatcher installed by [`crate::init`], so every event
//! reaches the same console and file sinks. `LogContext` is the typed context
//! object that carries the bound logger through a request's call tree.

use tracing::{error, info};

use crate::trace_id::TraceId;

/// Logger derived for a single request, tagging every event with `traceId`.
///
/// Immutable after creation; deriving new fields means creating a new
/// instance. Never shared across sibling requests.
#[derive(Debug, Clone)]
pub struct ScopedLogger {
    trace_id: TraceId,
}

impl ScopedLogger {
    pub fn new(trace_id: TraceId) -> Self {
        Self { trace_id }
    }

    pub fn trace_id(&self) -> &TraceId {
        &self.trace_id
    }

    /// Emit one informational event tagged with this request's trace ID.
    pub fn info(&self, msg: &str) {
        info!(traceId = %self.trace_id, "{}", msg);
    }

    /// Emit one error event tagged with this request's trace ID.
    ///
    /// The `error` field is attached only when an error value is supplied.
    pub fn error(&self, err: Option<&(dyn std::error::Error + 'static)>, msg: &str) {
        match err {
            Some(e) => error!(traceId = %self.trace_id, error = %e, "{}", msg),
            None => error!(traceId = %self.trace_id, "{}", msg),
        }
    }
}

/// Unscoped logger used when no request context is available.
///
/// Emits events with no correlation fields. Always valid, so the facade's
/// fallback path never has to handle a missing logger.
#[derive(Debug, Clone, Default)]
pub struct BaseLogger;

impl BaseLogger {
    pub fn info(&self, msg: &str) {
        info!("{}", msg);
    }

    pub fn error(&self, err: Option<&(dyn std::error::Error + 'static)>, msg: &str) {
        match err {
            Some(e) => error!(error = %e, "{}", msg),
            None => error!("{}", msg),
        }
    }
}

/// Typed request context carrying the cross-cutting logging attributes.
///
/// Created by the request-tagging middleware and passed (or extracted) down
/// the call chain. A background context has no bound logger and makes the
/// facade fall back to its base instance.
#[derive(Debug, Clone, Default)]
pub struct LogContext {
    scoped: Option<ScopedLogger>,
}

impl LogContext {
    /// Context with no bound logger (process startup, background jobs).
    pub fn background() -> Self {
        Self::default()
    }

    /// Context carrying a request-scoped logger.
    pub fn scoped(logger: ScopedLogger) -> Self {
        Self {
            scoped: Some(logger),
        }
    }

    pub fn logger(&self) -> Option<&ScopedLogger> {
        self.scoped.as_ref()
    }

    pub fn trace_id(&self) -> Option<&TraceId> {
        self.scoped.as_ref().map(ScopedLogger::trace_id)
    }
}
