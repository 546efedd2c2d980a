//! Logger Facade
//!
//! Context-aware `info`/`error` entry points. Call sites pass the request's
//! `LogContext` instead of threading a logger handle; the facade resolves the
//! context-bound logger per call and falls back to its owned base instance.

use crate::context::{BaseLogger, LogContext};

/// Facade over a base logger with per-call context resolution.
///
/// Constructed once at process startup by [`crate::init`]; immutable and
/// cheap to clone. Logging never fails: sink write errors are swallowed by
/// the underlying subscriber, and a request path is never aborted because of
/// an observability problem.
#[derive(Debug, Clone, Default)]
pub struct ContextLogger {
    base: BaseLogger,
}

impl ContextLogger {
    pub fn new(base: BaseLogger) -> Self {
        Self { base }
    }

    /// Emit one informational event through the context-bound logger, or the
    /// base logger when the context carries none.
    pub fn info(&self, ctx: &LogContext, msg: &str) {
        match ctx.logger() {
            Some(scoped) => scoped.info(msg),
            None => self.base.info(msg),
        }
    }

    /// Emit one error event, attaching the `error` field when an error value
    /// is supplied.
    pub fn error(&self, ctx: &LogContext, err: Option<&(dyn std::error::Error + 'static)>, msg: &str) {
        match ctx.logger() {
            Some(scoped) => scoped.error(err, msg),
            None => self.base.error(err, msg),
        }
    }
}
