//! Emitted-record contract for the logger facade.
//!
//! Captures the JSON output of a subscriber shaped like the production file
//! layer and asserts which fields each facade call attaches.

use std::io::{Error as IoError, ErrorKind};

use tests::{json_subscriber, CaptureBuffer};
use tracelog_core::{ContextLogger, LogContext, ScopedLogger, TraceId};

fn scoped(id: &str) -> LogContext {
    LogContext::scoped(ScopedLogger::new(TraceId::from_header_value(id).unwrap()))
}

#[test]
fn bound_context_events_carry_the_trace_id() {
    let buffer = CaptureBuffer::new();
    let facade = ContextLogger::default();

    tracing::subscriber::with_default(json_subscriber(&buffer), || {
        facade.info(&scoped("trace-1"), "scoped event");
    });

    let events = buffer.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["traceId"], "trace-1");
    assert_eq!(events[0]["message"], "scoped event");
    assert_eq!(events[0]["level"], "INFO");
}

#[test]
fn background_context_falls_back_to_the_base_logger() {
    let buffer = CaptureBuffer::new();
    let facade = ContextLogger::default();

    tracing::subscriber::with_default(json_subscriber(&buffer), || {
        facade.info(&LogContext::background(), "plain event");
    });

    let events = buffer.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["message"], "plain event");
    assert!(
        events[0].get("traceId").is_none(),
        "background events must not carry a traceId: {}",
        events[0]
    );
}

#[test]
fn error_field_is_present_only_with_an_error_value() {
    let buffer = CaptureBuffer::new();
    let facade = ContextLogger::default();
    let err = IoError::new(ErrorKind::Other, "disk offline");

    tracing::subscriber::with_default(json_subscriber(&buffer), || {
        facade.error(&scoped("trace-2"), Some(&err), "write failed");
        facade.error(&scoped("trace-2"), None, "no cause");
    });

    let events = buffer.events();
    assert_eq!(events.len(), 2);

    assert_eq!(events[0]["level"], "ERROR");
    assert_eq!(events[0]["error"], "disk offline");
    assert_eq!(events[0]["traceId"], "trace-2");

    assert_eq!(events[1]["level"], "ERROR");
    assert!(
        events[1].get("error").is_none(),
        "error field must be omitted without a cause: {}",
        events[1]
    );
}

#[test]
fn error_without_scope_uses_the_base_logger() {
    let buffer = CaptureBuffer::new();
    let facade = ContextLogger::default();
    let err = IoError::new(ErrorKind::Other, "backend down");

    tracing::subscriber::with_default(json_subscriber(&buffer), || {
        facade.error(&LogContext::background(), Some(&err), "upstream call failed");
    });

    let events = buffer.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["error"], "backend down");
    assert!(events[0].get("traceId").is_none());
}

#[test]
fn each_call_emits_exactly_one_event() {
    let buffer = CaptureBuffer::new();
    let facade = ContextLogger::default();
    let ctx = scoped("trace-3");

    tracing::subscriber::with_default(json_subscriber(&buffer), || {
        facade.info(&ctx, "one");
        facade.info(&ctx, "two");
        facade.error(&ctx, None, "three");
    });

    let events = buffer.events();
    assert_eq!(events.len(), 3);
    // Program order is preserved within one request scope.
    assert_eq!(events[0]["message"], "one");
    assert_eq!(events[1]["message"], "two");
    assert_eq!(events[2]["message"], "three");
    for event in &events {
        assert_eq!(event["traceId"], "trace-3");
    }
}
