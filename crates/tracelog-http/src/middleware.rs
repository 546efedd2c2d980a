//! Request Tagging Middleware
//!
//! Derives a trace identifier for each inbound request (reusing the
//! `X-Trace-ID` header when the caller supplies one) and binds a tagged
//! logger into the request's extensions. Isolation is per request: the bound
//! logger is visible to the whole downstream call tree and never to
//! concurrent sibling requests.

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::{info_span, Instrument};

use tracelog_core::{LogContext, ScopedLogger, TraceId};

/// Header carrying the request correlation identifier, inbound and outbound.
pub const TRACE_ID_HEADER: &str = "x-trace-id";

/// Bind a trace-tagged logger into the request context.
///
/// A missing, empty, or non-UTF-8 header value counts as absent and a fresh
/// identifier is generated; generation is infallible, so there is no error
/// path and the downstream handler always runs.
pub async fn trace_middleware(mut request: Request, next: Next) -> Response {
    let trace_id = request
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(TraceId::from_header_value)
        .unwrap_or_else(TraceId::generate);

    let span = info_span!(
        "request",
        traceId = %trace_id,
        method = %request.method(),
        path = %request.uri().path(),
    );

    request
        .extensions_mut()
        .insert(LogContext::scoped(ScopedLogger::new(trace_id.clone())));

    let mut response = next.run(request).instrument(span).await;

    // Echo the resolved identifier so callers can correlate their own records.
    if let Ok(value) = HeaderValue::from_str(trace_id.as_str()) {
        response
            .headers_mut()
            .insert(HeaderName::from_static(TRACE_ID_HEADER), value);
    }

    response
}
