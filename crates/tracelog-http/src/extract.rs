//! Typed Context Extractor
//!
//! Handlers take `RequestScope` instead of digging through request
//! extensions by hand. Extraction is infallible: without the middleware
//! installed the scope degrades to a background context, so logging can
//! never reject a request.

use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};

use tracelog_core::LogContext;

/// The request's logging context, as an axum extractor.
#[derive(Debug, Clone, Default)]
pub struct RequestScope(pub LogContext);

impl<S> FromRequestParts<S> for RequestScope
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(
            parts
                .extensions
                .get::<LogContext>()
                .cloned()
                .unwrap_or_default(),
        ))
    }
}
