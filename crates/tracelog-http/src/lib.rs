//! # Tracelog HTTP
//!
//! Axum integration for `tracelog-core`: a middleware that derives a trace
//! identifier for every inbound request and binds a tagged logger into the
//! request's context, plus a typed extractor for handlers.
//!
//! ```ignore
//! use axum::{middleware, routing::get, Router};
//! use tracelog_core::RotationConfig;
//! use tracelog_http::{trace_middleware, RequestScope};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (logger, _guard) = tracelog_core::init("my-service", RotationConfig::default())?;
//!
//!     let app = Router::new()
//!         .route("/", get(move |RequestScope(ctx): RequestScope| {
//!             let logger = logger.clone();
//!             async move {
//!                 logger.info(&ctx, "handling request");
//!                 "ok"
//!             }
//!         }))
//!         .layer(middleware::from_fn(trace_middleware));
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

mod extract;
mod middleware;

pub use extract::RequestScope;
pub use middleware::{trace_middleware, TRACE_ID_HEADER};
