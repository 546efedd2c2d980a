//! Trace Identifier
//!
//! A trace identifier correlates every log event produced while handling one
//! inbound request. Identifiers are either reused verbatim from the caller or
//! generated locally with UUID-class uniqueness, so no coordination between
//! processes is required.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request correlation identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TraceId(String);

impl TraceId {
    /// Generate a fresh globally-unique identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Build a trace ID from an inbound header value.
    ///
    /// Non-empty values are reused verbatim; an empty value means the caller
    /// supplied no identifier and yields `None`.
    pub fn from_header_value(value: &str) -> Option<Self> {
        if value.is_empty() {
            None
        } else {
            Some(Self(value.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for TraceId {
    fn from(value: String) -> Self {
        Self(value)
    }
}
