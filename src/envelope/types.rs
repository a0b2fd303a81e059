//! Envelope value type
//!
//! The uniform success wrapper handed to the HTTP boundary for serialization.

use crate::types::JsonValue;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Standard success envelope for API responses.
///
/// `data` is embedded as-is (including JSON `null` when the payload is
/// absent) and `meta` serializes as `null` when no metadata was attached.
/// The wrapper is created fresh per response and has no identity beyond its
/// contents.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T> {
    /// Always `true`; failure envelopes are produced elsewhere
    pub success: bool,
    /// The response payload, passed through unchanged
    pub data: T,
    /// Optional metadata (pagination, versioning, etc.), embedded verbatim
    pub meta: Option<JsonValue>,
    /// UTC capture time of the wrap
    pub timestamp: DateTime<Utc>,
}

impl<T> Envelope<T> {
    /// Wrap data in a success envelope with no metadata
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            meta: None,
            timestamp: Utc::now(),
        }
    }

    /// Wrap data in a success envelope with attached metadata
    pub fn ok_with_meta(data: T, meta: JsonValue) -> Self {
        Self {
            success: true,
            data,
            meta: Some(meta),
            timestamp: Utc::now(),
        }
    }
}
