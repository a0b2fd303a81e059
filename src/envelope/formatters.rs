//! Formatter trait and built-in formatter implementations

use crate::types::JsonValue;
use chrono::Utc;
use serde_json::json;

/// Core trait for envelope formatting strategies.
///
/// A formatter turns a raw payload (plus optional metadata) into the JSON
/// value written to the wire. Implementations must be pure aside from reading
/// the current time, and must preserve `data` exactly — including `null`.
pub trait ResponseFormatter: std::fmt::Debug + Send + Sync {
    /// Format a payload and optional metadata into an envelope value
    fn format(&self, data: JsonValue, meta: Option<JsonValue>) -> JsonValue;
}

/// Default formatter producing the plain `{success, data, meta, timestamp}`
/// envelope.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFormatter;

impl ResponseFormatter for DefaultFormatter {
    fn format(&self, data: JsonValue, meta: Option<JsonValue>) -> JsonValue {
        json!({
            "success": true,
            "data": data,
            "meta": meta,
            "timestamp": Utc::now(),
        })
    }
}

/// JSON:API-style formatter adding `jsonapi` and `links` members around the
/// same `data`/`meta` slots.
///
/// Interchangeable with [`DefaultFormatter`] at configuration time; call
/// sites never change.
#[derive(Debug, Clone)]
pub struct JsonApiFormatter {
    /// JSON:API version reported under `jsonapi.version`
    pub version: String,
    /// Value for `links.self`
    pub self_link: String,
}

impl JsonApiFormatter {
    /// Create a formatter with the given `links.self` value
    pub fn new(self_link: impl Into<String>) -> Self {
        Self {
            version: "1.0".to_string(),
            self_link: self_link.into(),
        }
    }
}

impl Default for JsonApiFormatter {
    fn default() -> Self {
        Self::new("/")
    }
}

impl ResponseFormatter for JsonApiFormatter {
    fn format(&self, data: JsonValue, meta: Option<JsonValue>) -> JsonValue {
        json!({
            "jsonapi": { "version": self.version },
            "data": data,
            "meta": meta,
            "links": { "self": self.self_link },
        })
    }
}
