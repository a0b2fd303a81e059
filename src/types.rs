//! Common types used throughout wrapkit
//!
//! Shared type aliases used across multiple modules.

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;
