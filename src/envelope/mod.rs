//! Response envelope module
//!
//! Wraps handler return values into the uniform success envelope
//! `{success, data, meta, timestamp}`.
//!
//! # Overview
//!
//! The envelope module provides the [`Envelope`] value type for callers that
//! want a concrete typed wrapper, and the [`ResponseFormatter`] trait for
//! pluggable envelope shapes selected at configuration time. Formatters are
//! pure: same data and meta always produce a structurally identical value
//! apart from the capture timestamp.

mod formatters;
mod types;

pub use formatters::{DefaultFormatter, JsonApiFormatter, ResponseFormatter};
pub use types::Envelope;
