//! # wrapkit
//!
//! A minimal, Rust-native toolkit for shaping HTTP API success responses.
//! Consistent envelopes, pluggable formatters, simple pagination.
//!
//! ## Features
//!
//! - **Success Envelopes**: Wrap any payload in `{success, data, meta, timestamp}`
//! - **Pluggable Formatters**: Swap the envelope shape at configuration time
//! - **Pagination Metadata**: Page/size/total arithmetic with an unknown-count sentinel
//! - **Page Slicing**: In-memory slices and remote queryable sources
//! - **Axum Glue**: Handler extension traits and query extraction for the boundary layer
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use wrapkit::http::{PageQuery, Respond, ToPagedResponse};
//! use wrapkit::registry::{configure, Options};
//!
//! // Once, at startup
//! configure(Options::new().use_default_formatter().use_pagination())?;
//!
//! // In a handler
//! async fn get_user() -> Result<Response, wrapkit::Error> {
//!     let user = lookup_user().await;
//!     user.ok()
//! }
//!
//! // Paginated listing
//! async fn list_users(Query(query): Query<PageQuery>) -> Result<Response, wrapkit::Error> {
//!     let (page, page_size) = query.normalized();
//!     all_users().to_paged_response(page, page_size)
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                      HTTP boundary (axum)                  │
//! │   Respond::ok / created / with_meta    ToPagedResponse     │
//! └────────────────────────────┬───────────────────────────────┘
//!                              │
//! ┌──────────────┬─────────────┴─────────────┬─────────────────┐
//! │   Envelope   │        Pagination         │    Registry     │
//! ├──────────────┼───────────────────────────┼─────────────────┤
//! │ Formatter    │ Calculator   Slicer       │ Options         │
//! │ Default      │ PageMeta     in-memory    │ global holder   │
//! │ JSON:API     │ normalize    PagedSource  │ DI-style value  │
//! └──────────────┴───────────────────────────┴─────────────────┘
//! ```
//!
//! The core performs no I/O of its own; the only external calls are the
//! fetch/count operations delegated to a caller-supplied [`pagination::PagedSource`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for wrapkit
pub mod error;

/// Common types and type aliases
pub mod types;

/// Success envelope and formatter strategies
pub mod envelope;

/// Pagination metadata, slicing, and normalization
pub mod pagination;

/// Process-wide configuration registry
pub mod registry;

/// Axum boundary glue
pub mod http;

/// Command-line interface and demo server
pub mod cli;

#[cfg(test)]
pub(crate) mod testutil;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

pub use envelope::{DefaultFormatter, Envelope, JsonApiFormatter, ResponseFormatter};
pub use pagination::{DefaultCalculator, MetadataCalculator, PageMeta, UNKNOWN_TOTAL};
pub use registry::{configure, Options, Registry};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
