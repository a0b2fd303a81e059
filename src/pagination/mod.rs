//! Pagination module
//!
//! Metadata computation, page slicing, and parameter normalization.
//!
//! # Overview
//!
//! The pagination module derives page-count/navigation metadata from
//! `(page, page_size, total_count)` triples via the [`MetadataCalculator`]
//! trait, extracts one page's worth of items from in-memory slices or
//! remote [`PagedSource`]s, and offers optional input normalization helpers.
//! Counting a remote source can be skipped for cost reasons, in which case
//! the [`UNKNOWN_TOTAL`] sentinel flows through the metadata.

mod calculator;
mod helpers;
mod slicer;
mod types;

pub use calculator::{DefaultCalculator, MetadataCalculator};
pub use helpers::{
    normalize, normalize_page, normalize_page_size, normalize_page_size_default,
    DEFAULT_MAX_PAGE_SIZE, DEFAULT_MIN_PAGE_SIZE,
};
pub use slicer::{fetch_page, slice_page, Paged, PagedSource};
pub use types::{PageMeta, UNKNOWN_TOTAL};
