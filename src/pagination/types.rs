//! Pagination value types

use serde::{Deserialize, Serialize};

/// Sentinel used in place of a real total count when computing it would be
/// too costly (e.g. a skipped COUNT query against a remote source)
pub const UNKNOWN_TOTAL: i64 = -1;

/// Metadata describing one page of a larger sequence.
///
/// Serialized camelCase to match the wire format consumed by API clients:
/// `{page, pageSize, totalCount, totalPages, hasNextPage, hasPreviousPage}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    /// Requested page number (1-based)
    pub page: i64,
    /// Requested page size
    pub page_size: i64,
    /// Total items across all pages, or [`UNKNOWN_TOTAL`]
    pub total_count: i64,
    /// Total pages, or [`UNKNOWN_TOTAL`] when the total count is unknown or zero
    pub total_pages: i64,
    /// Whether a next page exists; always `false` when the total is unknown
    pub has_next_page: bool,
    /// Whether a previous page exists; depends only on `page`
    pub has_previous_page: bool,
}

impl PageMeta {
    /// Check whether the total count is the unknown sentinel
    pub fn is_total_unknown(&self) -> bool {
        self.total_count == UNKNOWN_TOTAL
    }
}
