//! Page slicing for in-memory and remote sources
//!
//! The slicer only offsets and limits; ordering and filtering are the
//! caller's responsibility and must already be applied to the source.

use crate::error::Result;
use crate::pagination::UNKNOWN_TOTAL;
use async_trait::async_trait;

/// One page of items plus the total size of the full source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paged<T> {
    /// The items on this page (shorter than `page_size` when exhausted)
    pub items: Vec<T>,
    /// Total items in the full source, or [`UNKNOWN_TOTAL`]
    pub total_count: i64,
}

/// A remote queryable source of ordered, already-filtered items.
///
/// Implemented over whatever backs the data (a database query, an upstream
/// API). `count` may be expensive; [`fetch_page`] lets callers opt out of it.
#[async_trait]
pub trait PagedSource: Send + Sync {
    /// Item type produced by the source
    type Item: Send;

    /// Fetch up to `limit` items starting at `offset`
    async fn fetch(&self, offset: u64, limit: u64) -> Result<Vec<Self::Item>>;

    /// Count all items in the source
    async fn count(&self) -> Result<i64>;
}

/// Extract one page from a fully materialized in-memory sequence.
///
/// Offset is `(page - 1) * page_size`; the total count is simply the source
/// length. An empty source yields an empty page with `total_count = 0`.
pub fn slice_page<T: Clone>(source: &[T], page: i64, page_size: i64) -> Paged<T> {
    let total_count = source.len() as i64;
    // Saturating: a wire-supplied page can be as large as i64::MAX
    let offset = page.saturating_sub(1).saturating_mul(page_size).max(0) as usize;
    let limit = page_size.max(0) as usize;

    let items = source.iter().skip(offset).take(limit).cloned().collect();

    Paged { items, total_count }
}

/// Extract one page from a remote source.
///
/// When `include_total` is `false` the count call is skipped entirely and
/// `total_count` is set to [`UNKNOWN_TOTAL`], which flows through the
/// metadata calculator's unknown-count policy.
pub async fn fetch_page<S: PagedSource>(
    source: &S,
    page: i64,
    page_size: i64,
    include_total: bool,
) -> Result<Paged<S::Item>> {
    let total_count = if include_total {
        source.count().await?
    } else {
        UNKNOWN_TOTAL
    };

    let offset = page.saturating_sub(1).saturating_mul(page_size).max(0) as u64;
    let limit = page_size.max(0) as u64;
    let items = source.fetch(offset, limit).await?;

    Ok(Paged { items, total_count })
}
