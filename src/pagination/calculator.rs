//! Metadata calculator trait and default implementation

use super::types::{PageMeta, UNKNOWN_TOTAL};

/// Core trait for pagination metadata strategies.
///
/// A calculator derives [`PageMeta`] from `(page, page_size, total_count)`.
/// Implementations are pure and perform no I/O; input normalization is the
/// caller's responsibility (see [`super::normalize`]).
pub trait MetadataCalculator: std::fmt::Debug + Send + Sync {
    /// Compute metadata for one page.
    ///
    /// `page` and `page_size` are expected to be >= 1; `total_count` is a
    /// real count >= 0 or [`UNKNOWN_TOTAL`].
    fn compute(&self, page: i64, page_size: i64, total_count: i64) -> PageMeta;
}

/// Default metadata calculator.
///
/// Edge-case policy: `total_count <= 0` (the unknown sentinel and a
/// legitimate zero alike) yields `total_pages = -1` and `has_next_page =
/// false`. `has_previous_page` depends only on `page`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCalculator;

impl MetadataCalculator for DefaultCalculator {
    fn compute(&self, page: i64, page_size: i64, total_count: i64) -> PageMeta {
        // Real division then ceiling, not integer truncation
        let total_pages = if total_count > 0 {
            (total_count as f64 / page_size as f64).ceil() as i64
        } else {
            UNKNOWN_TOTAL
        };

        PageMeta {
            page,
            page_size,
            total_count,
            total_pages,
            has_next_page: total_count > 0 && page < total_pages,
            has_previous_page: page > 1,
        }
    }
}
