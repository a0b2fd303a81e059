//! Optional pagination parameter normalization helpers
//!
//! Callers invoke these before the calculator when raw user input needs
//! clamping. The calculator itself never normalizes.

/// Default minimum page size
pub const DEFAULT_MIN_PAGE_SIZE: i64 = 1;

/// Default maximum page size
pub const DEFAULT_MAX_PAGE_SIZE: i64 = 100;

/// Normalize a page number to be at least 1
pub fn normalize_page(page: i64) -> i64 {
    page.max(1)
}

/// Clamp a page size between the given bounds
pub fn normalize_page_size(page_size: i64, min: i64, max: i64) -> i64 {
    page_size.clamp(min, max)
}

/// Clamp a page size between the default bounds (1..=100)
pub fn normalize_page_size_default(page_size: i64) -> i64 {
    normalize_page_size(page_size, DEFAULT_MIN_PAGE_SIZE, DEFAULT_MAX_PAGE_SIZE)
}

/// Normalize page and page size in one call, using the default size bounds
pub fn normalize(page: i64, page_size: i64) -> (i64, i64) {
    (normalize_page(page), normalize_page_size_default(page_size))
}
