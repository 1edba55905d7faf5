//! Pagination utilities shared by the store and service layers.
//!
//! `Pagination` is the request side (0-based page index, page size) and
//! `Page<T>` is one slice of an ordered result set plus its metadata.

use serde::{Deserialize, Serialize};

/// Default number of items per page.
pub const DEFAULT_PAGE_SIZE: u64 = 20;
/// Upper bound applied when no explicit limit is configured.
pub const DEFAULT_MAX_PAGE_SIZE: u64 = 100;
/// Largest row offset; SQL backends bind offsets as signed 64-bit.
pub const MAX_OFFSET: u64 = i64::MAX as u64;

/// Pagination parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// 0-based page index
    #[serde(default)]
    pub page: u64,
    /// items per page
    #[serde(default = "default_size")]
    pub size: u64,
}

fn default_size() -> u64 { DEFAULT_PAGE_SIZE }

impl Pagination {
    pub fn new(page: u64, size: u64) -> Self { Self { page, size } }

    /// Clamp size into `1..=max_size`; the page index is kept as is.
    pub fn normalize(self, max_size: u64) -> (u64, u64) {
        let per_page = self.size.clamp(1, max_size.max(1));
        (self.page, per_page)
    }

    /// Rows skipped before this page, or `None` when `page * size` leaves
    /// the range a store can address.
    pub fn offset(&self) -> Option<u64> {
        self.page.checked_mul(self.size).filter(|offset| *offset <= MAX_OFFSET)
    }
}

impl Default for Pagination {
    fn default() -> Self { Self { page: 0, size: DEFAULT_PAGE_SIZE } }
}

/// One page of results.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 0-based index of this page
    pub page_index: u64,
    pub total_pages: u64,
    pub total_items: u64,
}

/// ceil(total_items / per_page); zero items give zero pages.
pub fn total_pages(total_items: u64, per_page: u64) -> u64 {
    if per_page == 0 {
        return 0;
    }
    total_items.div_ceil(per_page)
}
