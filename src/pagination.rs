//! Page arithmetic and the paged response wrapper.

use serde::Serialize;

/// Page size used when a caller asks for a zero-sized page.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 20;

/// Number of pages needed to show `total` items, `page_size` per page.
pub fn pages_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size)
}

/// Clamps a requested 1-based page into `[1, pages_count]`, falling back to
/// the first page rather than failing.
pub fn normalize_page(page: usize, pages_count: usize) -> usize {
    if page == 0 || page > pages_count { 1 } else { page }
}

/// One page of items along with its position in the full result set.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PagingResult<T> {
    pub current_page: usize,
    pub pages_count: usize,
    pub data: Vec<T>,
}

impl<T> PagingResult<T> {
    pub fn new(data: Vec<T>, current_page: usize, pages_count: usize) -> Self {
        Self {
            current_page,
            pages_count,
            data,
        }
    }

    /// Converts every item while keeping the page position.
    pub fn map<U, F>(self, f: F) -> PagingResult<U>
    where
        F: FnMut(T) -> U,
    {
        PagingResult {
            current_page: self.current_page,
            pages_count: self.pages_count,
            data: self.data.into_iter().map(f).collect(),
        }
    }
}
