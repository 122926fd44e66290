//! PagingPolicy - Clamp page requests against the repository size
//!
//! ```text
//! requested (page, rows) ──► clamp rows into [10, 100]
//!                        ──► last page = max(1, ceil(size / rows))
//!                        ──► clamp page into [1, last page]
//! ```
//!
//! Validation never fails. Out-of-range input is silently clamped.
//! The policy remembers the last computed values so callers can ask
//! "which page am I on", but it never touches a store.

use core::ops::RangeInclusive;

use crate::model::page::Page;

/// The first page of every repository
pub const FIRST_PAGE: usize = 1;

/// Fewest rows a page may hold
pub const MIN_ROWS_PER_PAGE: usize = 10;

/// Most rows a page may hold
pub const MAX_ROWS_PER_PAGE: usize = 100;

/// Stateful paging policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagingPolicy {
    current_page: usize,
    rows_per_page: usize,
    last_page: usize,
}

impl PagingPolicy {
    pub fn new() -> Self {
        Self {
            current_page: FIRST_PAGE,
            rows_per_page: MIN_ROWS_PER_PAGE,
            last_page: FIRST_PAGE,
        }
    }

    /// Validate and remember a page request.
    ///
    /// Must be called before every size-dependent read so that the last
    /// page reflects the current repository size.
    pub fn validate(&mut self, page: i64, rows: i64, repository_size: usize) -> Page {
        let rows = clamp_request(rows, MIN_ROWS_PER_PAGE, MAX_ROWS_PER_PAGE);
        self.rows_per_page = rows;

        self.last_page = Self::last_page_for(repository_size, rows);

        let page = clamp_request(page, FIRST_PAGE, self.last_page);
        self.current_page = page;

        Page::new(page, rows)
    }

    /// `max(1, ceil(size / rows))`
    pub fn last_page_for(repository_size: usize, rows: usize) -> usize {
        repository_size.div_ceil(rows.max(1)).max(FIRST_PAGE)
    }

    // ========== Read-back ==========

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn rows_per_page(&self) -> usize {
        self.rows_per_page
    }

    pub fn last_page(&self) -> usize {
        self.last_page
    }

    /// Every page in `[1, last_page]`
    pub fn page_range(&self) -> RangeInclusive<usize> {
        FIRST_PAGE..=self.last_page
    }
}

impl Default for PagingPolicy {
    fn default() -> Self {
        Self::new()
    }
}

fn clamp_request(value: i64, min: usize, max: usize) -> usize {
    if value < min as i64 {
        min
    } else if value > max as i64 {
        max
    } else {
        value as usize
    }
}
