//! Page - A validated (page number, rows per page) pair
//!
//! Pages are never persisted. They are produced by the
//! [`PagingPolicy`](crate::service::paging::PagingPolicy) against the
//! current repository size and handed to a store for one read.

/// A page descriptor, normally produced by the paging policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    number: usize,
    rows: usize,
}

impl Page {
    pub fn new(number: usize, rows: usize) -> Self {
        Self { number, rows }
    }

    /// 1-based page number
    pub fn number(&self) -> usize {
        self.number
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Records to skip before this page starts
    pub fn offset(&self) -> usize {
        self.number.saturating_sub(1) * self.rows
    }

    /// Index one past the last record on this page
    pub fn end(&self) -> usize {
        self.number * self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_and_end() {
        let page = Page::new(3, 10);
        assert_eq!(page.offset(), 20);
        assert_eq!(page.end(), 30);

        let first = Page::new(1, 25);
        assert_eq!(first.offset(), 0);
        assert_eq!(first.end(), 25);
    }
}
