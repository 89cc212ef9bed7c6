//! Pagination utilities for service layer
//!
//! Provides a simple `Pagination` struct and helpers to normalize inputs.

pub const DEFAULT_PAGE_SIZE: u32 = 1000;
pub const MAX_PAGE_SIZE: u32 = 1000;

/// Pagination parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page index
    pub page: u32,
    /// items per page
    pub per_page: u32,
}

impl Pagination {
    pub fn new(page: u32, per_page: u32) -> Self { Self { page, per_page } }

    /// Page 0 behaves as page 1 and the size is capped at `MAX_PAGE_SIZE`.
    /// Returns the 0-based page index and the page size.
    pub fn normalize(self) -> (u64, u64) {
        let page = if self.page == 0 { 1 } else { self.page };
        let per_page = self.per_page.min(MAX_PAGE_SIZE);
        ((page - 1) as u64, per_page as u64)
    }

    /// Items to skip and take over an in-memory sequence.
    pub fn bounds(self) -> (usize, usize) {
        let (idx, per_page) = self.normalize();
        let skip = idx.saturating_mul(per_page);
        (usize::try_from(skip).unwrap_or(usize::MAX), per_page as usize)
    }
}

impl Default for Pagination {
    fn default() -> Self { Self { page: 1, per_page: DEFAULT_PAGE_SIZE } }
}

#[cfg(test)]
mod tests {
    use super::Pagination;

    #[test]
    fn normalize_treats_page_zero_as_first() {
        let (idx, per) = Pagination { page: 0, per_page: 0 }.normalize();
        assert_eq!(idx, 0);
        assert_eq!(per, 0);
    }

    #[test]
    fn normalize_clamps_upper_bound() {
        let (idx, per) = Pagination { page: 5, per_page: 5000 }.normalize();
        assert_eq!(idx, 4);
        assert_eq!(per, 1000);
    }

    #[test]
    fn bounds_saturate_on_huge_pages() {
        let (skip, take) = Pagination { page: u32::MAX, per_page: 1000 }.bounds();
        assert!(skip >= 1000);
        assert_eq!(take, 1000);
    }

    #[test]
    fn default_values_are_sane() {
        let d = Pagination::default();
        assert_eq!(d.page, 1);
        assert_eq!(d.per_page, 1000);
    }
}
