//! Pagination
//!
//! Slices an ordered result set into a page. Deliberately permissive about
//! page numbers beyond the range (an empty page with valid metadata, the
//! site renders it as "nothing found"), strict about the programmer-level
//! contract (`page` and `per_page` are 1-based and positive).

use serde::Serialize;

/// Pagination metadata alongside a page slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    /// Total items across all pages.
    pub total: usize,
    /// `ceil(total / per_page)`; zero for an empty result set.
    pub total_pages: usize,
    pub page: usize,
    pub per_page: usize,
    pub has_prev: bool,
    pub has_next: bool,
    pub prev_page: Option<usize>,
    pub next_page: Option<usize>,
}

/// Slice `items` into the 1-based `page` of size `per_page`.
///
/// # Panics
///
/// Panics when `page` or `per_page` is zero; both are caller contract
/// violations with no sane recovery.
pub fn paginate<T>(items: &[T], page: usize, per_page: usize) -> (&[T], PageMeta) {
    assert!(page >= 1, "page is 1-based");
    assert!(per_page >= 1, "per_page must be positive");

    let total = items.len();
    let total_pages = total.div_ceil(per_page);

    let start = (page - 1).saturating_mul(per_page);
    let slice = if start >= total {
        &items[0..0]
    } else {
        let end = (start + per_page).min(total);
        &items[start..end]
    };

    let has_prev = page > 1;
    let has_next = page < total_pages;
    let meta = PageMeta {
        total,
        total_pages,
        page,
        per_page,
        has_prev,
        has_next,
        prev_page: has_prev.then(|| page - 1),
        next_page: has_next.then(|| page + 1),
    };
    (slice, meta)
}
