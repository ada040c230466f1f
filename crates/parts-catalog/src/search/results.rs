//! Paginated results.

use serde::Serialize;

use crate::search::window::{page_window, PageLink};

/// One page of a result sequence.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Page<T> {
    /// Items on this page.
    pub items: Vec<T>,
    /// Current page (1-indexed, always within `1..=total_pages`).
    pub page: u32,
    /// Total number of pages; at least 1.
    pub total_pages: u32,
    /// Number of items across all pages.
    pub total_count: usize,
    /// Items per page.
    pub page_size: usize,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Pager descriptor for this page.
    pub fn pager(&self) -> Pager {
        Pager::new(self.page, self.page_size, self.total_count)
    }
}

/// Number of pages needed for `total` items; never less than 1.
pub fn total_pages(total: usize, page_size: usize) -> u32 {
    let pages = total.div_ceil(page_size.max(1)).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Clamp a requested page into `1..=total_pages`.
pub fn clamp_page(requested: i64, total_pages: u32) -> u32 {
    requested.clamp(1, i64::from(total_pages.max(1))) as u32
}

/// Slice `sequence` into the requested page.
///
/// Out-of-range requests resolve to the nearest valid page; this never
/// fails. A zero `page_size` is treated as 1.
pub fn paginate<T: Clone>(sequence: &[T], requested: i64, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total_count = sequence.len();
    let total_pages = total_pages(total_count, page_size);
    let page = clamp_page(requested, total_pages);

    let start = (page as usize - 1).saturating_mul(page_size).min(total_count);
    let end = start.saturating_add(page_size).min(total_count);

    Page {
        items: sequence[start..end].to_vec(),
        page,
        total_pages,
        total_count,
        page_size,
    }
}

/// Everything a pagination control needs to render.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Pager {
    pub page: u32,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: u32,
    pub has_prev: bool,
    pub has_next: bool,
}

impl Pager {
    pub fn new(page: u32, page_size: usize, total_count: usize) -> Self {
        let total_pages = total_pages(total_count, page_size);
        let page = clamp_page(i64::from(page), total_pages);

        Self {
            page,
            page_size: page_size.max(1),
            total_count,
            total_pages,
            has_prev: page > 1,
            has_next: page < total_pages,
        }
    }

    pub fn is_first(&self) -> bool {
        self.page == 1
    }

    pub fn is_last(&self) -> bool {
        self.page >= self.total_pages
    }

    /// Page before the current one (1 on the first page).
    pub fn prev_page(&self) -> u32 {
        self.page.saturating_sub(1).max(1)
    }

    /// Page after the current one (last page on the last page).
    pub fn next_page(&self) -> u32 {
        (self.page + 1).min(self.total_pages)
    }

    /// First item number shown (1-indexed), 0 when there are no items.
    pub fn start_item(&self) -> usize {
        if self.total_count == 0 {
            0
        } else {
            (self.page as usize - 1) * self.page_size + 1
        }
    }

    /// Last item number shown.
    pub fn end_item(&self) -> usize {
        (self.page as usize * self.page_size).min(self.total_count)
    }

    /// Page numbers (with gaps) to display.
    pub fn window(&self) -> Vec<PageLink> {
        page_window(self.page, self.total_pages)
    }
}
