//! Page arithmetic and the page-number button window.

use serde::Serialize;
use std::ops::Range;

/// Number of pages for `total_items`; never less than 1.
#[must_use]
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total_items.div_ceil(page_size).max(1)
}

/// Half-open index range of `page` (1-based) within `total_items`.
///
/// Pages past the end yield an empty range; page 0 reads as page 1.
#[must_use]
pub fn page_bounds(page: usize, page_size: usize, total_items: usize) -> Range<usize> {
    let start = page.max(1).saturating_sub(1).saturating_mul(page_size).min(total_items);
    let end = start.saturating_add(page_size).min(total_items);
    start..end
}

/// Summary of the current page, as shown next to pagination controls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInfo {
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
    /// 1-based index of the first row on the page; 0 when the page is empty
    pub start_index: usize,
    /// 1-based index of the last row on the page; 0 when the page is empty
    pub end_index: usize,
    pub is_first_page: bool,
    pub is_last_page: bool,
    pub can_go_next: bool,
    pub can_go_previous: bool,
}

impl PaginationInfo {
    #[must_use]
    pub fn new(page: usize, page_size: usize, total_items: usize) -> Self {
        let page = page.max(1);
        let total_pages = total_pages(total_items, page_size);
        let bounds = page_bounds(page, page_size, total_items);
        let (start_index, end_index) = if bounds.is_empty() {
            (0, 0)
        } else {
            (bounds.start + 1, bounds.end)
        };
        Self {
            page,
            page_size,
            total_items,
            total_pages,
            start_index,
            end_index,
            is_first_page: page == 1,
            is_last_page: page == total_pages,
            can_go_next: page < total_pages,
            can_go_previous: page > 1,
        }
    }

    /// `page` clamped into `[1, total_pages]`.
    #[must_use]
    pub fn clamp_page(&self, page: usize) -> usize {
        page.clamp(1, self.total_pages)
    }
}

/// One slot of the page-number control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "page")]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

/// Page buttons around `page`, at most `max_buttons` consecutive numbers,
/// with the first and last page always reachable.
///
/// Returns nothing when there is only one page.
#[must_use]
pub fn page_numbers(page: usize, total_pages: usize, max_buttons: usize) -> Vec<PageItem> {
    if total_pages <= 1 {
        return Vec::new();
    }

    let half = max_buttons / 2;
    let mut start = page.saturating_sub(half).max(1);
    let mut end = page.saturating_add(half).min(total_pages);
    if page <= half {
        end = total_pages.min(max_buttons);
    }
    if page.saturating_add(half) > total_pages {
        start = total_pages.saturating_add(1).saturating_sub(max_buttons).max(1);
    }

    let mut items = Vec::with_capacity(end.saturating_sub(start).saturating_add(5));
    if start > 1 {
        items.push(PageItem::Page(1));
        if start > 2 {
            items.push(PageItem::Ellipsis);
        }
    }
    items.extend((start..=end).map(PageItem::Page));
    if end < total_pages {
        if end + 1 < total_pages {
            items.push(PageItem::Ellipsis);
        }
        items.push(PageItem::Page(total_pages));
    }
    items
}
