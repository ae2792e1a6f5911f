//! Fixed-size pagination.

use serde::Serialize;

/// Records per page. Not a request parameter.
pub const PAGE_SIZE: usize = 8;

/// One page of a larger result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_items: usize,
    /// `ceil(total_items / PAGE_SIZE)`, 0 when there are no items.
    pub total_pages: usize,
    /// The requested page, echoed back even when out of range.
    pub current_page: usize,
    /// 1-based position of the first item shown, 0 when the page is empty.
    pub showing_from: usize,
    /// 1-based position of the last item shown, 0 when the page is empty.
    pub showing_to: usize,
}

/// Slices `items` to the 1-based `page`. Pages past the end are empty.
pub fn paginate<T: Clone>(items: &[T], page: usize) -> Page<T> {
    let total_items = items.len();
    let total_pages = total_items.div_ceil(PAGE_SIZE);

    let start = page.saturating_sub(1).saturating_mul(PAGE_SIZE).min(total_items);
    let end = start.saturating_add(PAGE_SIZE).min(total_items);
    let slice = &items[start..end];

    let (showing_from, showing_to) = if slice.is_empty() {
        (0, 0)
    } else {
        (start + 1, end)
    };

    Page {
        items: slice.to_vec(),
        total_items,
        total_pages,
        current_page: page,
        showing_from,
        showing_to,
    }
}
