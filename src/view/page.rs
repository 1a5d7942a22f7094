/// Number of pages for `total` records: `ceil(total / page_size)`, never
/// less than 1. A zero page size is treated as 1.
pub fn total_pages(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1)).max(1)
}

/// Zero-based `[start, end)` bounds of 1-based `page`, clipped to `total`.
///
/// Pages past the end yield an empty range.
pub fn page_bounds(page: usize, page_size: usize, total: usize) -> (usize, usize) {
    let page_size = page_size.max(1);
    let start = page.saturating_sub(1).saturating_mul(page_size).min(total);
    let end = start.saturating_add(page_size).min(total);
    (start, end)
}
