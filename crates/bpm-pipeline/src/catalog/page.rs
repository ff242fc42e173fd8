use serde::Serialize;

/// Page size used by every catalog view
pub const DEFAULT_PAGE_SIZE: usize = 15;

/// One page of results
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Items on this page
    pub items: Vec<T>,
    /// 1-based page number actually served
    pub page: usize,
    /// Items per page
    pub page_size: usize,
    /// Items across all pages
    pub total: usize,
    /// Number of pages, at least 1
    pub total_pages: usize,
}

impl<T> Page<T> {
    /// Whether a following page exists
    #[inline]
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Whether a preceding page exists
    #[inline]
    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// Map the items, keeping the page geometry
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            total: self.total,
            total_pages: self.total_pages,
        }
    }
}

/// Cut page `page` (1-based) out of `items`
///
/// Out-of-range pages clamp to the first or last page. A zero page size is
/// treated as 1.
#[must_use]
pub fn paginate<T>(items: Vec<T>, page: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total = items.len();
    let total_pages = total.div_ceil(page_size).max(1);
    let page = page.clamp(1, total_pages);

    let items = items
        .into_iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .collect();

    Page {
        items,
        page,
        page_size,
        total,
        total_pages,
    }
}
