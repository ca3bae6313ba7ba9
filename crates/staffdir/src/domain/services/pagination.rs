//! Pagination - Slicing result lists into pages

use serde::Serialize;

use crate::domain::value_objects::PageSize;

/// Maximum number of page links shown around the current page
pub const MAX_VISIBLE_PAGES: usize = 5;

/// One page of a result list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number actually served
    pub page: usize,
    pub page_size: PageSize,
    pub total_items: usize,
    pub total_pages: usize,
    /// 1-based ordinal of the first item on this page (0 when empty)
    pub first_item: usize,
    /// 1-based ordinal of the last item on this page (0 when empty)
    pub last_item: usize,
}

impl<T> Page<T> {
    /// Convert the items while keeping the page metadata
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            total_items: self.total_items,
            total_pages: self.total_pages,
            first_item: self.first_item,
            last_item: self.last_item,
        }
    }
}

/// Serve `page` (1-based) of `items`.
///
/// Out-of-range pages are clamped to the nearest existing page, so page 0
/// yields page 1 and a page past the end yields the last page.
pub fn paginate<T>(items: Vec<T>, page: usize, page_size: PageSize) -> Page<T> {
    let size = page_size.get();
    let total_items = items.len();
    let total_pages = total_items.div_ceil(size);
    let page = page.clamp(1, total_pages.max(1));

    let start = (page - 1) * size;
    let end = (start + size).min(total_items);
    let items: Vec<T> = items.into_iter().skip(start).take(end - start).collect();

    let (first_item, last_item) = if items.is_empty() {
        (0, 0)
    } else {
        (start + 1, end)
    };

    Page {
        items,
        page,
        page_size,
        total_items,
        total_pages,
        first_item,
        last_item,
    }
}

/// Page numbers to offer as links: at most `MAX_VISIBLE_PAGES`, centered on
/// `current` and shifted when near either end.
pub fn page_window(current: usize, total_pages: usize) -> Vec<usize> {
    if total_pages == 0 {
        return Vec::new();
    }

    let current = current.clamp(1, total_pages);
    let mut start = current.saturating_sub(MAX_VISIBLE_PAGES / 2).max(1);
    let end = (start + MAX_VISIBLE_PAGES - 1).min(total_pages);

    if end + 1 - start < MAX_VISIBLE_PAGES {
        start = (end + 1).saturating_sub(MAX_VISIBLE_PAGES).max(1);
    }

    (start..=end).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(n: usize) -> Vec<usize> {
        (1..=n).collect()
    }

    #[test]
    fn test_first_page() {
        let page = paginate(numbers(45), 1, PageSize::Ten);
        assert_eq!(page.items, numbers(10));
        assert_eq!(page.total_pages, 5);
        assert_eq!((page.first_item, page.last_item), (1, 10));
    }

    #[test]
    fn test_partial_last_page() {
        let page = paginate(numbers(45), 5, PageSize::Ten);
        assert_eq!(page.items, vec![41, 42, 43, 44, 45]);
        assert_eq!((page.first_item, page.last_item), (41, 45));
    }

    #[test]
    fn test_out_of_range_pages_clamp() {
        assert_eq!(paginate(numbers(12), 0, PageSize::Ten).page, 1);

        let page = paginate(numbers(12), 9, PageSize::Ten);
        assert_eq!(page.page, 2);
        assert_eq!(page.items, vec![11, 12]);
    }

    #[test]
    fn test_empty_input() {
        let page = paginate(Vec::<usize>::new(), 3, PageSize::TwentyFive);
        assert!(page.items.is_empty());
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 0);
        assert_eq!((page.first_item, page.last_item), (0, 0));
    }

    #[test]
    fn test_map_keeps_metadata() {
        let page = paginate(numbers(25), 2, PageSize::Ten);
        let mapped = page.clone().map(|n| n.to_string());

        assert_eq!(mapped.items.first().map(String::as_str), Some("11"));
        assert_eq!(mapped.items.len(), 10);
        assert_eq!(
            (mapped.page, mapped.total_pages, mapped.first_item, mapped.last_item),
            (page.page, page.total_pages, page.first_item, page.last_item)
        );
    }

    #[test]
    fn test_page_window() {
        assert_eq!(page_window(1, 3), vec![1, 2, 3]);
        assert_eq!(page_window(1, 10), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(6, 10), vec![4, 5, 6, 7, 8]);
        assert_eq!(page_window(10, 10), vec![6, 7, 8, 9, 10]);
        assert_eq!(page_window(9, 10), vec![6, 7, 8, 9, 10]);
        assert!(page_window(1, 0).is_empty());
    }
}
