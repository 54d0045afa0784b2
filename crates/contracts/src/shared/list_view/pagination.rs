use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 4] = [10, 20, 50, 100];

/// Counters for the pagination bar. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    /// Rows left after search and filters.
    pub total_count: usize,
    /// Rows loaded from the backend.
    pub loaded_count: usize,
    /// 0-based index of the first visible row.
    pub start_index: usize,
    /// 0-based exclusive index of the last visible row.
    pub end_index: usize,
}

impl PageInfo {
    pub fn new(page: usize, page_size: usize, total_count: usize, loaded_count: usize) -> Self {
        let page_size = page_size.max(1);
        let total_pages = total_pages(total_count, page_size);
        let page = clamp_page(page, total_pages);
        let start_index = ((page - 1) * page_size).min(total_count);
        let end_index = (start_index + page_size).min(total_count);
        Self {
            page,
            page_size,
            total_pages,
            total_count,
            loaded_count,
            start_index,
            end_index,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn is_filtered(&self) -> bool {
        self.total_count != self.loaded_count
    }

    /// "Mostrando 1 - 10 de 25"
    pub fn range_label(&self) -> String {
        if self.total_count == 0 {
            return "Mostrando 0 de 0".to_string();
        }
        format!(
            "Mostrando {} - {} de {}",
            self.start_index + 1,
            self.end_index,
            self.total_count
        )
    }
}

pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1))
}

/// Clamps into `[1, total_pages]`, or 1 when there are no pages.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Entry of the numbered page bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Page(usize),
    Gap,
}

/// Up to five page numbers with gaps, keeping first and last reachable:
/// `1 2 3 4 … 9`, `1 … 4 5 6 … 9`, `1 … 6 7 8 9`.
pub fn page_window(current: usize, total: usize) -> Vec<PageLink> {
    const MAX_VISIBLE: usize = 5;
    if total <= MAX_VISIBLE {
        return (1..=total).map(PageLink::Page).collect();
    }
    let current = clamp_page(current, total);
    if current <= 3 {
        vec![
            PageLink::Page(1),
            PageLink::Page(2),
            PageLink::Page(3),
            PageLink::Page(4),
            PageLink::Gap,
            PageLink::Page(total),
        ]
    } else if current >= total - 2 {
        vec![
            PageLink::Page(1),
            PageLink::Gap,
            PageLink::Page(total - 3),
            PageLink::Page(total - 2),
            PageLink::Page(total - 1),
            PageLink::Page(total),
        ]
    } else {
        vec![
            PageLink::Page(1),
            PageLink::Gap,
            PageLink::Page(current - 1),
            PageLink::Page(current),
            PageLink::Page(current + 1),
            PageLink::Gap,
            PageLink::Page(total),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_is_ceiling() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(25, 20), 2);
    }

    #[test]
    fn page_is_clamped_into_range() {
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(7, 3), 3);
        assert_eq!(clamp_page(5, 0), 1);
    }

    #[test]
    fn page_info_for_last_partial_page() {
        let info = PageInfo::new(3, 10, 25, 25);
        assert_eq!(info.total_pages, 3);
        assert_eq!((info.start_index, info.end_index), (20, 25));
        assert!(!info.has_next());
        assert_eq!(info.range_label(), "Mostrando 21 - 25 de 25");
    }

    #[test]
    fn page_info_for_empty_set() {
        let info = PageInfo::new(4, 10, 0, 12);
        assert_eq!(info.page, 1);
        assert_eq!(info.total_pages, 0);
        assert_eq!((info.start_index, info.end_index), (0, 0));
        assert!(info.is_filtered());
    }

    #[test]
    fn window_shapes() {
        use PageLink::*;
        assert_eq!(page_window(2, 3), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(page_window(2, 9), vec![Page(1), Page(2), Page(3), Page(4), Gap, Page(9)]);
        assert_eq!(page_window(5, 9), vec![Page(1), Gap, Page(4), Page(5), Page(6), Gap, Page(9)]);
        assert_eq!(page_window(8, 9), vec![Page(1), Gap, Page(6), Page(7), Page(8), Page(9)]);
    }
}
