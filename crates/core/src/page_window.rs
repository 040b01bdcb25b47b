//! Compact page-index windows for pagination controls.
//!
//! Short page ranges are listed in full. Longer ones keep the first page,
//! the last page and a neighborhood around the current page, with an
//! ellipsis standing in for each skipped run.

use serde::{Serialize, Serializer};

/// Pages shown on each side of the current page.
pub const DEFAULT_NEIGHBORS: i64 = 4;

/// One entry in a pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(i64),
    Ellipsis,
}

/// Pages serialize as bare numbers, the ellipsis as the string `"..."`.
impl Serialize for PageItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Page(n) => serializer.serialize_i64(*n),
            Self::Ellipsis => serializer.serialize_str("..."),
        }
    }
}

/// Build the window for `page` of `total_pages` with the default neighbor count.
pub fn page_window(page: i64, total_pages: i64) -> Vec<PageItem> {
    page_window_with(page, total_pages, DEFAULT_NEIGHBORS)
}

/// Build the window for `page` of `total_pages`, showing `neighbors` pages on
/// each side of the current one.
///
/// When `total_pages <= 2 * neighbors + 3` every page is listed. The current
/// page is clamped into `1..=total_pages`.
pub fn page_window_with(page: i64, total_pages: i64, neighbors: i64) -> Vec<PageItem> {
    let total = total_pages.max(1);
    let n = neighbors.max(0);
    let page = page.clamp(1, total);

    if total <= 2 * n + 3 {
        return (1..=total).map(PageItem::Page).collect();
    }

    let mut window = Window::new(total);
    let left_edge = n + 2;
    let right_edge = total - n - 1;

    window.page(1);
    if page <= left_edge {
        for i in 2..=left_edge + n {
            window.page(i);
        }
        window.ellipsis();
    } else if page >= right_edge {
        window.ellipsis();
        for i in right_edge - n..total {
            window.page(i);
        }
    } else {
        window.ellipsis();
        for i in page - n..=page + n {
            window.page(i);
        }
        window.ellipsis();
    }
    window.page(total);

    window.items
}

/// Accumulator that drops out-of-range pages and adjacent duplicates.
struct Window {
    total: i64,
    items: Vec<PageItem>,
}

impl Window {
    fn new(total: i64) -> Self {
        Self {
            total,
            items: Vec::new(),
        }
    }

    fn page(&mut self, n: i64) {
        if n < 1 || n > self.total {
            return;
        }
        if self.items.last() == Some(&PageItem::Page(n)) {
            return;
        }
        self.items.push(PageItem::Page(n));
    }

    fn ellipsis(&mut self) {
        self.items.push(PageItem::Ellipsis);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageItem::{Ellipsis, Page};

    fn pages(range: std::ops::RangeInclusive<i64>) -> Vec<PageItem> {
        range.map(Page).collect()
    }

    #[test]
    fn small_totals_list_every_page() {
        for page in -1..=7 {
            assert_eq!(page_window(page, 5), pages(1..=5));
        }
    }

    #[test]
    fn at_threshold_lists_every_page() {
        assert_eq!(page_window(6, 11), pages(1..=11));
    }

    #[test]
    fn single_page() {
        assert_eq!(page_window(1, 1), vec![Page(1)]);
        assert_eq!(page_window(1, 0), vec![Page(1)]);
    }

    #[test]
    fn middle_page_has_two_ellipses() {
        let mut expected = vec![Page(1), Ellipsis];
        expected.extend(pages(6..=14));
        expected.extend([Ellipsis, Page(20)]);
        assert_eq!(page_window(10, 20), expected);
    }

    #[test]
    fn near_start_has_trailing_ellipsis_only() {
        let mut expected = pages(1..=10);
        expected.extend([Ellipsis, Page(20)]);
        assert_eq!(page_window(1, 20), expected);
        assert_eq!(page_window(6, 20), expected);
    }

    #[test]
    fn near_end_has_leading_ellipsis_only() {
        let mut expected = vec![Page(1), Ellipsis];
        expected.extend(pages(11..=20));
        assert_eq!(page_window(20, 20), expected);
        assert_eq!(page_window(15, 20), expected);
    }

    #[test]
    fn out_of_range_page_is_clamped() {
        assert_eq!(page_window(99, 20), page_window(20, 20));
        assert_eq!(page_window(-5, 20), page_window(1, 20));
    }

    #[test]
    fn compact_window_with_one_neighbor() {
        assert_eq!(
            page_window_with(10, 20, 1),
            vec![Page(1), Ellipsis, Page(9), Page(10), Page(11), Ellipsis, Page(20)]
        );
    }

    #[test]
    fn windows_are_well_formed() {
        for neighbors in 0..=4 {
            for total in 1..=40 {
                for page in 1..=total {
                    let items = page_window_with(page, total, neighbors);
                    assert_eq!(items.first(), Some(&Page(1)));
                    assert_eq!(items.last(), Some(&Page(total)));
                    assert!(items.contains(&Page(page)), "page {page} of {total}");

                    for pair in items.windows(2) {
                        match pair {
                            [Page(a), Page(b)] => assert_eq!(a + 1, *b),
                            [Ellipsis, Ellipsis] => panic!("adjacent ellipses"),
                            _ => {}
                        }
                    }
                    for triple in items.windows(3) {
                        if let [Page(a), Ellipsis, Page(b)] = triple {
                            assert!(b - a >= 2, "ellipsis hides nothing: {a}..{b}");
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn serializes_numbers_and_ellipsis() {
        let json = serde_json::to_value(page_window_with(5, 9, 1)).unwrap();
        assert_eq!(json, serde_json::json!([1, "...", 4, 5, 6, "...", 9]));
    }
}
