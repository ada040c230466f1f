//! Compact page windows for pagination controls.

use serde::{Deserialize, Serialize};

/// Number of page buttons shown around the current page.
pub const WINDOW_SIZE: u32 = 5;

/// One entry in a pager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "page")]
pub enum PageLink {
    /// A clickable page number.
    Page(u32),
    /// A gap of one or more pages.
    Ellipsis,
}

impl PageLink {
    pub fn page(&self) -> Option<u32> {
        match self {
            PageLink::Page(n) => Some(*n),
            PageLink::Ellipsis => None,
        }
    }
}

/// Page numbers to display for `page` out of `total_pages`.
///
/// At most five numbers cluster around the current page; the window is
/// pinned to `1..=5` near the start and to the last five pages near the end.
/// Page 1 and the last page are always reachable, with an ellipsis marking
/// any gap wider than one page.
pub fn page_window(page: u32, total_pages: u32) -> Vec<PageLink> {
    let total = i64::from(total_pages.max(1));
    let page = i64::from(page);
    let span = i64::from(WINDOW_SIZE);

    let (mut start, mut end) = ((page - 2).max(1), (page + 2).min(total));
    if page <= 3 {
        start = 1;
        end = span.min(total);
    }
    if page >= total - 2 {
        start = (total - span + 1).max(1);
        end = total;
    }

    let mut links = Vec::with_capacity(WINDOW_SIZE as usize + 4);

    if start > 1 {
        links.push(PageLink::Page(1));
        if start > 2 {
            links.push(PageLink::Ellipsis);
        }
    }

    links.extend((start..=end).map(|n| PageLink::Page(n as u32)));

    if end < total {
        if end < total - 1 {
            links.push(PageLink::Ellipsis);
        }
        links.push(PageLink::Page(total as u32));
    }

    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use PageLink::{Ellipsis, Page};

    #[test]
    fn test_first_page_of_ten() {
        assert_eq!(
            page_window(1, 10),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn test_last_page_of_ten() {
        assert_eq!(
            page_window(10, 10),
            vec![Page(1), Ellipsis, Page(6), Page(7), Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn test_middle_page() {
        assert_eq!(
            page_window(6, 12),
            vec![
                Page(1),
                Ellipsis,
                Page(4),
                Page(5),
                Page(6),
                Page(7),
                Page(8),
                Ellipsis,
                Page(12)
            ]
        );
    }

    #[test]
    fn test_ellipsis_boundaries() {
        // Page 2 hidden: still marked.
        assert_eq!(
            page_window(5, 10),
            vec![
                Page(1),
                Ellipsis,
                Page(3),
                Page(4),
                Page(5),
                Page(6),
                Page(7),
                Ellipsis,
                Page(10)
            ]
        );
        // Window touches both ends: no markers.
        assert_eq!(
            page_window(4, 7),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Page(6), Page(7)]
        );
    }

    #[test]
    fn test_single_page() {
        assert_eq!(page_window(1, 1), vec![Page(1)]);
    }

    #[test]
    fn test_zero_total_treated_as_one() {
        assert_eq!(page_window(1, 0), vec![Page(1)]);
    }

    #[test]
    fn test_small_totals() {
        assert_eq!(page_window(2, 3), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(
            page_window(3, 5),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5)]
        );
    }

    #[test]
    fn test_window_never_exceeds_five_numbers_plus_ends() {
        for total in 1..40 {
            for page in 1..=total {
                let links = page_window(page, total);
                let numbers: Vec<u32> = links.iter().filter_map(PageLink::page).collect();
                assert!(numbers.len() <= 7, "page {} of {}: {:?}", page, total, links);
                assert!(numbers.windows(2).all(|w| w[0] < w[1]));
                assert_eq!(numbers.first(), Some(&1));
                assert_eq!(numbers.last(), Some(&total));
                assert!(numbers.contains(&page));
            }
        }
    }
}
