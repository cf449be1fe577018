//! Compact page-link strip for pagination controls.

use serde::Serialize;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageLink {
    Page { number: usize, current: bool },
    Ellipsis,
}

/// Links to render for `total_pages` pages with `current` selected.
///
/// The first two pages, the last two pages and the current page's immediate
/// neighbours are always shown. Gaps after page 2 and before page
/// `total_pages - 2` collapse into an ellipsis. Nothing is shown for a
/// single page.
pub fn page_links(current: usize, total_pages: usize) -> Vec<PageLink> {
    if total_pages <= 1 {
        return Vec::new();
    }

    let mut links = Vec::new();
    for number in 1..=total_pages {
        let near_edge = number <= 2 || number + 2 > total_pages;
        let near_current = number.abs_diff(current) <= 1;
        if near_edge || near_current {
            links.push(PageLink::Page {
                number,
                current: number == current,
            });
        } else if (number == 3 && current > 4)
            || (number + 2 == total_pages && current + 3 < total_pages)
        {
            links.push(PageLink::Ellipsis);
        }
    }
    links
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(links: &[PageLink]) -> String {
        links
            .iter()
            .map(|link| match link {
                PageLink::Page { number, current: true } => format!("[{number}]"),
                PageLink::Page { number, .. } => number.to_string(),
                PageLink::Ellipsis => "…".to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn single_page_has_no_links() {
        assert!(page_links(1, 0).is_empty());
        assert!(page_links(1, 1).is_empty());
    }

    #[test]
    fn short_ranges_show_every_page() {
        assert_eq!(render(&page_links(1, 2)), "[1] 2");
        assert_eq!(render(&page_links(3, 5)), "1 2 [3] 4 5");
    }

    #[test]
    fn middle_page_collapses_both_sides() {
        assert_eq!(render(&page_links(5, 10)), "1 2 … 4 [5] 6 … 9 10");
    }

    #[test]
    fn near_the_start_collapses_only_the_tail() {
        assert_eq!(render(&page_links(1, 10)), "[1] 2 … 9 10");
        assert_eq!(render(&page_links(4, 10)), "1 2 3 [4] 5 … 9 10");
    }

    #[test]
    fn near_the_end_collapses_only_the_head() {
        assert_eq!(render(&page_links(10, 10)), "1 2 … 9 [10]");
        assert_eq!(render(&page_links(7, 10)), "1 2 … 6 [7] 8 9 10");
    }
}
