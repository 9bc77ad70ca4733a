//! Pagination window computation
//!
//! Produces the row of page controls the listing renders: previous/next,
//! boundary pages, the siblings around the current page, and ellipsis
//! markers where the gaps exceed what boundaries and siblings cover. The
//! windowing rules follow the hook the original frontend used, so the
//! rendered bar matches it control for control.

/// One item in the pagination control row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControl {
    /// Go to the previous page; disabled on the first page
    Previous { disabled: bool },
    /// A directly navigable page number
    Page { number: u32, selected: bool },
    /// A gap in the page numbers
    Ellipsis,
    /// Go to the next page; disabled on the last page
    Next { disabled: bool },
}

/// Compute the control row with one sibling and one boundary page
pub fn page_controls(current_page: u32, page_count: u32) -> Vec<PageControl> {
    page_controls_with(current_page, page_count, 1, 1)
}

/// Compute the control row.
///
/// `sibling_count` pages are shown on each side of the current page and
/// `boundary_count` pages at each end of the range. A `current_page`
/// outside `[1, page_count]` is clamped, never an error.
pub fn page_controls_with(
    current_page: u32,
    page_count: u32,
    sibling_count: u32,
    boundary_count: u32,
) -> Vec<PageControl> {
    let count = i64::from(page_count);
    let boundary = i64::from(boundary_count);
    let sibling = i64::from(sibling_count);
    let page = i64::from(current_page).clamp(1, count.max(1));

    let start_pages = range(1, boundary.min(count));
    let end_pages = range((count - boundary + 1).max(boundary + 1), count);

    let siblings_start = (page - sibling)
        .min(count - boundary - sibling * 2 - 1)
        .max(boundary + 2);
    let siblings_end = (page + sibling)
        .max(boundary + sibling * 2 + 2)
        .min(end_pages.first().map_or(count - 1, |first| first - 2));

    let mut items = Vec::new();
    items.push(PageControl::Previous { disabled: page <= 1 });

    push_pages(&mut items, &start_pages, page);

    if siblings_start > boundary + 2 {
        items.push(PageControl::Ellipsis);
    } else if boundary + 1 < count - boundary {
        push_pages(&mut items, &[boundary + 1], page);
    }

    push_pages(&mut items, &range(siblings_start, siblings_end), page);

    if siblings_end < count - boundary - 1 {
        items.push(PageControl::Ellipsis);
    } else if count - boundary > boundary {
        push_pages(&mut items, &[count - boundary], page);
    }

    push_pages(&mut items, &end_pages, page);

    items.push(PageControl::Next {
        disabled: page >= count,
    });
    items
}

fn range(start: i64, end: i64) -> Vec<i64> {
    (start..=end).collect()
}

fn push_pages(items: &mut Vec<PageControl>, pages: &[i64], current: i64) {
    for &number in pages {
        items.push(PageControl::Page {
            number: number as u32,
            selected: number == current,
        });
    }
}
