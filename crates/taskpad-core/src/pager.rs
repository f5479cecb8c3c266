/// 1-based pagination over a derived view.
///
/// The pager never owns the data; it is re-clamped against the current
/// visible length whenever that length may have changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page: usize,
    page_size: usize,
}

impl Pager {
    /// Pager on the first page. `page_size` is forced to at least 1.
    #[must_use]
    pub const fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: if page_size == 0 { 1 } else { page_size },
        }
    }

    /// Current page, 1-based.
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Fixed number of items per page.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Total pages for `len` visible items, never less than 1.
    #[must_use]
    pub const fn total_pages(&self, len: usize) -> usize {
        let pages = len.div_ceil(self.page_size);
        if pages == 0 { 1 } else { pages }
    }

    /// Advance one page, clamped at the last page for `len` items.
    pub const fn next(&mut self, len: usize) {
        if self.page < self.total_pages(len) {
            self.page += 1;
        }
    }

    /// Go back one page, clamped at page 1.
    pub const fn prev(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }

    /// Jump to `page`, clamped into `[1, total_pages(len)]`.
    pub const fn set_page(&mut self, page: usize, len: usize) {
        let clamped = if page == 0 { 1 } else { page };
        let total = self.total_pages(len);
        self.page = if clamped > total { total } else { clamped };
    }

    /// Return to the first page.
    pub const fn reset(&mut self) {
        self.page = 1;
    }

    /// Keep the current page valid after the visible length changed.
    pub const fn clamp(&mut self, len: usize) {
        let total = self.total_pages(len);
        if self.page > total {
            self.page = total;
        }
    }

    /// Slice the current page out of a derived view.
    #[must_use]
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.page - 1).saturating_mul(self.page_size);
        if start >= items.len() {
            return &[];
        }
        let end = start.saturating_add(self.page_size).min(items.len());
        &items[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_page_size_is_forced_to_one() {
        let pager = Pager::new(0);
        assert_eq!(pager.page_size(), 1);
        assert_eq!(pager.total_pages(3), 3);
    }

    #[test]
    fn twelve_items_at_size_five_make_three_pages() {
        let pager = Pager::new(5);
        assert_eq!(pager.total_pages(12), 3);
    }

    #[test]
    fn empty_view_still_has_one_page() {
        let pager = Pager::new(5);
        assert_eq!(pager.total_pages(0), 1);
        assert!(pager.slice::<u8>(&[]).is_empty());
    }

    #[test]
    fn last_page_holds_the_remainder() {
        let items: Vec<usize> = (0..12).collect();
        let mut pager = Pager::new(5);
        pager.set_page(3, items.len());
        assert_eq!(pager.slice(&items), &[10, 11]);
    }

    #[test]
    fn next_clamps_at_the_last_page() {
        let items: Vec<usize> = (0..12).collect();
        let mut pager = Pager::new(5);
        pager.set_page(3, items.len());
        pager.next(items.len());
        assert_eq!(pager.page(), 3);
    }

    #[test]
    fn prev_clamps_at_page_one() {
        let mut pager = Pager::new(5);
        pager.prev();
        assert_eq!(pager.page(), 1);
    }

    #[test]
    fn clamp_pulls_a_stale_page_back_into_range() {
        let mut pager = Pager::new(5);
        pager.set_page(3, 12);
        pager.clamp(4);
        assert_eq!(pager.page(), 1);
    }

    #[test]
    fn set_page_rejects_zero_and_overshoot() {
        let mut pager = Pager::new(5);
        pager.set_page(0, 12);
        assert_eq!(pager.page(), 1);
        pager.set_page(9, 12);
        assert_eq!(pager.page(), 3);
    }
}
