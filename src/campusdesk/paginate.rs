//! Page arithmetic over a filtered sequence.
//!
//! Pages are 1-based. A list always has at least one page, so an empty list shows page 1
//! with nothing on it. Requests outside `[1, total_pages]` clamp instead of failing, and
//! [`PageState::reclamp`] must run after anything that can shrink the filtered length.

use crate::error::{DeskError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// When navigation controls are drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlsPolicy {
    /// Only when the items do not fit on one page.
    #[default]
    Auto,
    Always,
}

/// `max(1, ceil(total / per_page))`
pub fn total_pages(total_items: usize, items_per_page: usize) -> usize {
    if items_per_page == 0 {
        return 1;
    }
    total_items.div_ceil(items_per_page).max(1)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    current_page: usize,
    items_per_page: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            current_page: 1,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

impl PageState {
    pub fn new(items_per_page: usize) -> Result<Self> {
        if items_per_page == 0 {
            return Err(DeskError::InvalidPageSize(items_per_page));
        }
        Ok(Self {
            current_page: 1,
            items_per_page,
        })
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    /// Jump to `page`, clamped into range for `total_items`.
    pub fn go_to(&mut self, page: usize, total_items: usize) {
        let last = total_pages(total_items, self.items_per_page);
        self.current_page = page.clamp(1, last);
    }

    pub fn next(&mut self, total_items: usize) {
        self.go_to(self.current_page.saturating_add(1), total_items);
    }

    pub fn previous(&mut self) {
        self.current_page = self.current_page.saturating_sub(1).max(1);
    }

    pub fn first(&mut self) {
        self.current_page = 1;
    }

    /// Change the page size and return to page 1.
    pub fn set_items_per_page(&mut self, items_per_page: usize) -> Result<()> {
        if items_per_page == 0 {
            return Err(DeskError::InvalidPageSize(items_per_page));
        }
        self.items_per_page = items_per_page;
        self.current_page = 1;
        Ok(())
    }

    /// Pull the current page back onto the last page when the list shrank.
    ///
    /// Returns true when the page moved.
    pub fn reclamp(&mut self, total_items: usize) -> bool {
        let last = total_pages(total_items, self.items_per_page);
        if self.current_page > last {
            debug!(from = self.current_page, to = last, "page re-clamped");
            self.current_page = last;
            return true;
        }
        false
    }
}

/// The visible slice of a filtered sequence plus navigation metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub current_page: usize,
    pub total_pages: usize,
    pub items_per_page: usize,
    pub total_items: usize,
    /// 0-based index of `items[0]` within the filtered sequence.
    pub start_index: usize,
}

impl<T> Page<'_, T> {
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn page_numbers(&self) -> std::ops::RangeInclusive<usize> {
        1..=self.total_pages
    }

    pub fn show_controls(&self, policy: ControlsPolicy) -> bool {
        match policy {
            ControlsPolicy::Auto => self.total_items > self.items_per_page,
            ControlsPolicy::Always => true,
        }
    }

    /// Navigation metadata without the borrowed slice.
    pub fn info(&self, policy: ControlsPolicy) -> PageInfo {
        PageInfo {
            current_page: self.current_page,
            total_pages: self.total_pages,
            items_per_page: self.items_per_page,
            total_items: self.total_items,
            has_previous: self.has_previous(),
            has_next: self.has_next(),
            show_controls: self.show_controls(policy),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub current_page: usize,
    pub total_pages: usize,
    pub items_per_page: usize,
    pub total_items: usize,
    pub has_previous: bool,
    pub has_next: bool,
    pub show_controls: bool,
}

/// Slice `items` for the state's page. Out-of-range pages are clamped; `state` is not
/// modified.
pub fn paginate<'a, T>(items: &'a [T], state: &PageState) -> Page<'a, T> {
    let n = items.len();
    let per_page = state.items_per_page.max(1);
    let pages = total_pages(n, per_page);
    let current = state.current_page.clamp(1, pages);
    let start = ((current - 1) * per_page).min(n);
    let end = (start + per_page).min(n);

    Page {
        items: &items[start..end],
        current_page: current,
        total_pages: pages,
        items_per_page: per_page,
        total_items: n,
        start_index: start,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colleges() -> Vec<usize> {
        (0..25).collect()
    }

    #[test]
    fn third_page_of_twenty_five() {
        let items = colleges();
        let mut state = PageState::new(10).unwrap();
        state.go_to(3, items.len());

        let page = paginate(&items, &state);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items.to_vec(), vec![20, 21, 22, 23, 24]);
        assert_eq!(page.start_index, 20);
        assert!(page.has_previous());
        assert!(!page.has_next());
    }

    #[test]
    fn out_of_range_requests_clamp() {
        let items = colleges();
        let mut state = PageState::new(10).unwrap();
        state.go_to(99, items.len());
        assert_eq!(state.current_page(), 3);
        state.go_to(0, items.len());
        assert_eq!(state.current_page(), 1);
        state.previous();
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn empty_list_has_one_empty_page() {
        let items: Vec<usize> = Vec::new();
        let page = paginate(&items, &PageState::default());
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.current_page, 1);
        assert!(page.items.is_empty());
    }

    #[test]
    fn changing_page_size_resets_to_first_page() {
        let mut state = PageState::new(10).unwrap();
        state.go_to(3, 25);
        state.set_items_per_page(20).unwrap();
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.items_per_page(), 20);
    }

    #[test]
    fn zero_page_size_is_rejected() {
        assert!(matches!(PageState::new(0), Err(DeskError::InvalidPageSize(0))));
        let mut state = PageState::default();
        assert!(state.set_items_per_page(0).is_err());
        assert_eq!(state.items_per_page(), DEFAULT_ITEMS_PER_PAGE);
    }

    #[test]
    fn reclamp_after_shrink() {
        let mut state = PageState::new(10).unwrap();
        state.go_to(2, 11);
        assert!(state.reclamp(10));
        assert_eq!(state.current_page(), 1);
        assert!(!state.reclamp(10));

        state.go_to(1, 0);
        state.reclamp(0);
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn controls_follow_policy() {
        let ten: Vec<usize> = (0..10).collect();
        let page = paginate(&ten, &PageState::default());
        assert!(!page.show_controls(ControlsPolicy::Auto));
        assert!(page.show_controls(ControlsPolicy::Always));

        let eleven: Vec<usize> = (0..11).collect();
        assert!(paginate(&eleven, &PageState::default()).show_controls(ControlsPolicy::Auto));
    }

    #[test]
    fn page_numbers_cover_all_pages() {
        let items = colleges();
        let page = paginate(&items, &PageState::default());
        assert_eq!(page.page_numbers().collect::<Vec<_>>(), vec![1, 2, 3]);
    }
}
