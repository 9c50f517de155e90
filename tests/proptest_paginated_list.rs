//! Property tests for a filtered, paginated list screen.
//!
//! 1. Walking every page yields the filtered list exactly once, in order.
//! 2. `total_pages` is `max(1, ceil(n / per_page))`.
//! 3. The current page stays in range after any sequence of removals.
//! 4. Setting a parent filter clears its child filter.
//! 5. Every visible row passes the active filters.
//! 6. Any requested page is clamped and shows the exact slice for the clamped page.

use campusdesk::filter::descriptor::FilterDescriptor;
use campusdesk::filter::FilterValue;
use campusdesk::model::{FieldValue, Record, RecordId};
use campusdesk::paginate::total_pages;
use campusdesk::screen::{ListScreen, ScreenAction, ScreenOutcome};
use campusdesk::store::memory::InMemoryStore;
use proptest::prelude::*;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
struct Book {
    shelf: String,
    genre: String,
    title: String,
}

impl Record for Book {
    fn field(&self, key: &str) -> Option<FieldValue> {
        let value = match key {
            "shelf" => &self.shelf,
            "genre" => &self.genre,
            "title" => &self.title,
            _ => return None,
        };
        Some(FieldValue::text(value))
    }
}

const SHELVES: [&str; 3] = ["A", "B", "C"];
const GENRES: [&str; 3] = ["fiction", "poetry", "history"];

// ── Helpers ─────────────────────────────────────────────────────────────

fn books(max_len: usize) -> impl Strategy<Value = Vec<Book>> {
    proptest::collection::vec((0..SHELVES.len(), 0..GENRES.len(), 0u32..1000), 0..=max_len)
        .prop_map(|rows| {
            rows.into_iter()
                .map(|(s, g, n)| Book {
                    shelf: SHELVES[s].to_string(),
                    genre: GENRES[g].to_string(),
                    title: format!("Book {n}"),
                })
                .collect()
        })
}

fn screen(books: Vec<Book>, per_page: usize) -> ListScreen<Book> {
    ListScreen::new(
        InMemoryStore::from_records(books),
        vec![
            FilterDescriptor::exact("shelf"),
            FilterDescriptor::exact("genre").child_of("shelf"),
            FilterDescriptor::substring("title"),
        ],
    )
    .and_then(|s| s.with_items_per_page(per_page))
    .unwrap()
}

fn set_filter(key: &str, value: &str) -> ScreenAction<Book> {
    ScreenAction::SetFilter {
        key: key.to_string(),
        value: FilterValue::one(value),
    }
}

fn visible_ids(screen: &ListScreen<Book>) -> Vec<RecordId> {
    screen.view().rows.iter().map(|r| r.id).collect()
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Pages partition the filtered list
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn pages_partition_filtered_list(
        books in books(60),
        per_page in 1usize..=12,
        shelf in proptest::option::of(0..SHELVES.len()),
    ) {
        let mut screen = screen(books, per_page);
        if let Some(s) = shelf {
            screen.apply(set_filter("shelf", SHELVES[s])).unwrap();
        }
        let expected: Vec<RecordId> = screen.filtered().iter().map(|e| e.id).collect();

        let pages = screen.view().page.total_pages;
        let mut walked = Vec::new();
        for page in 1..=pages {
            screen.apply(ScreenAction::GoToPage { page }).unwrap();
            let ids = visible_ids(&screen);
            prop_assert!(ids.len() <= per_page);
            walked.extend(ids);
        }
        prop_assert_eq!(walked, expected);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. total_pages formula
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn total_pages_is_ceiling_with_floor_of_one(total in 0usize..500, per_page in 1usize..50) {
        let pages = total_pages(total, per_page);
        prop_assert!(pages >= 1);
        prop_assert_eq!(pages, std::cmp::max(1, total.div_ceil(per_page)));
        prop_assert!(pages * per_page >= total);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Removals keep the page in range
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn removals_keep_page_in_range(
        books in books(40),
        per_page in 1usize..=8,
        start_page in 1usize..=10,
        picks in proptest::collection::vec(0usize..8, 0..20),
    ) {
        let mut screen = screen(books, per_page);
        screen.apply(ScreenAction::GoToPage { page: start_page }).unwrap();

        for pick in picks {
            let ids = visible_ids(&screen);
            if ids.is_empty() {
                break;
            }
            let id = ids[pick % ids.len()];
            let outcome = screen.apply(ScreenAction::Remove { id }).unwrap();
            prop_assert_eq!(outcome, ScreenOutcome::Removed { id });

            let info = screen.view().page;
            prop_assert!(info.current_page >= 1);
            prop_assert!(info.current_page <= info.total_pages);
            prop_assert_eq!(info.total_pages, total_pages(info.total_items, per_page));
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Parent filter changes clear the child
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn parent_change_clears_child(
        books in books(30),
        first in 0..SHELVES.len(),
        second in 0..SHELVES.len(),
        genre in 0..GENRES.len(),
    ) {
        let mut screen = screen(books, 10);
        screen.apply(set_filter("shelf", SHELVES[first])).unwrap();
        screen.apply(set_filter("genre", GENRES[genre])).unwrap();
        screen.apply(ScreenAction::GoToPage { page: 2 }).unwrap();

        let outcome = screen.apply(set_filter("shelf", SHELVES[second])).unwrap();
        prop_assert_eq!(
            outcome,
            ScreenOutcome::FiltersChanged { cleared: vec!["genre".to_string()] }
        );
        prop_assert!(screen.filters().get("genre").is_empty());
        prop_assert_eq!(screen.page_state().current_page(), 1);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Visible rows pass the filters
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn visible_rows_match_filters(
        books in books(50),
        shelf in 0..SHELVES.len(),
        genre in proptest::option::of(0..GENRES.len()),
        needle in "[0-9]{0,2}",
    ) {
        let mut screen = screen(books, 5);
        screen.apply(set_filter("shelf", SHELVES[shelf])).unwrap();
        if let Some(g) = genre {
            screen.apply(set_filter("genre", GENRES[g])).unwrap();
        }
        screen.apply(set_filter("title", &needle)).unwrap();

        for row in screen.view().rows {
            prop_assert_eq!(&row.record.shelf, SHELVES[shelf]);
            if let Some(g) = genre {
                prop_assert_eq!(&row.record.genre, GENRES[g]);
            }
            prop_assert!(row.record.title.contains(needle.as_str()));
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Requested pages clamp to an exact, contiguous slice
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn requested_page_shows_exact_slice(
        books in books(200),
        per_page in 1usize..30,
        requested in 0usize..50,
        shelf in proptest::option::of(0..SHELVES.len()),
    ) {
        let mut screen = screen(books, per_page);
        if let Some(s) = shelf {
            screen.apply(set_filter("shelf", SHELVES[s])).unwrap();
        }
        let filtered: Vec<RecordId> = screen.filtered().iter().map(|e| e.id).collect();
        let n = filtered.len();

        screen.apply(ScreenAction::GoToPage { page: requested }).unwrap();

        let pages = total_pages(n, per_page);
        let clamped = requested.clamp(1, pages);
        prop_assert_eq!(screen.page_state().current_page(), clamped);

        let view = screen.view();
        let start = (clamped - 1) * per_page;
        let expected_len = per_page.min(n - start);
        prop_assert_eq!(view.rows.len(), expected_len);

        let ids: Vec<RecordId> = view.rows.iter().map(|r| r.id).collect();
        prop_assert_eq!(&ids[..], &filtered[start..start + expected_len]);

        let ordinals: Vec<usize> = view.rows.iter().map(|r| r.ordinal).collect();
        let contiguous: Vec<usize> = (start + 1..=start + expected_len).collect();
        prop_assert_eq!(ordinals, contiguous);
    }
}
