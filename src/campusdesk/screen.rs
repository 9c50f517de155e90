//! One list screen: records, filters, page and edit state behind a single update function.
//!
//! ```text
//! store ──filter──▶ filtered sequence ──paginate──▶ visible rows
//!   ▲                                                   │
//!   └──────── add / commit / remove (by RecordId) ◀─────┘
//! ```
//!
//! Every [`ScreenAction`] goes through [`ListScreen::apply`], which re-clamps the page
//! before returning. Policies:
//! - any filter change returns to page 1
//! - a committed edit that no longer matches the active filters clears all filters
//! - a delete that empties the filtered view keeps the filters; the view reports
//!   [`ViewStatus::NoMatches`]

use crate::editable::{EditState, EditableRecordSet};
use crate::error::{DeskError, Result};
use crate::filter::predicate::filter_entries;
use crate::filter::{CascadingFilterGraph, FilterDescriptor, FilterState, FilterValue};
use crate::model::{Record, RecordId};
use crate::paginate::{paginate, ControlsPolicy, PageInfo, PageState};
use crate::store::memory::InMemoryStore;
use crate::store::{CollectionStore, Entry};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ScreenAction<R> {
    SetFilter {
        key: String,
        #[serde(default)]
        value: FilterValue,
    },
    ClearFilters,
    GoToPage {
        page: usize,
    },
    NextPage,
    PreviousPage,
    SetItemsPerPage {
        items_per_page: usize,
    },
    Add {
        record: R,
    },
    StartEdit {
        id: RecordId,
    },
    UpdateDraft {
        record: R,
    },
    CommitEdit,
    CancelEdit,
    Remove {
        id: RecordId,
    },
}

/// What an applied action did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ScreenOutcome {
    FiltersChanged { cleared: Vec<String> },
    PageChanged { page: usize },
    Added { id: RecordId },
    EditStarted { id: RecordId },
    DraftUpdated,
    Committed { id: RecordId, filters_cleared: bool },
    EditCancelled,
    Removed { id: RecordId },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewStatus {
    Rows,
    /// Nothing to show and no filter is active.
    Empty,
    /// Filters are active and nothing matches.
    NoMatches,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row<'a, R> {
    pub id: RecordId,
    /// 1-based position within the filtered sequence.
    pub ordinal: usize,
    pub record: &'a R,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListView<'a, R> {
    pub rows: Vec<Row<'a, R>>,
    pub page: PageInfo,
    pub status: ViewStatus,
}

impl<R> ListView<'_, R> {
    /// Id of the visible row with the given ordinal.
    pub fn id_at(&self, ordinal: usize) -> Option<RecordId> {
        self.rows.iter().find(|r| r.ordinal == ordinal).map(|r| r.id)
    }
}

#[derive(Debug, Clone)]
pub struct ListScreen<R, S = InMemoryStore<R>> {
    records: EditableRecordSet<R, S>,
    graph: CascadingFilterGraph,
    filters: FilterState,
    page: PageState,
    controls: ControlsPolicy,
}

impl<R: Record, S: CollectionStore<R>> ListScreen<R, S> {
    pub fn new(store: S, descriptors: Vec<FilterDescriptor>) -> Result<Self> {
        Ok(Self {
            records: EditableRecordSet::new(store),
            graph: CascadingFilterGraph::new(descriptors)?,
            filters: FilterState::new(),
            page: PageState::default(),
            controls: ControlsPolicy::default(),
        })
    }

    pub fn with_items_per_page(mut self, items_per_page: usize) -> Result<Self> {
        self.page = PageState::new(items_per_page)?;
        Ok(self)
    }

    pub fn with_controls(mut self, controls: ControlsPolicy) -> Self {
        self.controls = controls;
        self
    }

    pub fn store(&self) -> &S {
        self.records.store()
    }

    pub fn graph(&self) -> &CascadingFilterGraph {
        &self.graph
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn page_state(&self) -> &PageState {
        &self.page
    }

    pub fn edit_state(&self) -> &EditState<R> {
        self.records.edit_state()
    }

    pub fn draft(&self) -> Option<&R> {
        self.records.draft()
    }

    /// Mutate the draft in place (used by editors with dependent fields).
    pub fn edit_draft<F: FnOnce(&mut R)>(&mut self, f: F) -> Result<()> {
        let draft = self.records.draft_mut().ok_or(DeskError::NotEditing)?;
        f(draft);
        Ok(())
    }

    /// Entries passing every filter, in store order.
    pub fn filtered(&self) -> Vec<&Entry<R>> {
        filter_entries(
            self.records.store().entries(),
            &self.filters,
            self.graph.descriptors(),
        )
    }

    /// Option list for a filter control, derived from its parents' selections.
    pub fn options(&self, key: &str) -> Result<Vec<String>> {
        self.graph
            .options(self.records.store().entries(), &self.filters, key)
    }

    pub fn apply(&mut self, action: ScreenAction<R>) -> Result<ScreenOutcome> {
        let outcome = self.dispatch(action)?;
        let total = self.filtered().len();
        self.page.reclamp(total);
        Ok(outcome)
    }

    fn dispatch(&mut self, action: ScreenAction<R>) -> Result<ScreenOutcome> {
        match action {
            ScreenAction::SetFilter { key, value } => {
                let cleared = self.graph.set(&mut self.filters, &key, value)?;
                self.page.first();
                Ok(ScreenOutcome::FiltersChanged { cleared })
            }
            ScreenAction::ClearFilters => {
                let cleared: Vec<String> = self.filters.iter().map(|(k, _)| k.to_string()).collect();
                self.filters.clear();
                self.page.first();
                Ok(ScreenOutcome::FiltersChanged { cleared })
            }
            ScreenAction::GoToPage { page } => {
                let total = self.filtered().len();
                self.page.go_to(page, total);
                Ok(self.page_changed())
            }
            ScreenAction::NextPage => {
                let total = self.filtered().len();
                self.page.next(total);
                Ok(self.page_changed())
            }
            ScreenAction::PreviousPage => {
                self.page.previous();
                Ok(self.page_changed())
            }
            ScreenAction::SetItemsPerPage { items_per_page } => {
                self.page.set_items_per_page(items_per_page)?;
                Ok(self.page_changed())
            }
            ScreenAction::Add { record } => {
                let id = self.records.add(record)?;
                Ok(ScreenOutcome::Added { id })
            }
            ScreenAction::StartEdit { id } => {
                self.records.start_edit(&id)?;
                Ok(ScreenOutcome::EditStarted { id })
            }
            ScreenAction::UpdateDraft { record } => {
                self.records.set_draft(record)?;
                Ok(ScreenOutcome::DraftUpdated)
            }
            ScreenAction::CommitEdit => {
                let (id, _previous) = self.records.commit_edit()?;
                let still_visible = self
                    .records
                    .store()
                    .get(&id)
                    .map(|r| self.graph.matches(r, &self.filters))?;
                let filters_cleared = !still_visible;
                if filters_cleared {
                    info!(%id, "edited record left the filtered view, clearing filters");
                    self.filters.clear();
                    self.page.first();
                }
                Ok(ScreenOutcome::Committed {
                    id,
                    filters_cleared,
                })
            }
            ScreenAction::CancelEdit => {
                self.records.cancel_edit();
                Ok(ScreenOutcome::EditCancelled)
            }
            ScreenAction::Remove { id } => {
                self.records.remove(&id)?;
                Ok(ScreenOutcome::Removed { id })
            }
        }
    }

    fn page_changed(&self) -> ScreenOutcome {
        ScreenOutcome::PageChanged {
            page: self.page.current_page(),
        }
    }

    pub fn view(&self) -> ListView<'_, R> {
        let filtered = self.filtered();
        let page = paginate(&filtered, &self.page);
        let rows: Vec<Row<'_, R>> = page
            .items
            .iter()
            .enumerate()
            .map(|(i, &entry)| Row {
                id: entry.id,
                ordinal: page.start_index + i + 1,
                record: &entry.record,
            })
            .collect();

        let status = if !rows.is_empty() {
            ViewStatus::Rows
        } else if self.filters.is_active() {
            ViewStatus::NoMatches
        } else {
            ViewStatus::Empty
        };

        ListView {
            page: page.info(self.controls),
            rows,
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::{Item, StoreFixture};

    fn screen(count: usize) -> ListScreen<Item> {
        let fixture = StoreFixture::new().with_items(count);
        ListScreen::new(
            fixture.store,
            vec![
                FilterDescriptor::substring("search").on_field("name"),
                FilterDescriptor::any_of("tags"),
            ],
        )
        .unwrap()
    }

    fn search(term: &str) -> ScreenAction<Item> {
        ScreenAction::SetFilter {
            key: "search".into(),
            value: FilterValue::one(term),
        }
    }

    #[test]
    fn deleting_last_row_of_page_two_reclamps() {
        let mut screen = screen(11);
        screen.apply(ScreenAction::GoToPage { page: 2 }).unwrap();
        let view = screen.view();
        assert_eq!(view.rows.len(), 1);
        let last = view.rows[0].id;

        screen.apply(ScreenAction::Remove { id: last }).unwrap();

        let view = screen.view();
        assert_eq!(screen.page_state().current_page(), 1);
        assert_eq!(view.rows.len(), 10);
        assert_eq!(view.page.total_pages, 1);
    }

    #[test]
    fn filter_change_returns_to_first_page() {
        let mut screen = screen(25);
        screen.apply(ScreenAction::GoToPage { page: 3 }).unwrap();
        screen.apply(search("item")).unwrap();
        assert_eq!(screen.page_state().current_page(), 1);
    }

    #[test]
    fn rows_carry_absolute_ordinals_and_stable_ids() {
        let mut screen = screen(25);
        screen.apply(ScreenAction::GoToPage { page: 3 }).unwrap();
        let view = screen.view();
        let ordinals: Vec<_> = view.rows.iter().map(|r| r.ordinal).collect();
        assert_eq!(ordinals, vec![21, 22, 23, 24, 25]);

        let target = view.id_at(23).unwrap();
        assert_eq!(screen.store().get(&target).unwrap().name, "Item 23");
    }

    #[test]
    fn delete_under_filter_hits_the_intended_record() {
        let mut screen = screen(12);
        screen.apply(search("item 1")).unwrap();
        // Item 1, Item 10, Item 11, Item 12
        let view = screen.view();
        let id = view.id_at(3).unwrap();
        screen.apply(ScreenAction::Remove { id }).unwrap();

        assert_eq!(screen.store().len(), 11);
        assert!(screen
            .store()
            .entries()
            .iter()
            .all(|e| e.record.name != "Item 11"));
    }

    #[test]
    fn commit_that_leaves_filter_clears_filters() {
        let mut screen = screen(5);
        screen.apply(search("item 2")).unwrap();
        let id = screen.view().id_at(1).unwrap();

        screen.apply(ScreenAction::StartEdit { id }).unwrap();
        screen
            .apply(ScreenAction::UpdateDraft {
                record: Item::new("Renamed"),
            })
            .unwrap();
        let outcome = screen.apply(ScreenAction::CommitEdit).unwrap();

        assert_eq!(
            outcome,
            ScreenOutcome::Committed {
                id,
                filters_cleared: true
            }
        );
        assert!(!screen.filters().is_active());
        assert_eq!(screen.view().rows.len(), 5);
    }

    #[test]
    fn commit_that_still_matches_keeps_filters() {
        let mut screen = screen(5);
        screen.apply(search("item")).unwrap();
        let id = screen.view().id_at(1).unwrap();
        screen.apply(ScreenAction::StartEdit { id }).unwrap();
        screen
            .edit_draft(|draft| draft.name = "Item One".into())
            .unwrap();
        let outcome = screen.apply(ScreenAction::CommitEdit).unwrap();
        assert!(matches!(
            outcome,
            ScreenOutcome::Committed {
                filters_cleared: false,
                ..
            }
        ));
        assert!(screen.filters().is_active());
    }

    #[test]
    fn delete_that_empties_filtered_view_keeps_filters() {
        let mut screen = screen(3);
        screen.apply(search("item 3")).unwrap();
        let id = screen.view().id_at(1).unwrap();
        screen.apply(ScreenAction::Remove { id }).unwrap();

        let view = screen.view();
        assert!(screen.filters().is_active());
        assert_eq!(view.status, ViewStatus::NoMatches);
    }

    #[test]
    fn empty_store_is_not_a_filter_miss() {
        let screen = screen(0);
        let view = screen.view();
        assert_eq!(view.status, ViewStatus::Empty);
        assert_eq!(view.page.current_page, 1);
    }

    #[test]
    fn rejected_page_size_keeps_state() {
        let mut screen = screen(25);
        screen.apply(ScreenAction::GoToPage { page: 2 }).unwrap();
        let err = screen
            .apply(ScreenAction::SetItemsPerPage { items_per_page: 0 })
            .unwrap_err();
        assert!(matches!(err, DeskError::InvalidPageSize(0)));
        assert_eq!(screen.page_state().current_page(), 2);
    }

    #[test]
    fn actions_deserialize_from_json() {
        let action: ScreenAction<Item> =
            serde_json::from_str(r#"{"action":"set_filter","key":"search","value":"stan"}"#)
                .unwrap();
        assert_eq!(action, search("stan"));

        let action: ScreenAction<Item> = serde_json::from_str(r#"{"action":"next_page"}"#).unwrap();
        assert_eq!(action, ScreenAction::NextPage);
    }
}
