//! Record filtering.
//!
//! A screen declares its filters as [`FilterDescriptor`]s and keeps the current
//! selections in a [`FilterState`]. A record is visible when every descriptor accepts it
//! (logical AND); an empty selection accepts everything.
//!
//! Cascading filters (subject → chapter → topic) are wired through
//! [`CascadingFilterGraph`], which clears dependent selections whenever a parent changes
//! and derives each child's option list from the records the parents still admit.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub mod cascade;
pub mod descriptor;
pub mod options;
pub mod predicate;

pub use cascade::CascadingFilterGraph;
pub use descriptor::{FilterDescriptor, MatchMode};
pub use options::SelectOption;

/// The selection of one filter control.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    /// No constraint.
    #[default]
    Empty,
    /// A single-select choice or a search term.
    One(String),
    /// A multi-select choice, in selection order.
    Many(Vec<String>),
}

impl FilterValue {
    pub fn one(value: impl Into<String>) -> Self {
        FilterValue::One(value.into()).normalized()
    }

    pub fn many<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FilterValue::Many(values.into_iter().map(Into::into).collect()).normalized()
    }

    /// Collapses blank strings and empty lists to `Empty` and drops duplicate selections.
    pub fn normalized(self) -> Self {
        match self {
            FilterValue::Empty => FilterValue::Empty,
            FilterValue::One(v) if v.is_empty() => FilterValue::Empty,
            FilterValue::One(v) => FilterValue::One(v),
            FilterValue::Many(values) => {
                let mut unique: Vec<String> = Vec::with_capacity(values.len());
                for v in values {
                    if !v.is_empty() && !unique.contains(&v) {
                        unique.push(v);
                    }
                }
                if unique.is_empty() {
                    FilterValue::Empty
                } else {
                    FilterValue::Many(unique)
                }
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            FilterValue::Empty => true,
            FilterValue::One(v) => v.is_empty(),
            FilterValue::Many(v) => v.is_empty(),
        }
    }

    /// Selected values; a `One` is a single-element slice.
    pub fn values(&self) -> &[String] {
        match self {
            FilterValue::Empty => &[],
            FilterValue::One(v) => std::slice::from_ref(v),
            FilterValue::Many(v) => v,
        }
    }

    /// Multi-select toggle: adds `value` when absent, removes it when present.
    pub fn toggled(&self, value: &str) -> Self {
        let mut selected = self.values().to_vec();
        options::toggle(&mut selected, value);
        FilterValue::Many(selected).normalized()
    }
}

/// Current selections of one screen, keyed by filter key. Missing keys are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    values: BTreeMap<String, FilterValue>,
}

static EMPTY: FilterValue = FilterValue::Empty;

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> &FilterValue {
        self.values.get(key).unwrap_or(&EMPTY)
    }

    /// Raw write without cascading; use [`CascadingFilterGraph::set`] from screens.
    pub(crate) fn insert(&mut self, key: &str, value: FilterValue) {
        let value = value.normalized();
        if value.is_empty() {
            self.values.remove(key);
        } else {
            self.values.insert(key.to_string(), value);
        }
    }

    pub(crate) fn clear_key(&mut self, key: &str) -> bool {
        self.values.remove(key).is_some()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// True when at least one filter constrains the view.
    pub fn is_active(&self) -> bool {
        self.values.values().any(|v| !v.is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}
