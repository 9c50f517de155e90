//! Per-filter declarations and match semantics.

use super::FilterValue;
use crate::model::Record;
use serde::{Deserialize, Serialize};

/// How a filter compares its selection against a record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Strict equality (membership, for list fields).
    Exact,
    /// Case-insensitive substring; list fields match when any element does.
    Substring,
    /// Field shares at least one value with the selection.
    AnyOf,
    /// Field holds every selected value.
    AllOf,
}

/// Declares one filter control of a screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterDescriptor {
    /// The key selections are stored under (e.g. "search", "chapter").
    pub key: String,
    /// The record field the filter reads; defaults to `key`.
    pub field: String,
    pub mode: MatchMode,
    /// Filter keys whose selection this filter's options derive from.
    pub parents: Vec<String>,
}

impl FilterDescriptor {
    pub fn new(key: impl Into<String>, mode: MatchMode) -> Self {
        let key = key.into();
        Self {
            field: key.clone(),
            key,
            mode,
            parents: Vec::new(),
        }
    }

    pub fn exact(key: impl Into<String>) -> Self {
        Self::new(key, MatchMode::Exact)
    }

    pub fn substring(key: impl Into<String>) -> Self {
        Self::new(key, MatchMode::Substring)
    }

    pub fn any_of(key: impl Into<String>) -> Self {
        Self::new(key, MatchMode::AnyOf)
    }

    pub fn all_of(key: impl Into<String>) -> Self {
        Self::new(key, MatchMode::AllOf)
    }

    /// Reads a differently named record field.
    pub fn on_field(mut self, field: impl Into<String>) -> Self {
        self.field = field.into();
        self
    }

    pub fn child_of(mut self, parent: impl Into<String>) -> Self {
        self.parents.push(parent.into());
        self
    }

    /// Check if a record satisfies this filter under the given selection.
    ///
    /// An empty selection always matches. A record without the field never matches a
    /// non-empty selection.
    pub fn matches<R: Record>(&self, record: &R, value: &FilterValue) -> bool {
        let selected = value.values();
        if selected.is_empty() {
            return true;
        }
        let Some(field) = record.field(&self.field) else {
            return false;
        };
        let have = field.values();

        match self.mode {
            MatchMode::Exact | MatchMode::AnyOf => selected.iter().any(|s| have.contains(s)),
            MatchMode::AllOf => selected.iter().all(|s| have.contains(s)),
            MatchMode::Substring => {
                let haystacks: Vec<String> = have.iter().map(|h| h.to_lowercase()).collect();
                selected.iter().any(|needle| {
                    let needle = needle.to_lowercase();
                    haystacks.iter().any(|h| h.contains(&needle))
                })
            }
        }
    }
}
