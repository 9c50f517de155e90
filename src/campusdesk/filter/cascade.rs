//! Dependent filters.
//!
//! Each [`FilterDescriptor`] may name parent keys. Changing a parent clears every
//! descendant (transitively) in the same update, so a chapter selection can never outlive
//! the subject it was picked under. Child option lists are computed from the
//! parent-filtered subset of the store: only records admitted by every currently set
//! ancestor contribute values. With no ancestor set, the options are the union over all
//! records.

use super::{FilterDescriptor, FilterState, FilterValue};
use crate::error::{DeskError, Result};
use crate::model::Record;
use crate::store::Entry;
use std::collections::{HashSet, VecDeque};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct CascadingFilterGraph {
    descriptors: Vec<FilterDescriptor>,
}

impl CascadingFilterGraph {
    /// Build a graph, rejecting duplicate keys, unknown parents and cycles.
    pub fn new(descriptors: Vec<FilterDescriptor>) -> Result<Self> {
        let mut seen = HashSet::new();
        for d in &descriptors {
            if !seen.insert(d.key.as_str()) {
                return Err(DeskError::Schema(format!("duplicate filter key '{}'", d.key)));
            }
        }
        for d in &descriptors {
            for parent in &d.parents {
                if !seen.contains(parent.as_str()) {
                    return Err(DeskError::Schema(format!(
                        "filter '{}' depends on unknown filter '{}'",
                        d.key, parent
                    )));
                }
            }
        }

        let graph = Self { descriptors };
        for d in &graph.descriptors {
            if graph.ancestors(&d.key).contains(&d.key.as_str()) {
                return Err(DeskError::Schema(format!(
                    "filter '{}' depends on itself",
                    d.key
                )));
            }
        }
        Ok(graph)
    }

    pub fn descriptors(&self) -> &[FilterDescriptor] {
        &self.descriptors
    }

    pub fn descriptor(&self, key: &str) -> Option<&FilterDescriptor> {
        self.descriptors.iter().find(|d| d.key == key)
    }

    fn require(&self, key: &str) -> Result<&FilterDescriptor> {
        self.descriptor(key)
            .ok_or_else(|| DeskError::UnknownFilter(key.to_string()))
    }

    /// Every key reachable through child links, in breadth-first order.
    pub fn descendants(&self, key: &str) -> Vec<&str> {
        self.walk(key, |d, current| d.parents.iter().any(|p| p == current))
    }

    /// Every key reachable through parent links, in breadth-first order.
    pub fn ancestors(&self, key: &str) -> Vec<&str> {
        let mut found: Vec<&str> = Vec::new();
        let mut queue: VecDeque<&str> = VecDeque::new();
        queue.push_back(key);
        while let Some(current) = queue.pop_front() {
            let Some(d) = self.descriptor(current) else {
                continue;
            };
            for parent in &d.parents {
                if !found.contains(&parent.as_str()) {
                    found.push(parent.as_str());
                    queue.push_back(parent.as_str());
                }
            }
        }
        found
    }

    fn walk<F>(&self, key: &str, is_next: F) -> Vec<&str>
    where
        F: Fn(&FilterDescriptor, &str) -> bool,
    {
        let mut found: Vec<&str> = Vec::new();
        let mut queue: VecDeque<&str> = VecDeque::new();
        queue.push_back(key);
        while let Some(current) = queue.pop_front() {
            for d in &self.descriptors {
                if is_next(d, current) && d.key != key && !found.contains(&d.key.as_str()) {
                    found.push(d.key.as_str());
                    queue.push_back(d.key.as_str());
                }
            }
        }
        found
    }

    /// Store a selection and clear every descendant selection.
    ///
    /// Returns the descendant keys that held a value and were cleared.
    pub fn set(
        &self,
        state: &mut FilterState,
        key: &str,
        value: FilterValue,
    ) -> Result<Vec<String>> {
        self.require(key)?;
        state.insert(key, value);

        let mut cleared = Vec::new();
        for child in self.descendants(key) {
            if state.clear_key(child) {
                cleared.push(child.to_string());
            }
        }
        if !cleared.is_empty() {
            debug!(filter = key, cleared = ?cleared, "cascading filter reset");
        }
        Ok(cleared)
    }

    /// True when the record passes every filter.
    pub fn matches<R: Record>(&self, record: &R, state: &FilterState) -> bool {
        super::predicate::matches(record, state, &self.descriptors)
    }

    /// Distinct values of `key`'s field among records admitted by its set ancestors.
    pub fn options<R: Record>(
        &self,
        entries: &[Entry<R>],
        state: &FilterState,
        key: &str,
    ) -> Result<Vec<String>> {
        let target = self.require(key)?;
        let ancestors: Vec<&FilterDescriptor> = self
            .ancestors(key)
            .into_iter()
            .filter_map(|k| self.descriptor(k))
            .collect();

        let mut options: Vec<String> = Vec::new();
        for entry in entries {
            let admitted = ancestors
                .iter()
                .all(|d| d.matches(&entry.record, state.get(&d.key)));
            if !admitted {
                continue;
            }
            if let Some(field) = entry.record.field(&target.field) {
                for value in field.values() {
                    if !value.is_empty() && !options.contains(value) {
                        options.push(value.clone());
                    }
                }
            }
        }
        Ok(options)
    }
}
