//! # Storage Layer
//!
//! This module defines the storage abstraction for record collections. The
//! [`CollectionStore`] trait is the "ground truth" every screen filters and paginates over.
//!
//! ## Identity
//!
//! The store assigns a [`RecordId`] when a record is inserted. The id stays with the
//! record until it is removed; replacing a record keeps both its id and its position.
//! Views built on top of the store carry these ids, so a row clicked on page 3 of a
//! filtered list resolves to exactly one backing record.
//!
//! ## Ordering
//!
//! Entries are kept in insertion order. Filtering and pagination never reorder them.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: Vec-backed, session-scoped storage. Nothing is persisted.

use crate::error::Result;
use crate::model::{Record, RecordId};
use serde::Serialize;

pub mod memory;

/// A record paired with its store-assigned identity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry<R> {
    pub id: RecordId,
    pub record: R,
}

/// Abstract interface for an ordered record collection.
pub trait CollectionStore<R: Record> {
    /// Append a record and return its new identity
    fn insert(&mut self, record: R) -> RecordId;

    /// Get a record by id
    fn get(&self, id: &RecordId) -> Result<&R>;

    /// Replace the record at `id` in place, returning the previous value
    fn replace(&mut self, id: &RecordId, record: R) -> Result<R>;

    /// Remove a record, returning it
    fn remove(&mut self, id: &RecordId) -> Result<R>;

    /// All entries in insertion order
    fn entries(&self) -> &[Entry<R>];

    fn len(&self) -> usize {
        self.entries().len()
    }

    fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    fn contains(&self, id: &RecordId) -> bool {
        self.entries().iter().any(|e| &e.id == id)
    }

    /// 0-based position of `id` in insertion order
    fn position(&self, id: &RecordId) -> Option<usize> {
        self.entries().iter().position(|e| &e.id == id)
    }
}
