//! Core record types.
//!
//! Every managed list (colleges, students, questions, ...) is a collection of values
//! implementing [`Record`]. The store pairs each record with a [`RecordId`] assigned at
//! insertion, so edits and deletes always address the backing record and never a
//! position inside a filtered or paginated view.

use crate::validation::ValidationErrors;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable identity of a record inside a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for RecordId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

/// Runtime view of a single record field, as seen by filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// A scalar text field (e.g. a college name or a class).
    Text(String),
    /// A set-valued field (e.g. the chapters a question belongs to).
    List(Vec<String>),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldValue::List(values.into_iter().map(Into::into).collect())
    }

    /// The field's values as a slice; a `Text` is a one-element list.
    pub fn values(&self) -> &[String] {
        match self {
            FieldValue::Text(v) => std::slice::from_ref(v),
            FieldValue::List(v) => v,
        }
    }
}

/// A value stored in a collection.
///
/// `field` exposes named fields to the filter layer; returning `None` means the record
/// has no such field and it never matches a non-empty constraint on it.
pub trait Record: Clone + PartialEq + fmt::Debug + Serialize {
    fn field(&self, key: &str) -> Option<FieldValue>;

    /// Checks required fields and formats. Records without rules accept everything.
    fn validate(&self) -> ValidationErrors {
        ValidationErrors::default()
    }
}

/// Column layout of a record list: `(header, field key)` pairs in display order.
pub trait Tabular: Record {
    const COLUMNS: &'static [(&'static str, &'static str)];

    /// Cell text for each column; list fields are comma-joined.
    fn cells(&self) -> Vec<String> {
        Self::COLUMNS
            .iter()
            .map(|(_, key)| {
                self.field(key)
                    .map(|f| f.values().join(", "))
                    .unwrap_or_default()
            })
            .collect()
    }
}
