//! Add / edit-in-place / delete over a [`CollectionStore`].
//!
//! Editing works on a draft: `start_edit` clones the target record, callers mutate the
//! draft, and only `commit_edit` writes it back (to the remembered id, never to a view
//! position). Removing the record being edited drops the draft and returns to `Idle`.

use crate::error::{DeskError, Result};
use crate::model::{Record, RecordId};
use crate::store::memory::InMemoryStore;
use crate::store::CollectionStore;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq)]
pub enum EditState<R> {
    Idle,
    Editing { id: RecordId, draft: R },
}

impl<R> Default for EditState<R> {
    fn default() -> Self {
        EditState::Idle
    }
}

impl<R> EditState<R> {
    pub fn is_editing(&self) -> bool {
        matches!(self, EditState::Editing { .. })
    }

    pub fn id(&self) -> Option<RecordId> {
        match self {
            EditState::Idle => None,
            EditState::Editing { id, .. } => Some(*id),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EditableRecordSet<R, S = InMemoryStore<R>> {
    store: S,
    edit: EditState<R>,
}

impl<R: Record, S: CollectionStore<R>> EditableRecordSet<R, S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            edit: EditState::Idle,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn edit_state(&self) -> &EditState<R> {
        &self.edit
    }

    /// Validate and append. A rejected record leaves the store untouched.
    pub fn add(&mut self, record: R) -> Result<RecordId> {
        let errors = record.validate();
        if !errors.is_empty() {
            warn!(fields = ?errors.fields(), "add rejected");
            return Err(DeskError::Validation(errors));
        }
        Ok(self.store.insert(record))
    }

    /// Load a copy of the record into the draft. Any previous draft is discarded.
    pub fn start_edit(&mut self, id: &RecordId) -> Result<&R> {
        let draft = self.store.get(id)?.clone();
        if let EditState::Editing { id: previous, .. } = &self.edit {
            if previous != id {
                debug!(%previous, next = %id, "switching edit target");
            }
        }
        self.edit = EditState::Editing { id: *id, draft };
        match &self.edit {
            EditState::Editing { draft, .. } => Ok(draft),
            EditState::Idle => Err(DeskError::NotEditing),
        }
    }

    pub fn draft(&self) -> Option<&R> {
        match &self.edit {
            EditState::Editing { draft, .. } => Some(draft),
            EditState::Idle => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut R> {
        match &mut self.edit {
            EditState::Editing { draft, .. } => Some(draft),
            EditState::Idle => None,
        }
    }

    pub fn set_draft(&mut self, record: R) -> Result<()> {
        let draft = self.draft_mut().ok_or(DeskError::NotEditing)?;
        *draft = record;
        Ok(())
    }

    /// Write the draft back to its record and return to `Idle`.
    ///
    /// A draft that fails validation stays in place and nothing is written. Returns the
    /// edited id together with the replaced value.
    pub fn commit_edit(&mut self) -> Result<(RecordId, R)> {
        let (id, draft) = match std::mem::take(&mut self.edit) {
            EditState::Idle => return Err(DeskError::NotEditing),
            EditState::Editing { id, draft } => (id, draft),
        };

        let errors = draft.validate();
        if !errors.is_empty() {
            warn!(%id, fields = ?errors.fields(), "commit rejected");
            self.edit = EditState::Editing { id, draft };
            return Err(DeskError::Validation(errors));
        }

        let previous = self.store.replace(&id, draft)?;
        Ok((id, previous))
    }

    /// Drop the draft. Returns false when nothing was being edited.
    pub fn cancel_edit(&mut self) -> bool {
        let was_editing = self.edit.is_editing();
        self.edit = EditState::Idle;
        was_editing
    }

    /// Remove a record; editing it ends the edit.
    pub fn remove(&mut self, id: &RecordId) -> Result<R> {
        let removed = self.store.remove(id)?;
        if self.edit.id().as_ref() == Some(id) {
            debug!(%id, "edited record removed, leaving edit mode");
            self.edit = EditState::Idle;
        }
        Ok(removed)
    }
}
