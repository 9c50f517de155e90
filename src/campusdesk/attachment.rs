//! Transient handles for uploaded files.
//!
//! Uploading a self-study PDF registers it and yields an [`AttachmentUrl`]. The handle is
//! shared by clones (a draft and the stored record may point at the same upload) and the
//! registry entry is released when the last clone is dropped: when a record is replaced
//! with one holding a new upload, when it is removed, or when the owning screen goes away.
//!
//! Handles are `Rc`-based and belong to one thread, like the screens that own them.

use crate::error::{DeskError, Result};
use crate::validation::{FieldError, RuleViolation, ValidationErrors};
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::{Rc, Weak};
use tracing::debug;
use uuid::Uuid;

const URL_PREFIX: &str = "blob:campusdesk/";
const ALLOWED_EXTENSION: &str = "pdf";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentInfo {
    pub file_name: String,
    pub size: usize,
    pub uploaded_at: DateTime<Utc>,
}

type Entries = Rc<RefCell<HashMap<Uuid, AttachmentInfo>>>;

/// Issues and tracks live attachment handles.
#[derive(Debug, Default, Clone)]
pub struct AttachmentRegistry {
    entries: Entries,
}

impl AttachmentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an uploaded file. Only PDFs are accepted.
    pub fn upload(&self, file_name: &str, contents: &[u8]) -> Result<AttachmentUrl> {
        let is_pdf = std::path::Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(ALLOWED_EXTENSION));
        if !is_pdf {
            let mut errors = ValidationErrors::default();
            errors.push(FieldError {
                field: "file".to_string(),
                label: "File".to_string(),
                violation: RuleViolation::NotAllowed {
                    allowed: vec![format!(".{ALLOWED_EXTENSION}")],
                },
            });
            return Err(DeskError::Validation(errors));
        }

        let id = Uuid::new_v4();
        self.entries.borrow_mut().insert(
            id,
            AttachmentInfo {
                file_name: file_name.to_string(),
                size: contents.len(),
                uploaded_at: Utc::now(),
            },
        );
        debug!(%id, file_name, size = contents.len(), "attachment registered");

        Ok(AttachmentUrl {
            lease: Rc::new(Lease {
                id,
                url: format!("{URL_PREFIX}{id}"),
                registry: Rc::downgrade(&self.entries),
            }),
        })
    }

    /// Number of uploads still referenced by some handle.
    pub fn live(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn info(&self, url: &AttachmentUrl) -> Option<AttachmentInfo> {
        self.entries.borrow().get(&url.lease.id).cloned()
    }
}

struct Lease {
    id: Uuid,
    url: String,
    registry: Weak<RefCell<HashMap<Uuid, AttachmentInfo>>>,
}

impl Drop for Lease {
    fn drop(&mut self) {
        if let Some(entries) = self.registry.upgrade() {
            entries.borrow_mut().remove(&self.id);
            debug!(id = %self.id, "attachment released");
        }
    }
}

/// A view/download link for an uploaded file.
#[derive(Clone)]
pub struct AttachmentUrl {
    lease: Rc<Lease>,
}

impl AttachmentUrl {
    pub fn as_str(&self) -> &str {
        &self.lease.url
    }
}

impl PartialEq for AttachmentUrl {
    fn eq(&self, other: &Self) -> bool {
        self.lease.id == other.lease.id
    }
}

impl Eq for AttachmentUrl {}

impl fmt::Debug for AttachmentUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AttachmentUrl").field(&self.lease.url).finish()
    }
}

impl fmt::Display for AttachmentUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lease.url)
    }
}

impl Serialize for AttachmentUrl {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.lease.url)
    }
}
