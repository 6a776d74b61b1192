//! Pending-edit cursor model.
//!
//! At most one task can be in edit mode at a time. The board keeps this as
//! an `Option<EditCursor>` rather than a per-task flag, so two tasks can
//! never be simultaneously editable.

use crate::model::task::TaskId;
use serde::{Deserialize, Serialize};

/// Transient marker of the single task, if any, currently being text-edited.
///
/// Holds a scratch buffer separate from the stored task text; the list is
/// only touched when the edit is committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditCursor {
    /// Id of the task under edit.
    pub id: TaskId,
    /// Scratch text shown in the edit field.
    pub buffer: String,
}

impl EditCursor {
    /// Opens a cursor seeded with the task's current text.
    pub fn new(id: TaskId, buffer: impl Into<String>) -> Self {
        Self {
            id,
            buffer: buffer.into(),
        }
    }
}
