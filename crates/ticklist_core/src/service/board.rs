//! Board session facade.
//!
//! # Responsibility
//! - Hold the application-session state the presentation layer renders:
//!   the task list, the single pending-edit cursor and the last
//!   user-visible error message.
//! - Return a full snapshot after every operation so the caller can
//!   re-render without tracking deltas.
//!
//! # Invariants
//! - At most one task is in edit mode at a time.
//! - The error message is cleared before each submit attempt runs.
//! - Board operations never fail; rejections surface inside the snapshot.

use crate::model::edit_cursor::EditCursor;
use crate::model::task::{Task, TaskId};
use crate::service::task_service::{normalize_task_text, TaskService};
use crate::store::TaskStore;
use serde::{Deserialize, Serialize};

/// Full re-render payload returned after every board operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// All tasks in insertion order.
    pub tasks: Vec<Task>,
    /// The pending edit, if any.
    pub editing: Option<EditCursor>,
    /// Last rejection message, if any (currently only duplicate input).
    pub error: Option<String>,
    /// Whether the bulk-delete action has anything to act on.
    pub has_completed: bool,
}

/// Session state for one running task-list application.
pub struct TaskBoard<S: TaskStore> {
    service: TaskService<S>,
    cursor: Option<EditCursor>,
    last_error: Option<String>,
}

impl<S: TaskStore> TaskBoard<S> {
    /// Creates a board over the given store with no pending edit or error.
    pub fn new(store: S) -> Self {
        Self {
            service: TaskService::new(store),
            cursor: None,
            last_error: None,
        }
    }

    /// Submits raw input as a new task.
    ///
    /// Any prior error message is cleared before the input is checked;
    /// a duplicate rejection stores its displayable message.
    pub fn submit(&mut self, raw_text: &str) -> BoardSnapshot {
        self.last_error = None;
        if let Err(err) = self.service.create(raw_text) {
            self.last_error = Some(err.to_string());
        }
        self.snapshot()
    }

    /// Flips completion on the matching task; unknown ids are no-ops.
    pub fn toggle(&mut self, id: TaskId) -> BoardSnapshot {
        self.service.toggle(id);
        self.snapshot()
    }

    /// Deletes the matching task; unknown ids are no-ops.
    ///
    /// A pending edit of the deleted task is dropped with it.
    pub fn delete(&mut self, id: TaskId) -> BoardSnapshot {
        if self.service.delete(id) {
            if let Some(cursor) = &self.cursor {
                if cursor.id == id {
                    self.cursor = None;
                }
            }
        }
        self.snapshot()
    }

    /// Removes every completed task.
    ///
    /// A pending edit whose task was removed is dropped with it.
    pub fn clear_completed(&mut self) -> BoardSnapshot {
        self.service.clear_completed();
        if let Some(cursor) = &self.cursor {
            if self.service.get(cursor.id).is_none() {
                self.cursor = None;
            }
        }
        self.snapshot()
    }

    /// Enters edit mode for one task, seeding the buffer with its current
    /// text. Replaces any previous cursor; unknown ids are no-ops.
    pub fn begin_edit(&mut self, id: TaskId) -> BoardSnapshot {
        if let Some(task) = self.service.get(id) {
            self.cursor = Some(EditCursor::new(id, task.text));
        }
        self.snapshot()
    }

    /// Rewrites the pending edit buffer; a no-op without a cursor.
    pub fn set_edit_text(&mut self, text: &str) -> BoardSnapshot {
        if let Some(cursor) = &mut self.cursor {
            cursor.buffer = text.to_string();
        }
        self.snapshot()
    }

    /// Commits the pending edit and leaves edit mode.
    ///
    /// An empty-after-normalization buffer leaves the task unchanged
    /// (same silent policy as empty submit); either way the cursor is
    /// cleared.
    pub fn commit_edit(&mut self) -> BoardSnapshot {
        if let Some(cursor) = self.cursor.take() {
            let text = normalize_task_text(&cursor.buffer);
            if !text.is_empty() {
                self.service.edit(cursor.id, &text);
            }
        }
        self.snapshot()
    }

    /// Leaves edit mode without touching the task.
    pub fn cancel_edit(&mut self) -> BoardSnapshot {
        self.cursor = None;
        self.snapshot()
    }

    /// Current state for a full re-render.
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            tasks: self.service.tasks(),
            editing: self.cursor.clone(),
            error: self.last_error.clone(),
            has_completed: self.service.has_completed(),
        }
    }
}
