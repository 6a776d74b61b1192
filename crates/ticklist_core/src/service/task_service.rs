//! Task use-case service.
//!
//! # Responsibility
//! - Implement the create/toggle/edit/delete/clear-completed operations
//!   over the storage seam.
//! - Normalize raw user input before any storage write.
//! - Absorb unknown-id operations into silent no-ops.
//!
//! # Invariants
//! - Create is the only path that runs duplicate checking.
//! - Edit replaces text unconditionally; it never re-checks duplicates.
//! - No operation is fatal; failures are recoverable or absorbed.

use crate::model::task::{Task, TaskId};
use crate::store::{StoreError, TaskStore};
use log::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Service error for task use-cases.
#[derive(Debug)]
pub enum TaskServiceError {
    /// New task text case-insensitively matches an existing task.
    DuplicateTask {
        /// Normalized text of the rejected input.
        text: String,
    },
    /// Storage-layer failure.
    Store(StoreError),
}

impl Display for TaskServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateTask { text } => write!(f, "task \"{text}\" already exists"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for TaskServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::DuplicateTask { .. } => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for TaskServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Result of a create attempt that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// Task stored under the returned id.
    Created(TaskId),
    /// Input was empty after normalization; nothing changed.
    EmptyInput,
}

/// Use-case facade over a task store.
pub struct TaskService<S: TaskStore> {
    store: S,
}

impl<S: TaskStore> TaskService<S> {
    /// Creates a service using the provided store implementation.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Creates a task from raw user input.
    ///
    /// # Contract
    /// - Empty-after-normalization input is a silent no-op
    ///   (`CreateOutcome::EmptyInput`).
    /// - Case-insensitive text collisions are rejected with
    ///   `DuplicateTask`; the list is unchanged.
    /// - Accepted tasks start active and append at the tail.
    pub fn create(&mut self, raw_text: &str) -> Result<CreateOutcome, TaskServiceError> {
        let text = normalize_task_text(raw_text);
        if text.is_empty() {
            debug!("event=task_create module=core status=skipped reason=empty_input");
            return Ok(CreateOutcome::EmptyInput);
        }

        if let Some(existing) = self.store.find_text_ci(&text) {
            info!("event=task_create module=core status=rejected reason=duplicate existing_id={existing}");
            return Err(TaskServiceError::DuplicateTask { text });
        }

        let id = self.store.append(&text)?;
        info!("event=task_create module=core status=ok id={id}");
        Ok(CreateOutcome::Created(id))
    }

    /// Flips completion on the matching task only.
    ///
    /// Returns whether a task changed; unknown ids are silent no-ops.
    pub fn toggle(&mut self, id: TaskId) -> bool {
        match self.store.toggle(id) {
            Ok(completed) => {
                debug!("event=task_toggle module=core status=ok id={id} completed={completed}");
                true
            }
            Err(_) => false,
        }
    }

    /// Replaces the task text with the normalized input.
    ///
    /// Unknown ids and empty-after-normalization input are silent no-ops.
    /// Duplicate checking is deliberately not re-run here.
    pub fn edit(&mut self, id: TaskId, new_text: &str) -> bool {
        let text = normalize_task_text(new_text);
        if text.is_empty() {
            debug!("event=task_edit module=core status=skipped id={id} reason=empty_input");
            return false;
        }
        match self.store.replace_text(id, &text) {
            Ok(()) => {
                debug!("event=task_edit module=core status=ok id={id}");
                true
            }
            Err(_) => false,
        }
    }

    /// Removes the matching task, preserving the order of the rest.
    ///
    /// Idempotent: a second delete of the same id is a no-op.
    pub fn delete(&mut self, id: TaskId) -> bool {
        match self.store.remove(id) {
            Ok(()) => {
                debug!("event=task_delete module=core status=ok id={id}");
                true
            }
            Err(_) => false,
        }
    }

    /// Removes every completed task and returns how many were dropped.
    ///
    /// Idempotent: with no completed tasks this is a no-op returning 0.
    pub fn clear_completed(&mut self) -> usize {
        let removed = self.store.remove_completed();
        if removed > 0 {
            info!("event=task_clear_completed module=core status=ok removed={removed}");
        }
        removed
    }

    /// Returns one task by id, if present.
    pub fn get(&self, id: TaskId) -> Option<Task> {
        self.store.get(id)
    }

    /// Returns the full list in insertion order.
    pub fn tasks(&self) -> Vec<Task> {
        self.store.list()
    }

    /// Whether any task is currently completed.
    pub fn has_completed(&self) -> bool {
        self.store.list().iter().any(|task| task.completed)
    }
}

/// Normalizes raw task text into its stored form.
///
/// Rules:
/// - line breaks and other whitespace runs collapse to single spaces
///   (task text is a single-line field);
/// - leading/trailing whitespace is stripped.
pub fn normalize_task_text(raw: &str) -> String {
    WHITESPACE_RE.replace_all(raw, " ").trim().to_string()
}
