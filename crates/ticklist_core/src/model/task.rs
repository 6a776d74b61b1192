//! Task domain model.
//!
//! # Responsibility
//! - Define the single record the task list stores.
//! - Provide lifecycle helpers for completion toggling and renames.
//!
//! # Invariants
//! - `id` is assigned once by the store and never reused for another task.
//! - `text` is non-empty after trimming for every stored task.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier for a task.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
/// Ids are assigned by the store, strictly increasing in creation order.
pub type TaskId = u64;

/// Validation error for task records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Task text is empty after trimming.
    EmptyText,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "task text must not be empty"),
        }
    }
}

impl Error for TaskValidationError {}

/// A single user-entered task with identity, text and completion flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Store-assigned id; never reassigned after creation.
    pub id: TaskId,
    /// Normalized single-line task text.
    pub text: String,
    /// Completion flag; `false` for freshly created tasks.
    pub completed: bool,
}

impl Task {
    /// Creates an active task with the given id and text.
    ///
    /// Does not validate; store write paths call [`Task::validate`] before
    /// mutating the list.
    pub fn new(id: TaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }

    /// Flips the completion flag between active and completed.
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }

    /// Replaces the text in place, keeping id and completion flag.
    pub fn rename(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Checks the record invariants shared by all store write paths.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.text.trim().is_empty() {
            return Err(TaskValidationError::EmptyText);
        }
        Ok(())
    }
}
