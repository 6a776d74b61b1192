//! Task storage seam and in-memory implementation.
//!
//! # Responsibility
//! - Define the storage contract the service layer programs against.
//! - Keep list mechanics (id assignment, ordering, membership) behind one
//!   seam.
//!
//! # Invariants
//! - Write paths must call `Task::validate()` before mutating the list.
//! - Ids are assigned monotonically and never reused.
//! - No operation reorders surviving tasks.

mod memory;

pub use memory::InMemoryTaskStore;

use crate::model::task::{Task, TaskId, TaskValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage-layer error for task list operations.
///
/// `NotFound` is a mechanics-level signal; whether it is user-facing is the
/// service layer's call (it is not — unknown ids are absorbed as no-ops).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    Validation(TaskValidationError),
    NotFound(TaskId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "task not found: {id}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<TaskValidationError> for StoreError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Storage contract for the insertion-ordered task list.
///
/// Reads are infallible for in-process storage; writes return semantic
/// errors (`Validation`, `NotFound`) so callers can decide their policy.
pub trait TaskStore {
    /// Appends a new active task at the tail and returns its fresh id.
    fn append(&mut self, text: &str) -> StoreResult<TaskId>;

    /// Returns one task by id, if present.
    fn get(&self, id: TaskId) -> Option<Task>;

    /// Returns all tasks in insertion order.
    fn list(&self) -> Vec<Task>;

    /// Flips the completion flag; returns the new state.
    fn toggle(&mut self, id: TaskId) -> StoreResult<bool>;

    /// Replaces the task text. Performs no duplicate checking.
    fn replace_text(&mut self, id: TaskId, text: &str) -> StoreResult<()>;

    /// Removes one task, preserving the order of the rest.
    fn remove(&mut self, id: TaskId) -> StoreResult<()>;

    /// Removes every completed task and returns how many were dropped.
    fn remove_completed(&mut self) -> usize;

    /// First task whose text equals `probe` under case-insensitive
    /// comparison.
    fn find_text_ci(&self, probe: &str) -> Option<TaskId>;
}
