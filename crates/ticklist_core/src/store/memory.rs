//! Vector-backed task store.
//!
//! The entire application state is one insertion-ordered vector plus the id
//! counter; it lives for the process lifetime and is discarded with it.

use super::{StoreError, StoreResult, TaskStore};
use crate::model::task::{Task, TaskId};

const FIRST_TASK_ID: TaskId = 1;

/// In-memory store owning the ordered task list and the id source.
#[derive(Debug)]
pub struct InMemoryTaskStore {
    tasks: Vec<Task>,
    next_id: TaskId,
}

impl InMemoryTaskStore {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: FIRST_TASK_ID,
        }
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }
}

impl Default for InMemoryTaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore for InMemoryTaskStore {
    fn append(&mut self, text: &str) -> StoreResult<TaskId> {
        let task = Task::new(self.next_id, text);
        task.validate()?;

        // The counter only advances on accepted writes; rejected input
        // never consumes an id.
        self.next_id += 1;
        let id = task.id;
        self.tasks.push(task);
        Ok(id)
    }

    fn get(&self, id: TaskId) -> Option<Task> {
        self.position(id).map(|index| self.tasks[index].clone())
    }

    fn list(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    fn toggle(&mut self, id: TaskId) -> StoreResult<bool> {
        let index = self.position(id).ok_or(StoreError::NotFound(id))?;
        let task = &mut self.tasks[index];
        task.toggle();
        Ok(task.completed)
    }

    fn replace_text(&mut self, id: TaskId, text: &str) -> StoreResult<()> {
        let index = self.position(id).ok_or(StoreError::NotFound(id))?;
        let mut updated = self.tasks[index].clone();
        updated.rename(text);
        updated.validate()?;
        self.tasks[index] = updated;
        Ok(())
    }

    fn remove(&mut self, id: TaskId) -> StoreResult<()> {
        let index = self.position(id).ok_or(StoreError::NotFound(id))?;
        self.tasks.remove(index);
        Ok(())
    }

    fn remove_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|task| !task.completed);
        before - self.tasks.len()
    }

    fn find_text_ci(&self, probe: &str) -> Option<TaskId> {
        let needle = probe.to_lowercase();
        self.tasks
            .iter()
            .find(|task| task.text.to_lowercase() == needle)
            .map(|task| task.id)
    }
}
