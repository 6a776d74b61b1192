//! Core domain logic for ticklist.
//! This crate is the single source of truth for task-list invariants.

pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::edit_cursor::EditCursor;
pub use model::task::{Task, TaskId, TaskValidationError};
pub use service::board::{BoardSnapshot, TaskBoard};
pub use service::task_service::{
    normalize_task_text, CreateOutcome, TaskService, TaskServiceError,
};
pub use store::{InMemoryTaskStore, StoreError, StoreResult, TaskStore};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
