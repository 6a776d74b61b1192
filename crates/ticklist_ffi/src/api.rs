//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level board operations to Dart via FRB.
//! - Own the single process-wide board instance for the app session.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Every mutator returns the refreshed full view for re-render.
//! - Board state is in-memory only and dies with the process.

use log::warn;
use std::sync::{Mutex, OnceLock};
use ticklist_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    BoardSnapshot, InMemoryTaskStore, TaskBoard,
};

static BOARD: OnceLock<Mutex<TaskBoard<InMemoryTaskStore>>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Reconfiguration attempts with different level or directory return
///   an error message.
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One task row as shown in the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskView {
    /// Stable task id.
    pub id: u64,
    /// Stored task text.
    pub text: String,
    /// Completion flag.
    pub completed: bool,
}

/// Full board view returned by every board call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    /// Tasks in insertion order.
    pub items: Vec<TaskView>,
    /// Id of the task currently in edit mode, if any.
    pub editing_id: Option<u64>,
    /// Scratch buffer of the pending edit, if any.
    pub edit_text: Option<String>,
    /// User-displayable rejection message, if any.
    pub error_message: Option<String>,
    /// Whether the bulk-delete button has anything to act on.
    pub has_completed: bool,
}

/// Returns the current board state without changing it.
///
/// # FFI contract
/// - Sync call, in-memory execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn board_snapshot() -> BoardView {
    with_board(|board| board.snapshot()).into()
}

/// Submits raw input as a new task.
///
/// Empty input is a silent no-op; duplicate input is rejected and the
/// message lands in `error_message` of the returned view.
///
/// # FFI contract
/// - Sync call, in-memory execution.
/// - Never panics; rejections surface inside the returned view.
#[flutter_rust_bridge::frb(sync)]
pub fn board_submit(text: String) -> BoardView {
    with_board(|board| board.submit(&text)).into()
}

/// Toggles completion of one task; unknown ids are no-ops.
///
/// # FFI contract
/// - Sync call, in-memory execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn board_toggle(id: u64) -> BoardView {
    with_board(|board| board.toggle(id)).into()
}

/// Deletes one task; unknown ids are no-ops.
///
/// # FFI contract
/// - Sync call, in-memory execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn board_delete(id: u64) -> BoardView {
    with_board(|board| board.delete(id)).into()
}

/// Deletes every completed task.
///
/// # FFI contract
/// - Sync call, in-memory execution.
/// - Never panics; idempotent.
#[flutter_rust_bridge::frb(sync)]
pub fn board_clear_completed() -> BoardView {
    with_board(|board| board.clear_completed()).into()
}

/// Enters edit mode for one task (double-tap in the UI).
///
/// # FFI contract
/// - Sync call, in-memory execution.
/// - Never panics; unknown ids are no-ops.
#[flutter_rust_bridge::frb(sync)]
pub fn board_begin_edit(id: u64) -> BoardView {
    with_board(|board| board.begin_edit(id)).into()
}

/// Rewrites the pending edit buffer as the user types.
///
/// # FFI contract
/// - Sync call, in-memory execution.
/// - Never panics; a no-op without an open edit.
#[flutter_rust_bridge::frb(sync)]
pub fn board_set_edit_text(text: String) -> BoardView {
    with_board(|board| board.set_edit_text(&text)).into()
}

/// Commits the pending edit (field commit in the UI).
///
/// # FFI contract
/// - Sync call, in-memory execution.
/// - Never panics; an empty buffer leaves the task unchanged.
#[flutter_rust_bridge::frb(sync)]
pub fn board_commit_edit() -> BoardView {
    with_board(|board| board.commit_edit()).into()
}

/// Leaves edit mode without touching the task.
///
/// # FFI contract
/// - Sync call, in-memory execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn board_cancel_edit() -> BoardView {
    with_board(|board| board.cancel_edit()).into()
}

fn with_board<T>(f: impl FnOnce(&mut TaskBoard<InMemoryTaskStore>) -> T) -> T {
    let board = BOARD.get_or_init(|| Mutex::new(TaskBoard::new(InMemoryTaskStore::new())));
    // A poisoned lock still holds a valid board; recover it instead of
    // letting the panic cross the FFI boundary.
    let mut guard = match board.lock() {
        Ok(guard) => guard,
        Err(poisoned) => {
            warn!("event=board_lock_recovered module=ffi status=warn");
            poisoned.into_inner()
        }
    };
    f(&mut guard)
}

impl From<BoardSnapshot> for BoardView {
    fn from(snapshot: BoardSnapshot) -> Self {
        let (editing_id, edit_text) = match snapshot.editing {
            Some(cursor) => (Some(cursor.id), Some(cursor.buffer)),
            None => (None, None),
        };
        Self {
            items: snapshot
                .tasks
                .into_iter()
                .map(|task| TaskView {
                    id: task.id,
                    text: task.text,
                    completed: task.completed,
                })
                .collect(),
            editing_id,
            edit_text,
            error_message: snapshot.error,
            has_completed: snapshot.has_completed,
        }
    }
}
