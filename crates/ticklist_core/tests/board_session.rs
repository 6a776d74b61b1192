use ticklist_core::{BoardSnapshot, InMemoryTaskStore, TaskBoard};

fn board() -> TaskBoard<InMemoryTaskStore> {
    TaskBoard::new(InMemoryTaskStore::new())
}

fn texts(snapshot: &BoardSnapshot) -> Vec<&str> {
    snapshot.tasks.iter().map(|t| t.text.as_str()).collect()
}

#[test]
fn create_toggle_clear_leaves_single_active_task() {
    let mut board = board();

    board.submit("A");
    let snapshot = board.submit("B");
    let id_a = snapshot.tasks[0].id;

    board.toggle(id_a);
    let snapshot = board.clear_completed();

    assert_eq!(texts(&snapshot), vec!["B"]);
    assert!(!snapshot.tasks[0].completed);
    assert!(snapshot.error.is_none());
}

#[test]
fn duplicate_submit_sets_error_and_next_submit_clears_it() {
    let mut board = board();

    board.submit("Buy milk");
    let rejected = board.submit("buy milk ");
    assert_eq!(rejected.tasks.len(), 1);
    let message = rejected.error.expect("duplicate should surface a message");
    assert!(message.contains("buy milk"));

    let accepted = board.submit("Buy bread");
    assert!(accepted.error.is_none());
    assert_eq!(accepted.tasks.len(), 2);
}

#[test]
fn blank_submit_changes_nothing_and_reports_nothing() {
    let mut board = board();
    board.submit("anchor");

    let snapshot = board.submit("   ");

    assert_eq!(snapshot.tasks.len(), 1);
    assert!(snapshot.error.is_none());
}

#[test]
fn begin_edit_seeds_buffer_and_replaces_prior_cursor() {
    let mut board = board();
    let snapshot = board.submit("first");
    let first = snapshot.tasks[0].id;
    let snapshot = board.submit("second");
    let second = snapshot.tasks[1].id;

    let snapshot = board.begin_edit(first);
    let cursor = snapshot.editing.expect("cursor should be open");
    assert_eq!(cursor.id, first);
    assert_eq!(cursor.buffer, "first");

    // Only one task can be in edit mode at a time.
    let snapshot = board.begin_edit(second);
    let cursor = snapshot.editing.expect("cursor should be open");
    assert_eq!(cursor.id, second);
    assert_eq!(cursor.buffer, "second");
}

#[test]
fn begin_edit_unknown_id_is_a_noop() {
    let mut board = board();
    board.submit("only");

    let snapshot = board.begin_edit(42);
    assert!(snapshot.editing.is_none());
}

#[test]
fn commit_edit_applies_buffer_and_clears_cursor() {
    let mut board = board();
    let snapshot = board.submit("draft");
    let id = snapshot.tasks[0].id;

    board.begin_edit(id);
    board.set_edit_text("  final text ");
    let snapshot = board.commit_edit();

    assert!(snapshot.editing.is_none());
    assert_eq!(texts(&snapshot), vec!["final text"]);
    assert_eq!(snapshot.tasks[0].id, id);
}

#[test]
fn commit_edit_with_blank_buffer_keeps_task_text() {
    let mut board = board();
    let snapshot = board.submit("keep me");
    let id = snapshot.tasks[0].id;

    board.begin_edit(id);
    board.set_edit_text("   ");
    let snapshot = board.commit_edit();

    assert!(snapshot.editing.is_none());
    assert_eq!(texts(&snapshot), vec!["keep me"]);
}

#[test]
fn cancel_edit_discards_buffer() {
    let mut board = board();
    let snapshot = board.submit("original");
    let id = snapshot.tasks[0].id;

    board.begin_edit(id);
    board.set_edit_text("scratch");
    let snapshot = board.cancel_edit();

    assert!(snapshot.editing.is_none());
    assert_eq!(texts(&snapshot), vec!["original"]);
}

#[test]
fn set_edit_text_without_cursor_is_a_noop() {
    let mut board = board();
    board.submit("task");

    let snapshot = board.set_edit_text("scratch");
    assert!(snapshot.editing.is_none());
}

#[test]
fn deleting_the_edited_task_drops_the_cursor() {
    let mut board = board();
    let snapshot = board.submit("doomed");
    let id = snapshot.tasks[0].id;

    board.begin_edit(id);
    let snapshot = board.delete(id);

    assert!(snapshot.tasks.is_empty());
    assert!(snapshot.editing.is_none());
}

#[test]
fn deleting_another_task_keeps_the_cursor() {
    let mut board = board();
    let snapshot = board.submit("edited");
    let edited = snapshot.tasks[0].id;
    let snapshot = board.submit("removed");
    let removed = snapshot.tasks[1].id;

    board.begin_edit(edited);
    let snapshot = board.delete(removed);

    let cursor = snapshot.editing.expect("cursor should survive");
    assert_eq!(cursor.id, edited);
}

#[test]
fn clear_completed_drops_cursor_when_its_task_is_removed() {
    let mut board = board();
    let snapshot = board.submit("done soon");
    let id = snapshot.tasks[0].id;

    board.toggle(id);
    board.begin_edit(id);
    let snapshot = board.clear_completed();

    assert!(snapshot.tasks.is_empty());
    assert!(snapshot.editing.is_none());
}

#[test]
fn has_completed_gates_the_bulk_delete_action() {
    let mut board = board();
    let snapshot = board.submit("a");
    assert!(!snapshot.has_completed);
    let id = snapshot.tasks[0].id;

    let snapshot = board.toggle(id);
    assert!(snapshot.has_completed);

    let snapshot = board.clear_completed();
    assert!(!snapshot.has_completed);
}

#[test]
fn snapshot_is_stable_between_operations() {
    let mut board = board();
    board.submit("a");
    board.submit("b");

    assert_eq!(board.snapshot(), board.snapshot());
}
