use ticklist_core::{Task, TaskValidationError};

#[test]
fn task_new_sets_defaults() {
    let task = Task::new(7, "hello");

    assert_eq!(task.id, 7);
    assert_eq!(task.text, "hello");
    assert!(!task.completed);
}

#[test]
fn toggle_flips_completion_both_ways() {
    let mut task = Task::new(1, "laundry");

    task.toggle();
    assert!(task.completed);

    task.toggle();
    assert!(!task.completed);
}

#[test]
fn rename_keeps_id_and_completion() {
    let mut task = Task::new(3, "draft");
    task.toggle();

    task.rename("final");

    assert_eq!(task.id, 3);
    assert_eq!(task.text, "final");
    assert!(task.completed);
}

#[test]
fn validate_rejects_empty_and_whitespace_text() {
    let empty = Task::new(1, "");
    assert_eq!(empty.validate(), Err(TaskValidationError::EmptyText));

    let blank = Task::new(2, "   ");
    assert_eq!(blank.validate(), Err(TaskValidationError::EmptyText));

    let ok = Task::new(3, "real text");
    assert_eq!(ok.validate(), Ok(()));
}

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let mut task = Task::new(42, "Buy milk");
    task.toggle();

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], 42);
    assert_eq!(json["text"], "Buy milk");
    assert_eq!(json["completed"], true);

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}
