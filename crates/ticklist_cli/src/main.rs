//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `ticklist_core` linkage.
//! - Offer a line-driven board loop (`ticklist_cli repl`) for quick local
//!   sanity checks of the task-list semantics.

use std::io::{self, BufRead, Write};
use ticklist_core::{BoardSnapshot, InMemoryTaskStore, TaskBoard, TaskId};

fn main() {
    let mode = std::env::args().nth(1);
    match mode.as_deref() {
        Some("repl") => {
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            run_repl(&mut stdin.lock(), &mut stdout);
        }
        _ => {
            // Deterministic probe output to validate core crate wiring.
            println!("ticklist_core ping={}", ticklist_core::ping());
            println!("ticklist_core version={}", ticklist_core::core_version());
        }
    }
}

/// One parsed line of REPL input.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    /// Plain text: submit as a new task.
    Add(String),
    /// `/done <id>`: toggle completion.
    Toggle(TaskId),
    /// `/edit <id> <text>`: replace task text.
    Edit(TaskId, String),
    /// `/del <id>`: delete one task.
    Delete(TaskId),
    /// `/clear`: bulk-delete completed tasks.
    ClearCompleted,
    /// `/list`: print the board without changing it.
    List,
    /// `/quit`: leave the loop.
    Quit,
    /// Anything else starting with `/`.
    Unknown(String),
}

fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    if !line.starts_with('/') {
        return Some(Command::Add(line.to_string()));
    }

    let mut parts = line.splitn(3, ' ');
    let head = parts.next().unwrap_or_default();
    let command = match head {
        "/done" => parts
            .next()
            .and_then(parse_id)
            .map(Command::Toggle)
            .unwrap_or_else(|| Command::Unknown(line.to_string())),
        "/edit" => match (parts.next().and_then(parse_id), parts.next()) {
            (Some(id), Some(text)) if !text.trim().is_empty() => {
                Command::Edit(id, text.trim().to_string())
            }
            _ => Command::Unknown(line.to_string()),
        },
        "/del" => parts
            .next()
            .and_then(parse_id)
            .map(Command::Delete)
            .unwrap_or_else(|| Command::Unknown(line.to_string())),
        "/clear" => Command::ClearCompleted,
        "/list" => Command::List,
        "/quit" => Command::Quit,
        _ => Command::Unknown(line.to_string()),
    };
    Some(command)
}

fn parse_id(raw: &str) -> Option<TaskId> {
    raw.trim().parse().ok()
}

fn run_repl(input: &mut impl BufRead, output: &mut impl Write) {
    let mut board = TaskBoard::new(InMemoryTaskStore::new());
    let _ = writeln!(
        output,
        "ticklist {}: plain text adds a task; /done /edit /del /clear /list /quit",
        ticklist_core::core_version()
    );

    let mut line = String::new();
    loop {
        line.clear();
        match input.read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let Some(command) = parse_command(&line) else {
            continue;
        };

        let snapshot = match command {
            Command::Add(text) => board.submit(&text),
            Command::Toggle(id) => board.toggle(id),
            Command::Edit(id, text) => {
                board.begin_edit(id);
                board.set_edit_text(&text);
                board.commit_edit()
            }
            Command::Delete(id) => board.delete(id),
            Command::ClearCompleted => board.clear_completed(),
            Command::List => board.snapshot(),
            Command::Quit => break,
            Command::Unknown(raw) => {
                let _ = writeln!(output, "unrecognized command: {raw}");
                continue;
            }
        };
        render(&snapshot, output);
    }
}

fn render(snapshot: &BoardSnapshot, output: &mut impl Write) {
    if let Some(message) = &snapshot.error {
        let _ = writeln!(output, "! {message}");
    }
    if snapshot.tasks.is_empty() {
        let _ = writeln!(output, "(no tasks)");
        return;
    }
    for task in &snapshot.tasks {
        let mark = if task.completed { "x" } else { " " };
        let _ = writeln!(output, "[{mark}] {} {}", task.id, task.text);
    }
}
