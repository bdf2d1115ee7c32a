//! Shared helpers for the TUI (tasks, text editing, text display).

pub mod form;
pub mod task;
pub mod text;
pub mod text_field;

pub use task::{TaskCompleted, TaskId, TaskKind, TaskSeq, TaskStarted, TaskState, Tasks};
pub use text_field::TextField;
