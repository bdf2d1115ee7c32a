//! UI event types.
//!
//! All external inputs (terminal, timer results) are converted to `UiEvent`
//! before being processed by the reducer.
//!
//! ## Task Lifecycle Events
//!
//! Simulated delays use a uniform lifecycle:
//! - The runtime emits `UiEvent::TaskStarted` once a task is actually spawned
//! - The runtime emits `UiEvent::TaskCompleted` with the result event when done
//! - The reducer is the only place that mutates `TaskState`
//!
//! ## Cancellation Convention
//!
//! Every delay task carries a `tokio_util::sync::CancellationToken`:
//! - `TaskStarted` carries the token for the reducer to store
//! - The runtime spawns tasks that `select!` on `token.cancelled()` vs the sleep
//! - Cancellation is initiated via `UiEffect::CancelTask` which calls `token.cancel()`
//! - Navigating away from a screen cancels and clears its pending tasks, so a
//!   late callback can never mutate state against an inactive screen

use crossterm::event::Event as CrosstermEvent;

use crate::common::{TaskCompleted, TaskKind, TaskStarted};

/// How the user asked to sign in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignInMethod {
    /// Email form submit; requires a non-empty email.
    Email,
    /// Mock provider button; bypasses the email check.
    Google,
    /// Mock provider button; bypasses the email check.
    GitHub,
}

impl SignInMethod {
    pub fn label(&self) -> &'static str {
        match self {
            SignInMethod::Email => "email",
            SignInMethod::Google => "Google",
            SignInMethod::GitHub => "GitHub",
        }
    }
}

/// Results of the simulated-delay tasks.
#[derive(Debug)]
pub enum FlowUiEvent {
    /// Sign-in delay elapsed; move on to profile setup.
    SignInCompleted { method: SignInMethod },

    /// Sign-in delay was cancelled (screen deactivated first).
    SignInCancelled,

    /// Profile save delay elapsed; show the success notice.
    ProfileSaveCompleted,

    /// Profile save delay was cancelled.
    ProfileSaveCancelled,

    /// Success-notice dwell elapsed; move on to the store.
    NoticeElapsed,

    /// Success-notice dwell was cancelled.
    NoticeCancelled,
}

/// Unified event enum for the TUI.
///
/// All inputs to the TUI are converted to this type before processing.
/// The reducer (`update`) pattern-matches on these events to update state.
#[derive(Debug)]
pub enum UiEvent {
    /// Timer tick (spinner animation, toast expiry).
    Tick,

    /// Terminal input event (key, paste, resize).
    Terminal(CrosstermEvent),

    /// Task lifecycle: runtime started a task (cancel token attached).
    TaskStarted {
        kind: TaskKind,
        started: TaskStarted,
    },

    /// Task lifecycle: runtime completed a task (wraps the result event).
    TaskCompleted {
        kind: TaskKind,
        completed: TaskCompleted<Box<UiEvent>>,
    },

    /// Simulated-delay results.
    Flow(FlowUiEvent),
}
