//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent task spawning and cancellation only (no direct UI
//! mutations). This keeps the reducer pure: it only mutates state and
//! returns effects, never spawns tasks directly.
//!
//! ## Cancellation Effects
//!
//! Cancellation is initiated from the reducer via `UiEffect::CancelTask`.
//! The runtime executes these by calling `token.cancel()` on the provided
//! token. The reducer decides when to cancel, the runtime executes.

use tokio_util::sync::CancellationToken;

use crate::common::{TaskId, TaskKind};
use crate::events::SignInMethod;

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Start the simulated sign-in delay.
    StartSignIn { task: TaskId, method: SignInMethod },

    /// Start the simulated profile-save delay.
    StartProfileSave { task: TaskId },

    /// Start the success-notice dwell before moving to the store.
    StartSaveNotice { task: TaskId },

    /// Cancel an in-progress task.
    CancelTask {
        kind: TaskKind,
        token: Option<CancellationToken>,
    },
}
