//! Sign-up screen reducer.

use crossterm::event::{KeyCode, KeyEvent};
use vitrine_core::profile::ProfileField;

use super::state::{SignUpFocus, SignUpState};
use crate::common::{TaskSeq, Tasks};
use crate::effects::UiEffect;
use crate::events::SignInMethod;
use crate::mutations::{ProfileMutation, StateMutation, ToastMutation};

/// Handles a key press on the sign-up screen.
pub fn handle_key(
    state: &mut SignUpState,
    tasks: &Tasks,
    task_seq: &mut TaskSeq,
    key: KeyEvent,
) -> (Vec<UiEffect>, Vec<StateMutation>) {
    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            state.focus = state.focus.next();
            (vec![], vec![])
        }
        KeyCode::BackTab | KeyCode::Up => {
            state.focus = state.focus.previous();
            (vec![], vec![])
        }
        KeyCode::Enter => match state.focus {
            SignUpFocus::Email | SignUpFocus::Submit => submit_email(state, tasks, task_seq),
            SignUpFocus::Google => start_sign_in(state, tasks, task_seq, SignInMethod::Google),
            SignUpFocus::GitHub => start_sign_in(state, tasks, task_seq, SignInMethod::GitHub),
        },
        _ if state.focus == SignUpFocus::Email => {
            let changed = state.email.input(key);
            if changed {
                (
                    vec![],
                    vec![StateMutation::Profile(ProfileMutation::Set(
                        ProfileField::Email,
                        state.email.text().to_string(),
                    ))],
                )
            } else {
                (vec![], vec![])
            }
        }
        _ => (vec![], vec![]),
    }
}

/// Handles pasted text on the sign-up screen.
pub fn handle_paste(state: &mut SignUpState, text: &str) -> Vec<StateMutation> {
    if state.focus != SignUpFocus::Email {
        return vec![];
    }
    state.email.insert_str(text);
    vec![StateMutation::Profile(ProfileMutation::Set(
        ProfileField::Email,
        state.email.text().to_string(),
    ))]
}

/// Email submit: the one place the screen enforces anything (a non-empty
/// email). Failure is a toast and a no-op, never a store write.
fn submit_email(
    state: &mut SignUpState,
    tasks: &Tasks,
    task_seq: &mut TaskSeq,
) -> (Vec<UiEffect>, Vec<StateMutation>) {
    if state.email.is_empty() {
        return (
            vec![],
            vec![StateMutation::Toast(ToastMutation::Error(
                "Please enter an email address".to_string(),
            ))],
        );
    }
    start_sign_in(state, tasks, task_seq, SignInMethod::Email)
}

/// Provider buttons land here directly: the mock auth path skips the email
/// check entirely.
fn start_sign_in(
    state: &mut SignUpState,
    tasks: &Tasks,
    task_seq: &mut TaskSeq,
    method: SignInMethod,
) -> (Vec<UiEffect>, Vec<StateMutation>) {
    if tasks.sign_in.is_running() {
        return (vec![], vec![]);
    }
    tracing::info!(method = method.label(), "sign-in requested");
    state.pending = Some(method);
    (
        vec![UiEffect::StartSignIn {
            task: task_seq.next_id(),
            method,
        }],
        vec![],
    )
}
