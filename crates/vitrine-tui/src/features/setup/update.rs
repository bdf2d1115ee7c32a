//! Profile setup screen reducer.

use crossterm::event::{KeyCode, KeyEvent};
use vitrine_core::profile::ProfileField;
use vitrine_core::theme;

use super::state::{SetupFocus, SetupState};
use crate::common::{TaskSeq, Tasks};
use crate::effects::UiEffect;
use crate::mutations::{ProfileMutation, StateMutation, ThemeMutation, ToastMutation};

/// Handles a key press on the profile setup screen.
pub fn handle_key(
    state: &mut SetupState,
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
        KeyCode::Left if state.focus == SetupFocus::Palette => {
            state.palette_idx = state.palette_idx.saturating_sub(1);
            (vec![], vec![])
        }
        KeyCode::Right if state.focus == SetupFocus::Palette => {
            if state.palette_idx + 1 < theme::PALETTE.len() {
                state.palette_idx += 1;
            }
            (vec![], vec![])
        }
        KeyCode::Enter | KeyCode::Char(' ') if state.focus == SetupFocus::Palette => {
            // Picking a swatch writes the store and mirrors the accent
            // immediately, like the original's CSS-variable update.
            let hex = theme::PALETTE[state.palette_idx].hex.to_string();
            (
                vec![],
                vec![
                    StateMutation::Profile(ProfileMutation::Set(
                        ProfileField::ThemeColor,
                        hex.clone(),
                    )),
                    StateMutation::Theme(ThemeMutation::Mirror(hex)),
                ],
            )
        }
        KeyCode::Enter if state.focus == SetupFocus::Save => save(state, tasks, task_seq),
        KeyCode::Enter => {
            // Enter inside a text field advances focus rather than saving.
            state.focus = state.focus.next();
            (vec![], vec![])
        }
        _ if state.focus == SetupFocus::Username => {
            if state.username.input(key) {
                (
                    vec![],
                    vec![StateMutation::Profile(ProfileMutation::Set(
                        ProfileField::Username,
                        state.username.text().to_string(),
                    ))],
                )
            } else {
                (vec![], vec![])
            }
        }
        _ if state.focus == SetupFocus::Description => {
            if state.description.input(key) {
                (
                    vec![],
                    vec![StateMutation::Profile(ProfileMutation::Set(
                        ProfileField::Description,
                        state.description.text().to_string(),
                    ))],
                )
            } else {
                (vec![], vec![])
            }
        }
        _ => (vec![], vec![]),
    }
}

/// Handles pasted text on the profile setup screen.
pub fn handle_paste(state: &mut SetupState, text: &str) -> Vec<StateMutation> {
    match state.focus {
        SetupFocus::Username => {
            state.username.insert_str(text);
            vec![StateMutation::Profile(ProfileMutation::Set(
                ProfileField::Username,
                state.username.text().to_string(),
            ))]
        }
        SetupFocus::Description => {
            state.description.insert_str(text);
            vec![StateMutation::Profile(ProfileMutation::Set(
                ProfileField::Description,
                state.description.text().to_string(),
            ))]
        }
        SetupFocus::Palette | SetupFocus::Save => vec![],
    }
}

/// Save: requires a non-whitespace username, then starts the simulated
/// save delay. Disabled while saving or while the success notice shows.
fn save(
    state: &mut SetupState,
    tasks: &Tasks,
    task_seq: &mut TaskSeq,
) -> (Vec<UiEffect>, Vec<StateMutation>) {
    if state.saving || state.notice || tasks.profile_save.is_running() {
        return (vec![], vec![]);
    }
    if state.username.text().trim().is_empty() {
        return (
            vec![],
            vec![StateMutation::Toast(ToastMutation::Error(
                "Please enter a username".to_string(),
            ))],
        );
    }
    tracing::info!("profile save requested");
    state.saving = true;
    (
        vec![UiEffect::StartProfileSave {
            task: task_seq.next_id(),
        }],
        vec![],
    )
}
