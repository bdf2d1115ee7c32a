//! Storefront screen reducer.

use crossterm::event::{KeyCode, KeyEvent};
use vitrine_core::profile::{Profile, ProfileField};

use super::state::{CustomizeFocus, CustomizeState, StoreState};
use crate::effects::UiEffect;
use crate::mutations::{ProfileMutation, StateMutation, ThemeMutation, ToastMutation};

/// Handles a key press on the storefront screen.
pub fn handle_key(
    state: &mut StoreState,
    profile: &Profile,
    key: KeyEvent,
) -> (Vec<UiEffect>, Vec<StateMutation>) {
    match &mut state.customize {
        None => handle_view_key(state, profile, key),
        Some(customize) => {
            let (done, effects, mutations) = handle_customize_key(customize, key);
            if done {
                state.customize = None;
            }
            (effects, mutations)
        }
    }
}

fn handle_view_key(
    state: &mut StoreState,
    profile: &Profile,
    key: KeyEvent,
) -> (Vec<UiEffect>, Vec<StateMutation>) {
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('e') => {
            // Stage against a snapshot so edits stay invisible until save.
            state.customize = Some(CustomizeState::from_snapshot(&profile.snapshot()));
            (vec![], vec![])
        }
        KeyCode::Char('q') => (vec![UiEffect::Quit], vec![]),
        _ => (vec![], vec![]),
    }
}

/// Returns (customize finished, effects, mutations).
fn handle_customize_key(
    customize: &mut CustomizeState,
    key: KeyEvent,
) -> (bool, Vec<UiEffect>, Vec<StateMutation>) {
    match key.code {
        KeyCode::Esc => {
            // Discard the scratch copy; the store stays untouched.
            tracing::debug!("customize cancelled");
            (true, vec![], vec![])
        }
        KeyCode::Tab | KeyCode::Down => {
            customize.focus = customize.focus.next();
            (false, vec![], vec![])
        }
        KeyCode::BackTab | KeyCode::Up => {
            customize.focus = customize.focus.previous();
            (false, vec![], vec![])
        }
        KeyCode::Enter => match customize.focus {
            CustomizeFocus::Save => {
                tracing::info!("customize committed");
                (true, vec![], commit_mutations(customize))
            }
            CustomizeFocus::Cancel => (true, vec![], vec![]),
            _ => {
                customize.focus = customize.focus.next();
                (false, vec![], vec![])
            }
        },
        _ => {
            // Edits land only in the scratch fields, no mutations.
            match customize.focus {
                CustomizeFocus::Username => {
                    customize.username.input(key);
                }
                CustomizeFocus::Description => {
                    customize.description.input(key);
                }
                CustomizeFocus::ThemeHex => {
                    customize.theme_hex.input(key);
                }
                CustomizeFocus::Banner => {
                    customize.banner.input(key);
                }
                CustomizeFocus::Save | CustomizeFocus::Cancel => {}
            }
            (false, vec![], vec![])
        }
    }
}

/// Handles pasted text inside customize mode.
pub fn handle_paste(state: &mut StoreState, text: &str) {
    let Some(customize) = &mut state.customize else {
        return;
    };
    match customize.focus {
        CustomizeFocus::Username => customize.username.insert_str(text),
        CustomizeFocus::Description => customize.description.insert_str(text),
        CustomizeFocus::ThemeHex => customize.theme_hex.insert_str(text),
        CustomizeFocus::Banner => customize.banner.insert_str(text),
        CustomizeFocus::Save | CustomizeFocus::Cancel => {}
    }
}

/// Commit: one independent set per staged field (no atomic multi-field
/// write exists or is needed), then re-mirror the accent since the store
/// screen is the active theme consumer.
fn commit_mutations(customize: &CustomizeState) -> Vec<StateMutation> {
    let theme_hex = customize.theme_hex.text().to_string();
    vec![
        StateMutation::Profile(ProfileMutation::Set(
            ProfileField::Username,
            customize.username.text().to_string(),
        )),
        StateMutation::Profile(ProfileMutation::Set(
            ProfileField::Description,
            customize.description.text().to_string(),
        )),
        StateMutation::Profile(ProfileMutation::Set(
            ProfileField::ThemeColor,
            theme_hex.clone(),
        )),
        StateMutation::Profile(ProfileMutation::Set(
            ProfileField::BannerImage,
            customize.banner.text().to_string(),
        )),
        StateMutation::Theme(ThemeMutation::Mirror(theme_hex)),
        StateMutation::Toast(ToastMutation::Success("Storefront updated".to_string())),
    ]
}
