//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.
//!
//! This is the single source of truth for how events modify state.
//!
//! Two rules keep the simulated delays honest:
//! - Completions commit state first and navigate second
//!   (commit-then-navigate is the only safe ordering).
//! - Navigating away cancels and clears the departing screen's pending
//!   tasks, and completions are double-gated (task id + active screen), so
//!   a late callback can never act against an inactive screen.

use std::time::Instant;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use vitrine_core::flow::{Route, Screen};

use crate::common::TaskKind;
use crate::effects::UiEffect;
use crate::events::{FlowUiEvent, UiEvent};
use crate::mutations::{ProfileMutation, StateMutation, ThemeMutation, ToastMutation};
use crate::state::AppState;
use crate::{setup, signup, store};

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            // Advance spinner animation and expire old toasts.
            app.spinner_frame = app.spinner_frame.wrapping_add(1);
            app.toasts.prune(Instant::now());
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::TaskStarted { kind, started } => {
            app.tasks.state_mut(kind).on_started(&started);
            vec![]
        }
        UiEvent::TaskCompleted { kind, completed } => {
            let ok = {
                let state = app.tasks.state_mut(kind);
                state.finish_if_active(completed.id)
            };
            if !ok {
                // Stale or cancelled task; drop the wrapped result.
                vec![]
            } else {
                update(app, *completed.result)
            }
        }
        UiEvent::Flow(flow_event) => handle_flow_event(app, flow_event),
    }
}

// ============================================================================
// Flow completions
// ============================================================================

fn handle_flow_event(app: &mut AppState, event: FlowUiEvent) -> Vec<UiEffect> {
    match event {
        FlowUiEvent::SignInCompleted { method } => {
            if app.screen() != Some(Screen::SignUp) {
                return vec![];
            }
            tracing::info!(method = method.label(), "sign-in complete");
            app.signup.pending = None;
            navigate(app, Screen::ProfileSetup)
        }
        FlowUiEvent::SignInCancelled => {
            app.signup.pending = None;
            vec![]
        }
        FlowUiEvent::ProfileSaveCompleted => {
            if app.screen() != Some(Screen::ProfileSetup) {
                return vec![];
            }
            tracing::info!("profile save complete");
            app.setup.saving = false;
            app.setup.notice = true;
            app.toasts.push_success("Profile saved successfully!");
            vec![UiEffect::StartSaveNotice {
                task: app.task_seq.next_id(),
            }]
        }
        FlowUiEvent::ProfileSaveCancelled => {
            app.setup.saving = false;
            vec![]
        }
        FlowUiEvent::NoticeElapsed => {
            if app.screen() != Some(Screen::ProfileSetup) {
                return vec![];
            }
            navigate(app, Screen::Store)
        }
        FlowUiEvent::NoticeCancelled => {
            app.setup.notice = false;
            vec![]
        }
    }
}

// ============================================================================
// Navigation
// ============================================================================

/// Switches screens: cancels the departing screen's pending delays, reverses
/// the store screen's accent mirror, then runs the target's entry hooks.
fn navigate(app: &mut AppState, to: Screen) -> Vec<UiEffect> {
    let effects = cancel_pending_tasks(app);
    if app.screen() == Some(Screen::Store) && to != Screen::Store {
        app.theme.restore_default();
    }
    tracing::debug!(to = to.route(), "navigate");
    app.enter_route(Route::Screen(to));
    effects
}

/// Cancels every pending simulated delay and clears its slot so a stale
/// completion fails the task-id gate.
fn cancel_pending_tasks(app: &mut AppState) -> Vec<UiEffect> {
    let mut effects = Vec::new();
    for &kind in TaskKind::all() {
        let state = app.tasks.state_mut(kind);
        if state.is_running() {
            effects.push(UiEffect::CancelTask {
                kind,
                token: state.cancel.clone(),
            });
            state.clear();
        }
    }
    effects
}

// ============================================================================
// StateMutation Dispatcher
// ============================================================================

fn apply_mutations(app: &mut AppState, mutations: Vec<StateMutation>) {
    for mutation in mutations {
        match mutation {
            StateMutation::Profile(ProfileMutation::Set(field, value)) => {
                app.profile.set(field, value);
            }
            StateMutation::Toast(ToastMutation::Error(text)) => app.toasts.push_error(text),
            StateMutation::Toast(ToastMutation::Success(text)) => app.toasts.push_success(text),
            StateMutation::Theme(ThemeMutation::Mirror(hex)) => app.theme.mirror(&hex),
        }
    }
}

// ============================================================================
// Terminal Event Handlers
// ============================================================================

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Paste(text) => {
            handle_paste(app, &text);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_paste(app: &mut AppState, text: &str) {
    match app.screen() {
        Some(Screen::SignUp) => {
            let mutations = signup::handle_paste(&mut app.signup, text);
            apply_mutations(app, mutations);
        }
        Some(Screen::ProfileSetup) => {
            let mutations = setup::handle_paste(&mut app.setup, text);
            apply_mutations(app, mutations);
        }
        Some(Screen::Store) => store::handle_paste(&mut app.store, text),
        None => {}
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    if matches!(key.kind, KeyEventKind::Release) {
        return vec![];
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl {
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => return vec![UiEffect::Quit],
            // Nav-bar arrows: purely positional, no validation.
            KeyCode::Left => {
                if let Some(prev) = app.screen().and_then(|s| s.previous()) {
                    return navigate(app, prev);
                }
                return vec![];
            }
            KeyCode::Right => {
                if let Some(next) = app.screen().and_then(|s| s.next()) {
                    return navigate(app, next);
                }
                return vec![];
            }
            _ => {}
        }
    }

    match app.screen() {
        Some(Screen::SignUp) => {
            let (effects, mutations) =
                signup::handle_key(&mut app.signup, &app.tasks, &mut app.task_seq, key);
            apply_mutations(app, mutations);
            effects
        }
        Some(Screen::ProfileSetup) => {
            let (effects, mutations) =
                setup::handle_key(&mut app.setup, &app.tasks, &mut app.task_seq, key);
            apply_mutations(app, mutations);
            effects
        }
        Some(Screen::Store) => {
            let (effects, mutations) = store::handle_key(&mut app.store, &app.profile, key);
            apply_mutations(app, mutations);
            effects
        }
        None => match key.code {
            KeyCode::Enter => navigate(app, Screen::SignUp),
            KeyCode::Char('q') => vec![UiEffect::Quit],
            _ => vec![],
        },
    }
}

#[cfg(test)]
mod tests {
    use vitrine_core::config::Config;
    use vitrine_core::profile::ProfileField;
    use vitrine_core::theme;

    use super::*;
    use crate::common::{TaskCompleted, TaskId, TaskStarted};
    use crate::events::SignInMethod;

    fn test_app(route: Route) -> AppState {
        AppState::new(Config::default(), route)
    }

    fn press(app: &mut AppState, code: KeyCode) -> Vec<UiEffect> {
        update(
            app,
            UiEvent::Terminal(Event::Key(KeyEvent::new(code, KeyModifiers::NONE))),
        )
    }

    fn press_ctrl(app: &mut AppState, code: KeyCode) -> Vec<UiEffect> {
        update(
            app,
            UiEvent::Terminal(Event::Key(KeyEvent::new(code, KeyModifiers::CONTROL))),
        )
    }

    fn type_str(app: &mut AppState, text: &str) {
        for ch in text.chars() {
            press(app, KeyCode::Char(ch));
        }
    }

    fn clear_field(app: &mut AppState, len: usize) {
        press(app, KeyCode::End);
        for _ in 0..len {
            press(app, KeyCode::Backspace);
        }
    }

    /// Drives a started/completed task lifecycle through the reducer.
    fn complete_task(app: &mut AppState, kind: TaskKind, id: TaskId, result: UiEvent) -> Vec<UiEffect> {
        update(
            app,
            UiEvent::TaskStarted {
                kind,
                started: TaskStarted { id, cancel: None },
            },
        );
        update(
            app,
            UiEvent::TaskCompleted {
                kind,
                completed: TaskCompleted {
                    id,
                    result: Box::new(result),
                },
            },
        )
    }

    fn start_sign_in_task(effects: &[UiEffect]) -> (TaskId, SignInMethod) {
        match effects
            .iter()
            .find(|e| matches!(e, UiEffect::StartSignIn { .. }))
        {
            Some(UiEffect::StartSignIn { task, method }) => (*task, *method),
            _ => panic!("expected StartSignIn effect"),
        }
    }

    #[test]
    fn empty_email_submit_is_a_no_op_with_one_error_toast() {
        let mut app = test_app(Route::Screen(Screen::SignUp));

        let effects = press(&mut app, KeyCode::Enter);

        assert!(effects.is_empty());
        assert_eq!(app.toasts.len(), 1);
        assert_eq!(app.profile.email, "");
        assert_eq!(app.screen(), Some(Screen::SignUp));
    }

    #[test]
    fn email_typing_writes_through_to_the_profile() {
        let mut app = test_app(Route::Screen(Screen::SignUp));

        type_str(&mut app, "ada@example.com");

        assert_eq!(app.profile.email, "ada@example.com");
        assert_eq!(app.signup.email.text(), "ada@example.com");
    }

    #[test]
    fn email_submit_starts_the_simulated_sign_in() {
        let mut app = test_app(Route::Screen(Screen::SignUp));
        type_str(&mut app, "ada@example.com");

        let effects = press(&mut app, KeyCode::Enter);

        let (_, method) = start_sign_in_task(&effects);
        assert_eq!(method, SignInMethod::Email);
        assert_eq!(app.signup.pending, Some(SignInMethod::Email));
        // Not navigated yet; that happens when the delay elapses.
        assert_eq!(app.screen(), Some(Screen::SignUp));
    }

    #[test]
    fn provider_sign_in_bypasses_the_email_check() {
        let mut app = test_app(Route::Screen(Screen::SignUp));

        // Tab to the GitHub button with the email still empty.
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        let effects = press(&mut app, KeyCode::Enter);

        let (_, method) = start_sign_in_task(&effects);
        assert_eq!(method, SignInMethod::GitHub);
        assert!(app.toasts.is_empty());
    }

    #[test]
    fn sign_in_completion_navigates_to_profile_setup() {
        let mut app = test_app(Route::Screen(Screen::SignUp));
        type_str(&mut app, "ada@example.com");
        let effects = press(&mut app, KeyCode::Enter);
        let (task, method) = start_sign_in_task(&effects);

        complete_task(
            &mut app,
            TaskKind::SignIn,
            task,
            UiEvent::Flow(FlowUiEvent::SignInCompleted { method }),
        );

        assert_eq!(app.screen(), Some(Screen::ProfileSetup));
        assert_eq!(app.profile.email, "ada@example.com");
    }

    #[test]
    fn stale_sign_in_completion_is_dropped_after_navigation() {
        let mut app = test_app(Route::Screen(Screen::SignUp));
        type_str(&mut app, "ada@example.com");
        let effects = press(&mut app, KeyCode::Enter);
        let (task, method) = start_sign_in_task(&effects);
        update(
            &mut app,
            UiEvent::TaskStarted {
                kind: TaskKind::SignIn,
                started: TaskStarted {
                    id: task,
                    cancel: None,
                },
            },
        );

        // User walks forward and back before the delay elapses.
        let nav_effects = press_ctrl(&mut app, KeyCode::Right);
        assert!(
            nav_effects
                .iter()
                .any(|e| matches!(e, UiEffect::CancelTask { kind: TaskKind::SignIn, .. })),
            "navigation must cancel the pending sign-in"
        );
        press_ctrl(&mut app, KeyCode::Left);
        assert_eq!(app.screen(), Some(Screen::SignUp));

        // The late completion arrives; it must not navigate.
        update(
            &mut app,
            UiEvent::TaskCompleted {
                kind: TaskKind::SignIn,
                completed: TaskCompleted {
                    id: task,
                    result: Box::new(UiEvent::Flow(FlowUiEvent::SignInCompleted { method })),
                },
            },
        );
        assert_eq!(app.screen(), Some(Screen::SignUp));
    }

    #[test]
    fn forward_navigation_is_positional_and_unvalidated() {
        let mut app = test_app(Route::Screen(Screen::SignUp));

        press_ctrl(&mut app, KeyCode::Right);
        assert_eq!(app.screen(), Some(Screen::ProfileSetup));

        // At the last screen the forward arrow is a no-op.
        press_ctrl(&mut app, KeyCode::Right);
        press_ctrl(&mut app, KeyCode::Right);
        assert_eq!(app.screen(), Some(Screen::Store));
    }

    #[test]
    fn empty_username_save_errors_and_stays() {
        let mut app = test_app(Route::Screen(Screen::ProfileSetup));
        let len = app.setup.username.text().chars().count();
        clear_field(&mut app, len);

        // Tab to Save (Username → Description → Palette → Save).
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        let effects = press(&mut app, KeyCode::Enter);

        assert!(effects.is_empty());
        assert_eq!(app.toasts.len(), 1);
        assert_eq!(app.screen(), Some(Screen::ProfileSetup));
        assert!(!app.setup.saving);
    }

    #[test]
    fn saving_ada_reaches_the_store_after_both_delays() {
        let mut app = test_app(Route::Screen(Screen::ProfileSetup));
        let len = app.setup.username.text().chars().count();
        clear_field(&mut app, len);
        type_str(&mut app, "Ada");
        assert_eq!(app.profile.username, "Ada");

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        let effects = press(&mut app, KeyCode::Enter);
        let task = match effects.first() {
            Some(UiEffect::StartProfileSave { task }) => *task,
            other => panic!("expected StartProfileSave, got {other:?}"),
        };
        assert!(app.setup.saving);

        let effects = complete_task(
            &mut app,
            TaskKind::ProfileSave,
            task,
            UiEvent::Flow(FlowUiEvent::ProfileSaveCompleted),
        );
        assert!(app.setup.notice);
        assert!(!app.setup.saving);
        assert_eq!(app.toasts.len(), 1);
        assert_eq!(app.screen(), Some(Screen::ProfileSetup));
        let notice_task = match effects.first() {
            Some(UiEffect::StartSaveNotice { task }) => *task,
            other => panic!("expected StartSaveNotice, got {other:?}"),
        };

        complete_task(
            &mut app,
            TaskKind::SaveNotice,
            notice_task,
            UiEvent::Flow(FlowUiEvent::NoticeElapsed),
        );
        assert_eq!(app.screen(), Some(Screen::Store));
        assert_eq!(app.profile.username, "Ada");
    }

    #[test]
    fn palette_pick_writes_the_store_and_mirrors_the_accent() {
        let mut app = test_app(Route::Screen(Screen::ProfileSetup));

        // Tab to the palette, move to the second swatch, apply.
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.profile.theme_color, theme::PALETTE[1].hex);
        assert_eq!(app.theme.accent_hex(), theme::PALETTE[1].hex);
    }

    #[test]
    fn customize_then_cancel_leaves_the_store_untouched() {
        let mut app = test_app(Route::Screen(Screen::Store));
        let before = app.profile.snapshot();

        press(&mut app, KeyCode::Char('c'));
        assert!(app.store.is_customizing());
        type_str(&mut app, "scratch edits");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "more scratch");
        press(&mut app, KeyCode::Esc);

        assert!(!app.store.is_customizing());
        assert_eq!(app.profile, before);
    }

    #[test]
    fn customize_then_save_commits_exactly_the_edited_values() {
        let mut app = test_app(Route::Screen(Screen::Store));
        let before = app.profile.snapshot();

        press(&mut app, KeyCode::Char('c'));
        // Replace the username.
        clear_field(&mut app, before.username.chars().count());
        type_str(&mut app, "Vera");
        // Skip description, replace the theme hex.
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        clear_field(&mut app, before.theme_color.chars().count());
        type_str(&mut app, "#10b981");
        // Banner is empty; type one.
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "ipfs://banner");
        // Save.
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);

        assert!(!app.store.is_customizing());
        assert_eq!(app.profile.username, "Vera");
        assert_eq!(app.profile.theme_color, "#10b981");
        assert_eq!(app.profile.banner_image, "ipfs://banner");
        assert_eq!(app.profile.description, before.description);
        assert_eq!(app.profile.email, before.email);
        assert_eq!(app.theme.accent_hex(), "#10b981");
    }

    #[test]
    fn edits_stay_invisible_until_committed() {
        let mut app = test_app(Route::Screen(Screen::Store));
        let before = app.profile.snapshot();

        press(&mut app, KeyCode::Char('c'));
        type_str(&mut app, "invisible");
        assert_eq!(app.profile, before, "staged edits must not leak");
    }

    #[test]
    fn store_mirrors_accent_on_entry_and_restores_on_exit() {
        let mut app = test_app(Route::Screen(Screen::SignUp));
        app.profile.set(ProfileField::ThemeColor, "#ec4899");

        press_ctrl(&mut app, KeyCode::Right);
        assert_eq!(app.theme.accent_hex(), theme::DEFAULT_ACCENT);

        press_ctrl(&mut app, KeyCode::Right);
        assert_eq!(app.screen(), Some(Screen::Store));
        assert_eq!(app.theme.accent_hex(), "#ec4899");

        press_ctrl(&mut app, KeyCode::Left);
        assert_eq!(app.theme.accent_hex(), theme::DEFAULT_ACCENT);
    }

    #[test]
    fn not_found_returns_to_sign_up_on_enter() {
        let mut app = test_app(Route::NotFound("/checkout".to_string()));
        assert_eq!(app.screen(), None);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen(), Some(Screen::SignUp));
    }

    #[test]
    fn ctrl_c_quits() {
        let mut app = test_app(Route::Screen(Screen::SignUp));
        let effects = press_ctrl(&mut app, KeyCode::Char('c'));
        assert!(matches!(effects.as_slice(), [UiEffect::Quit]));
    }
}
