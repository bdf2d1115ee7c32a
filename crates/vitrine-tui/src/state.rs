//! Application state composition.
//!
//! This module defines the top-level state for the TUI:
//!
//! ```text
//! AppState
//! ├── route: Route               (active screen or not-found)
//! ├── profile: Profile           (the session profile store)
//! ├── theme: ThemeState          (global accent mirror)
//! ├── signup: SignUpState        (sign-up screen slice)
//! ├── setup: SetupState          (profile setup screen slice)
//! ├── store: StoreState          (storefront screen slice)
//! ├── toasts: ToastState         (transient notifications)
//! ├── task_seq: TaskSeq          (async task id generator)
//! └── tasks: Tasks               (task lifecycle state)
//! ```
//!
//! The profile is constructed here and handed to screens by reference;
//! there is no global. Screens mutate it only through reducer-applied
//! mutations, which keeps a single writer at a time per field.

use ratatui::style::Color;
use vitrine_core::config::Config;
use vitrine_core::flow::{Route, Screen};
use vitrine_core::profile::Profile;
use vitrine_core::theme;

use crate::common::{TaskSeq, Tasks};
use crate::setup::SetupState;
use crate::signup::SignUpState;
use crate::store::StoreState;
use crate::toast::ToastState;

/// Global accent mirror.
///
/// The presentation-layer analog of the original's `--primary` CSS custom
/// property: screens may mirror the profile's theme color into it, and the
/// store screen restores the default when it deactivates.
#[derive(Debug, Clone)]
pub struct ThemeState {
    accent: String,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self {
            accent: theme::DEFAULT_ACCENT.to_string(),
        }
    }
}

impl ThemeState {
    pub fn mirror(&mut self, hex: &str) {
        self.accent = hex.to_string();
    }

    pub fn restore_default(&mut self) {
        self.accent = theme::DEFAULT_ACCENT.to_string();
    }

    pub fn accent_hex(&self) -> &str {
        &self.accent
    }

    /// Accent as a ratatui color, falling back to the default when the
    /// mirrored value does not parse (the store never validates).
    pub fn accent_color(&self) -> Color {
        let (r, g, b) = theme::parse_hex(&self.accent)
            .or_else(|| theme::parse_hex(theme::DEFAULT_ACCENT))
            .unwrap_or((0x3b, 0x82, 0xf6));
        Color::Rgb(r, g, b)
    }
}

/// Combined application state for the TUI.
pub struct AppState {
    /// Active route (screen or not-found).
    pub route: Route,
    /// The session profile store.
    pub profile: Profile,
    /// Global accent mirror.
    pub theme: ThemeState,
    /// Sign-up screen state.
    pub signup: SignUpState,
    /// Profile setup screen state.
    pub setup: SetupState,
    /// Storefront screen state.
    pub store: StoreState,
    /// Transient notifications.
    pub toasts: ToastState,
    /// Task id sequence for simulated delays.
    pub task_seq: TaskSeq,
    /// Task lifecycle state for simulated delays.
    pub tasks: Tasks,
    /// Runtime configuration (timings).
    pub config: Config,
    /// Spinner animation frame counter.
    pub spinner_frame: usize,
    /// Flag indicating the app should quit.
    pub should_quit: bool,
}

impl AppState {
    /// Creates the state for a session starting at `route`.
    pub fn new(config: Config, route: Route) -> Self {
        let profile = Profile::default();
        let mut state = Self {
            route: Route::Screen(Screen::SignUp),
            signup: SignUpState::new(&profile),
            setup: SetupState::new(&profile),
            store: StoreState::default(),
            toasts: ToastState::default(),
            task_seq: TaskSeq::default(),
            tasks: Tasks::default(),
            theme: ThemeState::default(),
            profile,
            config,
            spinner_frame: 0,
            should_quit: false,
        };
        state.enter_route(route);
        state
    }

    /// Switches to a route, running the target screen's entry hooks.
    ///
    /// Entry hooks reseed the live-bound form fields from the profile and
    /// reset transient flags; the store screen additionally mirrors the
    /// profile accent.
    pub fn enter_route(&mut self, route: Route) {
        self.route = route;
        match self.route.screen() {
            Some(Screen::SignUp) => self.signup.on_enter(&self.profile),
            Some(Screen::ProfileSetup) => self.setup.on_enter(&self.profile),
            Some(Screen::Store) => {
                self.store.on_enter();
                self.theme.mirror(&self.profile.theme_color);
            }
            None => {}
        }
    }

    /// The active screen, if the route points at one.
    pub fn screen(&self) -> Option<Screen> {
        self.route.screen()
    }
}
