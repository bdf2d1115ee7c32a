use vitrine_core::profile::Profile;
use vitrine_core::theme;

use crate::common::TextField;

/// Focusable elements on the profile setup screen, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupFocus {
    Username,
    Description,
    Palette,
    Save,
}

impl SetupFocus {
    pub fn next(self) -> Self {
        match self {
            SetupFocus::Username => SetupFocus::Description,
            SetupFocus::Description => SetupFocus::Palette,
            SetupFocus::Palette => SetupFocus::Save,
            SetupFocus::Save => SetupFocus::Username,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            SetupFocus::Username => SetupFocus::Save,
            SetupFocus::Description => SetupFocus::Username,
            SetupFocus::Palette => SetupFocus::Description,
            SetupFocus::Save => SetupFocus::Palette,
        }
    }
}

/// Profile setup screen state.
///
/// Username and description are live-bound to the profile store; the
/// palette selection applies on Enter/Space and mirrors the accent
/// immediately.
#[derive(Debug, Clone)]
pub struct SetupState {
    pub username: TextField,
    pub description: TextField,
    /// Highlighted palette swatch.
    pub palette_idx: usize,
    pub focus: SetupFocus,
    /// True while the simulated save delay runs.
    pub saving: bool,
    /// True while the success notice is showing (save disabled, transition
    /// pending).
    pub notice: bool,
}

impl SetupState {
    pub fn new(profile: &Profile) -> Self {
        Self {
            username: TextField::new(profile.username.clone()),
            description: TextField::new(profile.description.clone()),
            palette_idx: palette_position(&profile.theme_color),
            focus: SetupFocus::Username,
            saving: false,
            notice: false,
        }
    }

    /// Entry hook: reseed fields from the store and reset transients.
    pub fn on_enter(&mut self, profile: &Profile) {
        self.username = TextField::new(profile.username.clone());
        self.description = TextField::new(profile.description.clone());
        self.palette_idx = palette_position(&profile.theme_color);
        self.focus = SetupFocus::Username;
        self.saving = false;
        self.notice = false;
    }
}

/// Position of a color in the fixed palette, first swatch if absent.
fn palette_position(hex: &str) -> usize {
    theme::PALETTE
        .iter()
        .position(|color| color.hex.eq_ignore_ascii_case(hex))
        .unwrap_or(0)
}
