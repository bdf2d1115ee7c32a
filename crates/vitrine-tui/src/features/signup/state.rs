use vitrine_core::profile::Profile;

use crate::common::TextField;
use crate::events::SignInMethod;

/// Focusable elements on the sign-up screen, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignUpFocus {
    Email,
    Submit,
    Google,
    GitHub,
}

impl SignUpFocus {
    pub fn next(self) -> Self {
        match self {
            SignUpFocus::Email => SignUpFocus::Submit,
            SignUpFocus::Submit => SignUpFocus::Google,
            SignUpFocus::Google => SignUpFocus::GitHub,
            SignUpFocus::GitHub => SignUpFocus::Email,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            SignUpFocus::Email => SignUpFocus::GitHub,
            SignUpFocus::Submit => SignUpFocus::Email,
            SignUpFocus::Google => SignUpFocus::Submit,
            SignUpFocus::GitHub => SignUpFocus::Google,
        }
    }
}

/// Sign-up screen state.
///
/// The email field is live-bound to the profile store: every edit writes
/// through via a `ProfileMutation`.
#[derive(Debug, Clone)]
pub struct SignUpState {
    pub email: TextField,
    pub focus: SignUpFocus,
    /// Which sign-in is simulating latency, if any.
    pub pending: Option<SignInMethod>,
}

impl SignUpState {
    pub fn new(profile: &Profile) -> Self {
        Self {
            email: TextField::new(profile.email.clone()),
            focus: SignUpFocus::Email,
            pending: None,
        }
    }

    /// Entry hook: reseed the field from the store and reset transients.
    pub fn on_enter(&mut self, profile: &Profile) {
        self.email = TextField::new(profile.email.clone());
        self.focus = SignUpFocus::Email;
        self.pending = None;
    }
}
