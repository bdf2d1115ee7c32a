//! Screen flow sequencing and route resolution.
//!
//! The onboarding flow is a fixed, ordered list of three screens. The
//! sequencer is purely positional: it computes which previous/next
//! transitions exist for the active screen and never looks at profile
//! data. Validation, where it exists, happens in screen submit handlers
//! before a transition is requested.

/// The three onboarding screens, in flow order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    SignUp,
    ProfileSetup,
    Store,
}

/// Flow order. Static; never reordered at runtime.
pub const FLOW: [Screen; 3] = [Screen::SignUp, Screen::ProfileSetup, Screen::Store];

impl Screen {
    /// All screens in flow order.
    pub fn all() -> &'static [Screen] {
        &FLOW
    }

    /// Zero-based position in the flow.
    pub fn position(&self) -> usize {
        FLOW.iter()
            .position(|s| s == self)
            .expect("screen is part of the fixed flow")
    }

    /// Screen before this one, if any.
    pub fn previous(&self) -> Option<Screen> {
        let idx = self.position();
        if idx == 0 { None } else { Some(FLOW[idx - 1]) }
    }

    /// Screen after this one, if any.
    pub fn next(&self) -> Option<Screen> {
        FLOW.get(self.position() + 1).copied()
    }

    /// Route path for this screen.
    pub fn route(&self) -> &'static str {
        match self {
            Screen::SignUp => "/signup",
            Screen::ProfileSetup => "/profile-setup",
            Screen::Store => "/store",
        }
    }

    /// Human-readable title.
    pub fn title(&self) -> &'static str {
        match self {
            Screen::SignUp => "Sign up",
            Screen::ProfileSetup => "Profile setup",
            Screen::Store => "Store",
        }
    }
}

/// A resolved entry route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Screen(Screen),
    /// Catch-all for paths outside the flow. Carries the requested path
    /// for display.
    NotFound(String),
}

impl Route {
    /// The active screen, if this route points at one.
    pub fn screen(&self) -> Option<Screen> {
        match self {
            Route::Screen(screen) => Some(*screen),
            Route::NotFound(_) => None,
        }
    }
}

/// Resolves an entry path to a route.
///
/// The root path redirects to sign-up; the three flow routes map to their
/// screens; everything else falls through to `NotFound`.
pub fn resolve(path: &str) -> Route {
    let path = path.trim();
    if path.is_empty() || path == "/" {
        return Route::Screen(Screen::SignUp);
    }
    for screen in Screen::all() {
        if path == screen.route() {
            return Route::Screen(*screen);
        }
    }
    Route::NotFound(path.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_and_previous_are_inverse_in_the_interior() {
        let mid = Screen::ProfileSetup;
        assert_eq!(mid.previous().and_then(|s| s.next()), Some(mid));
        assert_eq!(mid.next().and_then(|s| s.previous()), Some(mid));
    }

    #[test]
    fn no_transition_at_the_ends() {
        assert_eq!(Screen::SignUp.previous(), None);
        assert_eq!(Screen::Store.next(), None);
    }

    #[test]
    fn flow_walks_forward_in_order() {
        assert_eq!(Screen::SignUp.next(), Some(Screen::ProfileSetup));
        assert_eq!(Screen::ProfileSetup.next(), Some(Screen::Store));
        assert_eq!(Screen::Store.previous(), Some(Screen::ProfileSetup));
    }

    #[test]
    fn root_redirects_to_signup() {
        assert_eq!(resolve("/"), Route::Screen(Screen::SignUp));
        assert_eq!(resolve(""), Route::Screen(Screen::SignUp));
    }

    #[test]
    fn known_routes_resolve_to_screens() {
        assert_eq!(resolve("/signup"), Route::Screen(Screen::SignUp));
        assert_eq!(resolve("/profile-setup"), Route::Screen(Screen::ProfileSetup));
        assert_eq!(resolve("/store"), Route::Screen(Screen::Store));
    }

    #[test]
    fn unknown_routes_fall_through_to_not_found() {
        assert_eq!(
            resolve("/checkout"),
            Route::NotFound("/checkout".to_string())
        );
        assert_eq!(resolve("store"), Route::NotFound("store".to_string()));
    }
}
