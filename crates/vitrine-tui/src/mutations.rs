//! Cross-slice state mutations.
//!
//! Screen slices return these mutations to request changes outside their
//! own slice. The main reducer applies them in order.

use vitrine_core::profile::ProfileField;

/// Mutations for cross-slice state changes.
#[derive(Debug)]
pub enum StateMutation {
    Profile(ProfileMutation),
    Toast(ToastMutation),
    Theme(ThemeMutation),
}

/// Profile store writes requested by screens.
#[derive(Debug)]
pub enum ProfileMutation {
    /// Overwrite one field (last-write-wins; never fails).
    Set(ProfileField, String),
}

/// Transient notification requests.
#[derive(Debug)]
pub enum ToastMutation {
    Error(String),
    Success(String),
}

/// Global accent mirror requests (CSS-variable analog).
///
/// The reverse operation (restoring the default accent) is not a mutation:
/// it happens only when the store screen deactivates, so the reducer's
/// navigation path performs it directly.
#[derive(Debug)]
pub enum ThemeMutation {
    /// Mirror a hex color into the global accent.
    Mirror(String),
}
