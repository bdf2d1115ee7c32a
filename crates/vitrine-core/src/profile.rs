//! The session profile store.
//!
//! A single `Profile` exists per session. It is created with defaults at
//! startup, handed by reference to whichever screen is active, and mutated
//! in place with last-write-wins semantics. The store is a passive
//! container: it performs no validation and has no failure modes. Callers
//! decide what (if anything) to enforce before writing.

/// Placeholder shown until the user writes their own description.
pub const DEFAULT_DESCRIPTION: &str = "Edit this profile description. En un país multicolor nació \
     una abeja bajo el sol. Y fue famosa en el lugar, por su alegría y su bondad.";

/// Username shown until the user picks one.
pub const DEFAULT_USERNAME: &str = "User Name";

/// The closed set of profile fields.
///
/// Writes go through this enum, so an unknown field is unrepresentable
/// rather than a runtime error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    Email,
    Username,
    Description,
    ThemeColor,
    BannerImage,
}

impl ProfileField {
    /// All fields, in display order.
    pub fn all() -> &'static [ProfileField] {
        &[
            ProfileField::Email,
            ProfileField::Username,
            ProfileField::Description,
            ProfileField::ThemeColor,
            ProfileField::BannerImage,
        ]
    }

    /// Stable name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            ProfileField::Email => "email",
            ProfileField::Username => "username",
            ProfileField::Description => "description",
            ProfileField::ThemeColor => "theme_color",
            ProfileField::BannerImage => "banner_image",
        }
    }
}

/// In-memory identity/profile record for the current session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    /// Sign-up email. Empty until entered; only checked for non-emptiness
    /// at submit time.
    pub email: String,
    /// Display name. Consumers split on whitespace for short forms.
    pub username: String,
    /// Free-text description. Consumers truncate for display.
    pub description: String,
    /// Hex accent color (`#rrggbb`). Consumed by the presentation layer.
    pub theme_color: String,
    /// Banner image reference. Empty means "no custom banner".
    pub banner_image: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            email: String::new(),
            username: DEFAULT_USERNAME.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            theme_color: crate::theme::DEFAULT_ACCENT.to_string(),
            banner_image: String::new(),
        }
    }
}

impl Profile {
    /// Reads one field.
    pub fn get(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Email => &self.email,
            ProfileField::Username => &self.username,
            ProfileField::Description => &self.description,
            ProfileField::ThemeColor => &self.theme_color,
            ProfileField::BannerImage => &self.banner_image,
        }
    }

    /// Overwrites one field unconditionally. Always succeeds.
    pub fn set(&mut self, field: ProfileField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ProfileField::Email => self.email = value,
            ProfileField::Username => self.username = value,
            ProfileField::Description => self.description = value,
            ProfileField::ThemeColor => self.theme_color = value,
            ProfileField::BannerImage => self.banner_image = value,
        }
    }

    /// Value snapshot of all fields.
    ///
    /// Used by the store screen's customize mode to stage edits against a
    /// scratch copy and to compare before/after on cancel.
    pub fn snapshot(&self) -> Profile {
        self.clone()
    }

    /// First whitespace-separated word of the username.
    ///
    /// The storefront header uses this for the shop handle.
    pub fn first_name(&self) -> &str {
        self.username
            .split_whitespace()
            .next()
            .unwrap_or(&self.username)
    }

    /// Description truncated to `max_chars` characters with a `...` tail.
    pub fn short_description(&self, max_chars: usize) -> String {
        if self.description.chars().count() <= max_chars {
            return self.description.clone();
        }
        let head: String = self.description.chars().take(max_chars).collect();
        format!("{head}...")
    }

    /// Whether a custom banner has been set.
    pub fn has_banner(&self) -> bool {
        !self.banner_image.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_session_start() {
        let profile = Profile::default();
        assert_eq!(profile.email, "");
        assert_eq!(profile.username, "User Name");
        assert_eq!(profile.theme_color, "#3b82f6");
        assert_eq!(profile.banner_image, "");
        assert!(profile.description.starts_with("Edit this profile"));
        assert!(!profile.has_banner());
    }

    #[test]
    fn set_then_get_is_last_write_wins() {
        let mut profile = Profile::default();
        for &field in ProfileField::all() {
            profile.set(field, "first");
            profile.set(field, "second");
            assert_eq!(profile.get(field), "second", "field {}", field.name());
        }
    }

    #[test]
    fn writes_do_not_touch_other_fields() {
        let mut profile = Profile::default();
        let before = profile.snapshot();
        profile.set(ProfileField::Username, "Ada Lovelace");
        assert_eq!(profile.email, before.email);
        assert_eq!(profile.description, before.description);
        assert_eq!(profile.theme_color, before.theme_color);
        assert_eq!(profile.banner_image, before.banner_image);
    }

    #[test]
    fn first_name_splits_on_whitespace() {
        let mut profile = Profile::default();
        assert_eq!(profile.first_name(), "User");
        profile.set(ProfileField::Username, "Ada Lovelace");
        assert_eq!(profile.first_name(), "Ada");
        profile.set(ProfileField::Username, "mononym");
        assert_eq!(profile.first_name(), "mononym");
    }

    #[test]
    fn short_description_truncates_with_ellipsis() {
        let mut profile = Profile::default();
        profile.set(ProfileField::Description, "abcdef");
        assert_eq!(profile.short_description(6), "abcdef");
        assert_eq!(profile.short_description(4), "abcd...");
    }

    #[test]
    fn snapshot_is_value_equal_and_independent() {
        let mut profile = Profile::default();
        let snap = profile.snapshot();
        assert_eq!(snap, profile);
        profile.set(ProfileField::Email, "ada@example.com");
        assert_ne!(snap, profile);
        assert_eq!(snap.email, "");
    }
}
