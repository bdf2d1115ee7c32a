use vitrine_core::profile::Profile;

use crate::common::TextField;

/// Focusable elements inside customize mode, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomizeFocus {
    Username,
    Description,
    ThemeHex,
    Banner,
    Save,
    Cancel,
}

impl CustomizeFocus {
    pub fn next(self) -> Self {
        match self {
            CustomizeFocus::Username => CustomizeFocus::Description,
            CustomizeFocus::Description => CustomizeFocus::ThemeHex,
            CustomizeFocus::ThemeHex => CustomizeFocus::Banner,
            CustomizeFocus::Banner => CustomizeFocus::Save,
            CustomizeFocus::Save => CustomizeFocus::Cancel,
            CustomizeFocus::Cancel => CustomizeFocus::Username,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            CustomizeFocus::Username => CustomizeFocus::Cancel,
            CustomizeFocus::Description => CustomizeFocus::Username,
            CustomizeFocus::ThemeHex => CustomizeFocus::Description,
            CustomizeFocus::Banner => CustomizeFocus::ThemeHex,
            CustomizeFocus::Save => CustomizeFocus::Banner,
            CustomizeFocus::Cancel => CustomizeFocus::Save,
        }
    }
}

/// The staged-edit transaction.
///
/// Fields are seeded from a snapshot of the profile when customize mode is
/// entered. Edits touch only these fields; other consumers of the store see
/// nothing until save commits them.
#[derive(Debug, Clone)]
pub struct CustomizeState {
    pub username: TextField,
    pub description: TextField,
    /// Free-form hex color (`#rrggbb`); committed as-is, rendering falls
    /// back to the default accent when unparsable.
    pub theme_hex: TextField,
    pub banner: TextField,
    pub focus: CustomizeFocus,
}

impl CustomizeState {
    pub fn from_snapshot(snapshot: &Profile) -> Self {
        Self {
            username: TextField::new(snapshot.username.clone()),
            description: TextField::new(snapshot.description.clone()),
            theme_hex: TextField::new(snapshot.theme_color.clone()),
            banner: TextField::new(snapshot.banner_image.clone()),
            focus: CustomizeFocus::Username,
        }
    }
}

/// Storefront screen state.
#[derive(Debug, Clone, Default)]
pub struct StoreState {
    /// Present while customize mode is active.
    pub customize: Option<CustomizeState>,
}

impl StoreState {
    /// Entry hook: the screen always starts in view mode.
    pub fn on_enter(&mut self) {
        self.customize = None;
    }

    pub fn is_customizing(&self) -> bool {
        self.customize.is_some()
    }
}
