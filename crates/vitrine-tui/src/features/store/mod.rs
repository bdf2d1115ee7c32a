//! Storefront screen slice.
//!
//! Read-only presentation of the profile by default. Customize mode stages
//! edits to a scratch copy and only commits on explicit save; cancel leaves
//! the profile store byte-for-byte unchanged.

mod render;
mod state;
mod update;

pub use render::render;
pub use state::{CustomizeFocus, CustomizeState, StoreState};
pub use update::{handle_key, handle_paste};
