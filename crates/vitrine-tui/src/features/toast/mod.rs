//! Transient notifications.
//!
//! Toasts are keyed by text content only (no structured codes). Each toast
//! carries an expiry instant; the reducer prunes expired toasts on Tick.

mod render;
mod state;

pub use render::render_toasts;
pub use state::{Toast, ToastKind, ToastState, TOAST_TTL};
