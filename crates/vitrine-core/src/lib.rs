//! Core domain types and ambient services for the Vitrine onboarding demo.
//!
//! This crate is UI-free: it holds the session profile store, the screen
//! flow sequencer, the theme palette, configuration, and logging setup.
//! Everything interactive lives in `vitrine-tui`.

pub mod config;
pub mod flow;
pub mod logging;
pub mod profile;
pub mod theme;
