//! Runtime execution modes.
//!
//! - `tui`: Full-screen interactive onboarding flow (optional feature)

#[cfg(feature = "tui")]
pub use vitrine_tui::run_onboarding;

#[cfg(not(feature = "tui"))]
pub async fn run_onboarding(
    _config: &vitrine_core::config::Config,
    _route: vitrine_core::flow::Route,
) -> anyhow::Result<()> {
    anyhow::bail!("TUI support is disabled in this build (feature \"tui\").");
}
