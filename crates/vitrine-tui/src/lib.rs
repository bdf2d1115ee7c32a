//! Full-screen TUI for the Vitrine onboarding flow.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod mutations;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, Write, stderr};

use anyhow::Result;
pub use features::{navbar, notfound, setup, signup, store, toast};
pub use runtime::TuiRuntime;
use vitrine_core::config::Config;
use vitrine_core::flow::Route;

/// Runs the onboarding flow starting at the given route.
pub async fn run_onboarding(config: &Config, route: Route) -> Result<()> {
    // The flow requires a terminal to render the TUI
    if !stderr().is_terminal() {
        anyhow::bail!(
            "Vitrine requires a terminal.\n\
             Use `vitrine routes` to inspect the flow non-interactively."
        );
    }

    // Print pre-TUI info to stderr (will be replaced by alternate screen)
    let mut err = stderr();
    writeln!(err, "Vitrine Onboarding")?;
    match &route {
        Route::Screen(screen) => writeln!(err, "Route: {}", screen.route())?,
        Route::NotFound(path) => writeln!(err, "Route: {path} (not found)")?,
    }
    err.flush()?;

    let mut runtime = TuiRuntime::new(config.clone(), route)?;
    runtime.run()?;

    // Print goodbye after TUI exits (terminal restored)
    writeln!(stderr(), "Goodbye!")?;

    Ok(())
}
