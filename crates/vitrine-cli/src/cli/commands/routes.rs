//! `vitrine routes` subcommand.

use anyhow::Result;
use vitrine_core::flow::Screen;

/// Lists the flow routes in order.
pub fn list() -> Result<()> {
    for screen in Screen::all() {
        let arrow = if screen.next().is_some() { "→" } else { " " };
        println!(
            "{}/{}  {:16} {}  {}",
            screen.position() + 1,
            Screen::all().len(),
            screen.route(),
            arrow,
            screen.title()
        );
    }
    println!("/  redirects to /signup; anything else shows the not-found screen");
    Ok(())
}
