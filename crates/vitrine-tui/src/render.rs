//! Pure view/render functions for the TUI.
//!
//! This module contains the top-level render dispatch. Functions here:
//! - Take `&AppState` by immutable reference
//! - Draw to a ratatui Frame
//! - Never mutate state or return effects

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use vitrine_core::flow::{Route, Screen};

use crate::state::AppState;
use crate::{navbar, notfound, setup, signup, store, toast};

/// Height of the navigation bar.
const NAVBAR_HEIGHT: u16 = 1;

/// Spinner frames for the simulated-latency indicators.
pub const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(NAVBAR_HEIGHT), Constraint::Min(0)])
        .split(area);

    navbar::render(frame, chunks[0], app);

    let body = chunks[1];
    match &app.route {
        Route::Screen(Screen::SignUp) => signup::render(frame, body, app),
        Route::Screen(Screen::ProfileSetup) => setup::render(frame, body, app),
        Route::Screen(Screen::Store) => store::render(frame, body, app),
        Route::NotFound(path) => notfound::render(frame, body, path),
    }

    // Toasts float over whatever screen is active.
    toast::render_toasts(frame, body, &app.toasts);
}

/// Centers a fixed-size box inside an area.
pub(crate) fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
