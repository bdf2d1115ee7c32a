//! Flow navigation bar.
//!
//! Mirrors the sequencer: a back arrow when a previous screen exists, a
//! forward arrow when a next one does. Purely positional: the bar never
//! inspects profile data, and hidden arrows make out-of-bounds transitions
//! a no-op.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::state::AppState;

/// Renders the navigation bar into a one-line area.
pub fn render(frame: &mut Frame, area: Rect, app: &AppState) {
    let Some(screen) = app.screen() else {
        // Not-found route sits outside the flow; no arrows.
        let line = Line::from(Span::styled(
            "vitrine",
            Style::default().fg(Color::DarkGray),
        ));
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(24),
            Constraint::Min(0),
            Constraint::Length(24),
        ])
        .split(area);

    if let Some(prev) = screen.previous() {
        let line = Line::from(vec![
            Span::styled("← ", Style::default().fg(app.theme.accent_color())),
            Span::styled(prev.title(), Style::default().fg(Color::DarkGray)),
            Span::styled("  ctrl+←", Style::default().fg(Color::DarkGray)),
        ]);
        frame.render_widget(Paragraph::new(line), chunks[0]);
    }

    let title = Line::from(vec![
        Span::styled(
            screen.title(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}/{}", screen.position() + 1, vitrine_core::flow::FLOW.len()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(title).alignment(Alignment::Center),
        chunks[1],
    );

    if let Some(next) = screen.next() {
        let line = Line::from(vec![
            Span::styled("ctrl+→  ", Style::default().fg(Color::DarkGray)),
            Span::styled(next.title(), Style::default().fg(Color::DarkGray)),
            Span::styled(" →", Style::default().fg(app.theme.accent_color())),
        ]);
        frame.render_widget(
            Paragraph::new(line).alignment(Alignment::Right),
            chunks[2],
        );
    }
}
