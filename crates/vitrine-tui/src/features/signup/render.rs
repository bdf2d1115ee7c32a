use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use super::state::SignUpFocus;
use crate::common::form::{button_line, field_line};
use crate::render::{SPINNER_FRAMES, centered};
use crate::state::AppState;

/// Renders the sign-up screen.
pub fn render(frame: &mut Frame, area: Rect, app: &AppState) {
    let state = &app.signup;
    let accent = app.theme.accent_color();

    let card_width = 48.min(area.width);
    let card_height = 16.min(area.height);
    let card = centered(area, card_width, card_height);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // heading
            Constraint::Length(1), // subheading
            Constraint::Length(3), // email input
            Constraint::Length(1), // submit button
            Constraint::Length(1), // divider
            Constraint::Length(1), // google
            Constraint::Length(1), // github
            Constraint::Min(0),
            Constraint::Length(2), // terms + hints
        ])
        .split(card);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Create an account",
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Enter your email below to create your account",
            Style::default().fg(Color::DarkGray),
        )))
        .alignment(Alignment::Center),
        chunks[1],
    );

    let email_focused = state.focus == SignUpFocus::Email;
    let email_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if email_focused {
            Style::default().fg(accent)
        } else {
            Style::default().fg(Color::DarkGray)
        });
    frame.render_widget(
        Paragraph::new(field_line(&state.email, "name@example.com", email_focused))
            .block(email_block),
        chunks[2],
    );

    let submit_label = match state.pending {
        Some(method) => format!(
            "{} Processing ({})...",
            SPINNER_FRAMES[app.spinner_frame % SPINNER_FRAMES.len()],
            method.label()
        ),
        None => "Sign in with Email".to_string(),
    };
    frame.render_widget(
        Paragraph::new(button_line(
            &submit_label,
            state.focus == SignUpFocus::Submit,
            accent,
        ))
        .alignment(Alignment::Center),
        chunks[3],
    );

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "── or continue with ──",
            Style::default().fg(Color::DarkGray),
        )))
        .alignment(Alignment::Center),
        chunks[4],
    );
    frame.render_widget(
        Paragraph::new(button_line(
            "Google",
            state.focus == SignUpFocus::Google,
            accent,
        ))
        .alignment(Alignment::Center),
        chunks[5],
    );
    frame.render_widget(
        Paragraph::new(button_line(
            "GitHub",
            state.focus == SignUpFocus::GitHub,
            accent,
        ))
        .alignment(Alignment::Center),
        chunks[6],
    );

    let footer = vec![
        Line::from(Span::styled(
            "By clicking continue, you agree to our Terms of Service.",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "tab focus   enter submit   ctrl+c quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(
        Paragraph::new(footer).alignment(Alignment::Center),
        chunks[8],
    );
}
