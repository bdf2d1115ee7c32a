use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use vitrine_core::theme;

use super::state::SetupFocus;
use crate::common::form::{button_line, field_line};
use crate::render::{SPINNER_FRAMES, centered};
use crate::state::AppState;

/// Renders the profile setup screen.
pub fn render(frame: &mut Frame, area: Rect, app: &AppState) {
    let state = &app.setup;
    let accent = app.theme.accent_color();

    let card_width = 56.min(area.width);
    let card_height = 18.min(area.height);
    let card = centered(area, card_width, card_height);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Set up your profile ");
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // banner strip
            Constraint::Length(3), // username
            Constraint::Length(3), // description
            Constraint::Length(1), // palette label
            Constraint::Length(1), // palette swatches
            Constraint::Length(1), // spacer / notice
            Constraint::Length(1), // save button
            Constraint::Min(0),
            Constraint::Length(1), // hints
        ])
        .split(inner);

    // Banner strip tinted with the selected accent, avatar placeholder on it.
    let banner = Paragraph::new(Line::from(Span::styled(
        "  ◉",
        Style::default().fg(accent),
    )))
    .style(Style::default().bg(Color::Black));
    frame.render_widget(banner, chunks[0]);

    render_input(
        frame,
        chunks[1],
        "Name",
        field_line(
            &state.username,
            "Enter your name",
            state.focus == SetupFocus::Username,
        ),
        state.focus == SetupFocus::Username,
        accent,
    );
    render_input(
        frame,
        chunks[2],
        "Description",
        field_line(
            &state.description,
            "Enter your profile description",
            state.focus == SetupFocus::Description,
        ),
        state.focus == SetupFocus::Description,
        accent,
    );

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Choose theme color",
            Style::default().fg(Color::Gray),
        ))),
        chunks[3],
    );

    let mut swatches: Vec<Span> = Vec::new();
    for (idx, color) in theme::PALETTE.iter().enumerate() {
        let (r, g, b) = theme::parse_hex(color.hex).unwrap_or((0, 0, 0));
        let mut style = Style::default().fg(Color::Rgb(r, g, b));
        if state.focus == SetupFocus::Palette && idx == state.palette_idx {
            style = style.add_modifier(Modifier::REVERSED);
        }
        let selected = app.profile.theme_color.eq_ignore_ascii_case(color.hex);
        swatches.push(Span::styled(if selected { " ◉ " } else { " ● " }, style));
    }
    frame.render_widget(Paragraph::new(Line::from(swatches)), chunks[4]);

    if state.notice {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "Profile saved successfully!",
                Style::default().fg(accent),
            )))
            .alignment(Alignment::Right),
            chunks[5],
        );
    }

    let save_label = if state.saving {
        format!(
            "{} Saving...",
            SPINNER_FRAMES[app.spinner_frame % SPINNER_FRAMES.len()]
        )
    } else {
        "Save Profile".to_string()
    };
    frame.render_widget(
        Paragraph::new(button_line(
            &save_label,
            state.focus == SetupFocus::Save,
            accent,
        ))
        .alignment(Alignment::Right),
        chunks[6],
    );

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "tab focus   ←/→ pick color   enter apply/save",
            Style::default().fg(Color::DarkGray),
        )))
        .alignment(Alignment::Center),
        chunks[8],
    );
}

fn render_input(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    line: Line<'static>,
    focused: bool,
    accent: Color,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {label} "))
        .border_style(if focused {
            Style::default().fg(accent)
        } else {
            Style::default().fg(Color::DarkGray)
        });
    frame.render_widget(Paragraph::new(line).block(block), area);
}
