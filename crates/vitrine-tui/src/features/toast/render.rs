use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use super::state::{ToastKind, ToastState};

/// Renders active toasts as a floating box in the bottom-right corner.
pub fn render_toasts(frame: &mut Frame, area: Rect, toasts: &ToastState) {
    if toasts.is_empty() {
        return;
    }

    let lines: Vec<Line> = toasts
        .iter()
        .map(|toast| {
            let (symbol, color) = match toast.kind {
                ToastKind::Error => ("✗ ", Color::Red),
                ToastKind::Success => ("✓ ", Color::Green),
            };
            Line::from(vec![
                Span::styled(symbol, Style::default().fg(color).add_modifier(Modifier::BOLD)),
                Span::raw(toast.text.clone()),
            ])
        })
        .collect();

    let content_width = toasts
        .iter()
        .map(|toast| toast.text.width() + 2)
        .max()
        .unwrap_or(0) as u16;
    let width = (content_width + 4).min(area.width);
    let height = (lines.len() as u16 + 2).min(area.height);

    let toast_area = Rect::new(
        area.x + area.width.saturating_sub(width + 1),
        area.y + area.height.saturating_sub(height + 1),
        width,
        height,
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));

    frame.render_widget(Clear, toast_area);
    frame.render_widget(Paragraph::new(lines).block(block), toast_area);
}
