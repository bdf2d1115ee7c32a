//! Small form-rendering helpers shared by the screens.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::common::TextField;

/// Builds a one-line rendering of a text field, with a block cursor when
/// focused and a dim placeholder when empty.
pub fn field_line(field: &TextField, placeholder: &str, focused: bool) -> Line<'static> {
    if field.is_empty() && !focused {
        return Line::from(Span::styled(
            placeholder.to_string(),
            Style::default().fg(Color::DarkGray),
        ));
    }

    if !focused {
        return Line::from(Span::raw(field.text().to_string()));
    }

    // Split at the cursor and render the char under it reversed.
    let chars: Vec<char> = field.text().chars().collect();
    let cursor = field.cursor().min(chars.len());
    let before: String = chars[..cursor].iter().collect();
    let (under, after): (String, String) = if cursor < chars.len() {
        (
            chars[cursor].to_string(),
            chars[cursor + 1..].iter().collect(),
        )
    } else {
        (" ".to_string(), String::new())
    };

    Line::from(vec![
        Span::raw(before),
        Span::styled(under, Style::default().add_modifier(Modifier::REVERSED)),
        Span::raw(after),
    ])
}

/// Builds a button line, highlighted when focused.
pub fn button_line(label: &str, focused: bool, accent: Color) -> Line<'static> {
    let style = if focused {
        Style::default()
            .bg(accent)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    Line::from(Span::styled(format!("[ {label} ]"), style))
}
