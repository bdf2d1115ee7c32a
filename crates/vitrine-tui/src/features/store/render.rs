use chrono::Datelike;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use super::state::{CustomizeFocus, CustomizeState};
use crate::common::form::{button_line, field_line};
use crate::common::text::truncate_with_ellipsis;
use crate::render::centered;
use crate::state::AppState;

/// Renders the storefront screen (view or customize mode).
pub fn render(frame: &mut Frame, area: Rect, app: &AppState) {
    match &app.store.customize {
        None => render_view(frame, area, app),
        Some(customize) => render_customize(frame, area, app, customize),
    }
}

fn render_view(frame: &mut Frame, area: Rect, app: &AppState) {
    let accent = app.theme.accent_color();
    let profile = &app.profile;

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(28)])
        .split(area);

    // Main column: shop header, banner, profile card, product grid.
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // shop handle
            Constraint::Length(3), // banner
            Constraint::Length(4), // profile card
            Constraint::Length(1), // tabs
            Constraint::Min(5),    // products
            Constraint::Length(1), // hints
        ])
        .split(columns[0]);

    let handle = vec![
        Line::from(Span::styled(
            format!("CryptoStore_{}", profile.first_name()),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Last login: Just now",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(handle), main[0]);

    let banner_text = if profile.has_banner() {
        Line::from(Span::styled(
            truncate_with_ellipsis(&profile.banner_image, main[1].width.saturating_sub(4) as usize),
            Style::default().fg(Color::Gray),
        ))
    } else {
        Line::from(Span::styled("░░░░░░░░", Style::default().fg(accent)))
    };
    let banner = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(accent));
    frame.render_widget(
        Paragraph::new(banner_text)
            .alignment(Alignment::Center)
            .block(banner),
        main[1],
    );

    let year = chrono::Utc::now().year();
    let card = vec![
        Line::from(vec![
            Span::styled("◉ ", Style::default().fg(accent)),
            Span::styled(
                format!("{}'s NFT Emporium", profile.username),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            profile.short_description(60),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            format!("user.eth • Joined {year}"),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(card), main[2]);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Products", Style::default().add_modifier(Modifier::UNDERLINED)),
            Span::styled("  About  Blog  Reviews", Style::default().fg(Color::DarkGray)),
        ])),
        main[3],
    );

    let products = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(main[4]);
    for slot in products.iter() {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(accent));
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "╳",
                Style::default().fg(Color::DarkGray),
            )))
            .alignment(Alignment::Center)
            .block(block),
            *slot,
        );
    }

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "c customize   q quit",
            Style::default().fg(Color::DarkGray),
        ))),
        main[5],
    );

    render_side_panels(frame, columns[1], app);
}

fn render_side_panels(frame: &mut Frame, area: Rect, app: &AppState) {
    let accent = app.theme.accent_color();
    let panels = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(6),
            Constraint::Length(6),
            Constraint::Min(0),
        ])
        .split(area);

    let playing = vec![
        Line::from(Span::raw("Crypto Beats - NFT Anthem")),
        Line::from(Span::styled("▰▰▰▱▱▱▱▱▱▱", Style::default().fg(accent))),
        Line::from(Span::styled("1:24 / 3:45", Style::default().fg(Color::DarkGray))),
    ];
    frame.render_widget(
        Paragraph::new(playing).block(titled_block("Now Playing")),
        panels[0],
    );

    let friends: Vec<Line> = ["CryptoArtist", "NFTCollector", "PixelPunks"]
        .iter()
        .map(|friend| {
            Line::from(vec![
                Span::raw(format!("{friend} ")),
                Span::styled("●", Style::default().fg(accent)),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(friends).block(titled_block("Friends (3 online)")),
        panels[1],
    );

    let stats = vec![
        Line::from(Span::raw("Total Sales   0 ETH")),
        Line::from(Span::raw("Products      3")),
        Line::from(Span::raw("Followers     0")),
    ];
    frame.render_widget(
        Paragraph::new(stats).block(titled_block("Store Stats")),
        panels[2],
    );
}

fn titled_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!(" {title} "))
}

fn render_customize(frame: &mut Frame, area: Rect, app: &AppState, customize: &CustomizeState) {
    let accent = app.theme.accent_color();

    let card_width = 56.min(area.width);
    let card_height = 20.min(area.height);
    let card = centered(area, card_width, card_height);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(accent))
        .title(" Customize storefront ");
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // username
            Constraint::Length(3), // description
            Constraint::Length(3), // theme hex
            Constraint::Length(3), // banner
            Constraint::Length(1), // buttons
            Constraint::Min(0),
            Constraint::Length(1), // hints
        ])
        .split(inner);

    let fields: [(&str, &str, &crate::common::TextField, CustomizeFocus); 4] = [
        ("Name", "Enter your name", &customize.username, CustomizeFocus::Username),
        (
            "Description",
            "Describe your store",
            &customize.description,
            CustomizeFocus::Description,
        ),
        (
            "Theme color (hex)",
            "#3b82f6",
            &customize.theme_hex,
            CustomizeFocus::ThemeHex,
        ),
        (
            "Banner image",
            "URL or empty for none",
            &customize.banner,
            CustomizeFocus::Banner,
        ),
    ];
    for (idx, (label, placeholder, field, focus)) in fields.iter().enumerate() {
        let focused = customize.focus == *focus;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" {label} "))
            .border_style(if focused {
                Style::default().fg(accent)
            } else {
                Style::default().fg(Color::DarkGray)
            });
        frame.render_widget(
            Paragraph::new(field_line(field, placeholder, focused)).block(block),
            chunks[idx],
        );
    }

    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[4]);
    frame.render_widget(
        Paragraph::new(button_line(
            "Save",
            customize.focus == CustomizeFocus::Save,
            accent,
        ))
        .alignment(Alignment::Center),
        buttons[0],
    );
    frame.render_widget(
        Paragraph::new(button_line(
            "Cancel",
            customize.focus == CustomizeFocus::Cancel,
            accent,
        ))
        .alignment(Alignment::Center),
        buttons[1],
    );

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "tab focus   enter save   esc cancel",
            Style::default().fg(Color::DarkGray),
        )))
        .alignment(Alignment::Center),
        chunks[6],
    );
}
