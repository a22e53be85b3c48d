//! Branding prompt panel.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

use crate::app::App;

use super::colors;

/// Draws the current prompt, or a hint when none has been requested yet.
pub fn draw_prompt_panel(frame: &mut Frame, area: Rect, app: &App) {
    let (trigger, trigger_style) = if app.prompt.pending {
        (
            " Generating... ",
            Style::default()
                .fg(colors::WARNING)
                .add_modifier(Modifier::SLOW_BLINK),
        )
    } else {
        (" p new prompt ", Style::default().fg(colors::MUTED))
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::BORDER))
        .border_set(symbols::border::ROUNDED)
        .title(Line::from(vec![
            Span::styled(" ", Style::default()),
            Span::styled("✎", Style::default().fg(colors::ACCENT)),
            Span::styled(" Prompt ", Style::default().fg(Color::White).bold()),
        ]))
        .title_bottom(Line::from(Span::styled(trigger, trigger_style)).right_aligned())
        .padding(Padding::uniform(1));

    let content = match &app.prompt.text {
        Some(text) => vec![Line::from(vec![
            Span::styled("Design ", Style::default().fg(colors::MUTED)),
            Span::styled(text.as_str(), Style::default().fg(Color::White).bold()),
        ])],
        None => vec![
            Line::from(Span::styled(
                "No prompt yet.",
                Style::default().fg(colors::MUTED),
            )),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(colors::MUTED)),
                Span::styled("p", Style::default().fg(colors::KEY).bold()),
                Span::styled(
                    " for a brand to design during this session.",
                    Style::default().fg(colors::MUTED),
                ),
            ]),
        ],
    };

    let paragraph = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}
