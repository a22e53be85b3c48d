//! Phase list rendering.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding},
    Frame,
};

use crate::app::App;
use crate::format::format_minutes;

use super::colors;

/// Draws every phase with its allocated time, highlighting the current one.
pub fn draw_phase_list(frame: &mut Frame, area: Rect, app: &App) {
    let countdown = &app.countdown;
    let current = countdown.phase_index();
    let catch_all = countdown.phases().len().saturating_sub(1);
    let finished = countdown.is_finished();

    let items: Vec<ListItem> = countdown
        .phases()
        .iter()
        .enumerate()
        .map(|(idx, phase)| {
            let is_current = idx == current && !finished;
            let is_done = idx < current || finished;

            let style = if is_current {
                Style::default()
                    .bg(colors::SELECTION)
                    .fg(colors::SELECTION_TEXT)
            } else if is_done {
                Style::default().fg(colors::MUTED)
            } else {
                Style::default()
            };

            let (marker, marker_color) = if is_done {
                ("✓", colors::SUCCESS)
            } else if is_current {
                ("▶", colors::WARNING)
            } else if idx == catch_all {
                ("◇", colors::ACCENT)
            } else {
                ("•", colors::PRIMARY)
            };

            let duration = format_minutes(countdown.schedule().get(idx));

            let name_line = Line::from(vec![
                Span::styled(format!("{:>2} ", idx + 1), Style::default().fg(colors::ACCENT)),
                Span::styled(marker, style.fg(marker_color)),
                Span::styled(" ", style),
                Span::styled(phase.name.clone(), style.add_modifier(Modifier::BOLD)),
                Span::styled("  ", style),
                Span::styled(
                    duration,
                    style.fg(if is_current {
                        colors::SELECTION_TEXT
                    } else {
                        colors::SECONDARY
                    }),
                ),
            ]);
            let description_line = Line::from(vec![
                Span::styled("     ", style),
                Span::styled(
                    phase.description.clone(),
                    style.fg(if is_current {
                        colors::SELECTION_TEXT
                    } else {
                        colors::MUTED
                    }),
                ),
            ]);

            ListItem::new(vec![name_line, description_line]).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors::BORDER))
            .border_set(symbols::border::ROUNDED)
            .title(Line::from(vec![
                Span::styled(" ", Style::default()),
                Span::styled(
                    format!("{}", countdown.phases().len()),
                    Style::default().fg(colors::SECONDARY).bold(),
                ),
                Span::styled(" phases ", Style::default().fg(Color::White)),
            ]))
            .padding(Padding::horizontal(1)),
    );

    frame.render_widget(list, area);
}
