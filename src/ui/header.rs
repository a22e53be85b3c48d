//! Header rendering: title, run state and session summary.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::countdown::CountdownStatus;

use super::colors;

/// Draws the header with the run-state badge and session details.
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let border_style = Style::default().fg(colors::BORDER);
    let dim_style = Style::default().fg(Color::Rgb(55, 65, 81));
    let muted_style = Style::default().fg(colors::MUTED);

    let (badge, badge_style) = match app.countdown.status() {
        CountdownStatus::Running => (
            "RUNNING",
            Style::default()
                .fg(colors::SECONDARY)
                .add_modifier(Modifier::SLOW_BLINK),
        ),
        CountdownStatus::Paused => ("PAUSED", Style::default().fg(colors::WARNING)),
        CountdownStatus::Finished => ("DONE", Style::default().fg(colors::SUCCESS)),
    };

    let line0 = Line::from(vec![
        Span::styled("┏━━", Style::default().fg(colors::ACCENT)),
        Span::styled("━━━━━━━━━━━━━━━━━━━━━━━━", border_style),
        Span::styled("░▒▓", dim_style),
        Span::styled("┃", border_style),
        Span::styled(" ◈ ", badge_style),
        Span::styled(badge, badge_style.bold()),
        Span::styled(" ┃", border_style),
        Span::styled("▓▒░", dim_style),
    ]);

    let line1 = Line::from(vec![
        Span::styled("┃", Style::default().fg(colors::ACCENT)),
        Span::styled("  ◆ ", Style::default().fg(colors::ACCENT)),
        Span::styled("PHASE", Style::default().fg(colors::PRIMARY).bold()),
        Span::styled("::", muted_style),
        Span::styled("TIMER", Style::default().fg(colors::KEY).bold()),
        Span::styled(format!("  v{}", env!("CARGO_PKG_VERSION")), muted_style),
    ]);

    let mut details = vec![
        Span::styled("┃", Style::default().fg(colors::ACCENT)),
        Span::styled("  Session ", muted_style),
        Span::styled(
            app.selector.label(),
            Style::default().fg(colors::SECONDARY).bold(),
        ),
        Span::styled("  │  ", dim_style),
        Span::styled(
            format!("{} phases", app.countdown.phases().len()),
            Style::default().fg(Color::White),
        ),
    ];
    if let Some(ends_at) = app.ends_at() {
        details.push(Span::styled("  │  ", dim_style));
        details.push(Span::styled("ends ", muted_style));
        details.push(Span::styled(
            ends_at.format("%H:%M").to_string(),
            Style::default().fg(colors::PRIMARY).bold(),
        ));
    }
    let line2 = Line::from(details);

    let line3 = Line::from(vec![
        Span::styled("┗━━", Style::default().fg(colors::ACCENT)),
        Span::styled("━━━━━━━━━━━━━━━━━━━━━━━━", border_style),
        Span::styled("╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍", dim_style),
    ]);

    let header = Paragraph::new(vec![line0, line1, line2, line3]);
    frame.render_widget(header, area);
}
