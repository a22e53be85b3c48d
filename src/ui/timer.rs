//! Countdown panel: session clock, current phase and progress gauges.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Padding, Paragraph},
    Frame,
};

use crate::app::App;
use crate::format::format_clock;

use super::colors;

/// Draws the countdown card.
pub fn draw_timer_panel(frame: &mut Frame, area: Rect, app: &App) {
    let countdown = &app.countdown;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::PRIMARY))
        .border_set(symbols::border::ROUNDED)
        .title(Line::from(vec![
            Span::styled(" ", Style::default()),
            Span::styled("◷", Style::default().fg(colors::PRIMARY)),
            Span::styled(" Countdown ", Style::default().fg(Color::White).bold()),
        ]))
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Clocks and phase name
            Constraint::Length(3), // Phase gauge
            Constraint::Length(3), // Overall gauge
        ])
        .split(inner);

    let (phase_name, phase_description) = if countdown.is_finished() {
        ("Complete".to_string(), String::new())
    } else {
        countdown
            .current_phase()
            .map(|phase| (phase.name.clone(), phase.description.clone()))
            .unwrap_or_default()
    };

    let label_style = Style::default().fg(colors::MUTED);
    let content = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("Session left   ", label_style),
            Span::styled(
                format_clock(countdown.remaining_total()),
                Style::default().fg(Color::White).bold(),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Current phase  ", label_style),
            Span::styled(phase_name, Style::default().fg(colors::SECONDARY).bold()),
            Span::styled(
                format!("  {}/{}", countdown.phase_index() + 1, countdown.phases().len()),
                label_style,
            ),
        ]),
        Line::from(vec![
            Span::styled("               ", label_style),
            Span::styled(phase_description, label_style.italic()),
        ]),
        Line::from(vec![
            Span::styled("Phase left     ", label_style),
            Span::styled(
                format_clock(countdown.remaining_in_phase()),
                Style::default().fg(Color::White).bold(),
            ),
        ]),
    ];
    frame.render_widget(Paragraph::new(content), chunks[0]);

    draw_gauge(
        frame,
        chunks[1],
        " Phase ",
        countdown.phase_progress(),
        colors::SECONDARY,
    );
    draw_gauge(
        frame,
        chunks[2],
        " Overall ",
        countdown.overall_progress(),
        colors::PRIMARY,
    );
}

fn draw_gauge(frame: &mut Frame, area: Rect, title: &str, percent: f64, color: Color) {
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::BORDER))
                .border_set(symbols::border::ROUNDED)
                .title(Span::styled(title, Style::default().fg(colors::MUTED))),
        )
        .gauge_style(Style::default().fg(color).bg(Color::Rgb(30, 41, 59)))
        .ratio((percent / 100.0).clamp(0.0, 1.0))
        .label(format!("{percent:.0}%"));

    frame.render_widget(gauge, area);
}
