//! Help overlay rendering.

use ratatui::{
    style::{Color, Style, Stylize},
    symbols,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::config::DurationRange;
use crate::constants::dialog;
use crate::format::hours_label;

use super::colors;
use super::utils::centered_rect;

/// Draws a help overlay popup.
pub fn draw_help_overlay(frame: &mut Frame, range: &DurationRange) {
    let area = centered_rect(dialog::HELP_WIDTH, dialog::HELP_HEIGHT, frame.area());

    frame.render_widget(Clear, area);

    let help = Paragraph::new(get_help_text(range))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::PRIMARY))
                .border_set(symbols::border::DOUBLE)
                .title(Line::from(vec![
                    Span::styled(" ", Style::default()),
                    Span::styled(" Help ", Style::default().fg(Color::White).bold()),
                    Span::styled("- Any key to close ", Style::default().fg(colors::MUTED)),
                ])),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(help, area);
}

fn section(title: &'static str) -> Line<'static> {
    let section_style = Style::default().fg(colors::PRIMARY).bold();
    Line::from(vec![
        Span::styled("  ◆", section_style),
        Span::styled(format!(" {title}"), section_style),
    ])
}

/// One key binding row. `keys` is padded so descriptions line up.
fn binding(keys: &'static str, desc: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled("    ", Style::default()),
        Span::styled(
            format!("{keys:<12}"),
            Style::default().fg(colors::KEY).bold(),
        ),
        Span::styled(desc, Style::default().fg(Color::White)),
    ])
}

fn get_help_text(range: &DurationRange) -> Text<'static> {
    let muted = Style::default().fg(colors::MUTED);

    Text::from(vec![
        Line::from(""),
        section("TIMER"),
        Line::from(""),
        binding("Space/Enter", "Start or stop the countdown"),
        binding("s", "Skip to the next phase"),
        binding("r", "Reset to the selected length"),
        Line::from(vec![Span::styled(
            "    Skipped time is added to the final phase.",
            muted,
        )]),
        Line::from(""),
        section("SESSION"),
        Line::from(""),
        binding("+ / → / l", "Longer session"),
        binding("- / ← / h", "Shorter session"),
        Line::from(vec![Span::styled(
            format!(
                "    From {} to {} in steps of {}, while stopped.",
                hours_label(range.min_hours),
                hours_label(range.max_hours),
                hours_label(range.step_hours),
            ),
            muted,
        )]),
        Line::from(""),
        section("PROMPT"),
        Line::from(""),
        binding("p", "Generate a branding prompt"),
        Line::from(vec![Span::styled(
            "    A local prompt is used when the service is unreachable.",
            muted,
        )]),
        Line::from(""),
        section("GENERAL"),
        Line::from(""),
        binding("? / F1", "Show this help"),
        binding("q / Ctrl+C", "Quit application"),
        Line::from(""),
    ])
}
