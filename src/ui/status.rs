//! Status bar and commands bar rendering.

use ratatui::{
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::countdown::CountdownStatus;

use super::colors;

/// Draws the commands bar showing the actions available right now.
pub fn draw_commands_bar(frame: &mut Frame, area: Rect, app: &App) {
    let commands = get_commands(app);

    let mut spans: Vec<Span> = vec![Span::styled(" ", Style::default())];

    for (i, (key, desc, enabled)) in commands.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(colors::BORDER)));
        }
        let (key_style, desc_style) = if *enabled {
            (
                Style::default().fg(colors::KEY).bold(),
                Style::default().fg(colors::MUTED),
            )
        } else {
            (
                Style::default().fg(colors::BORDER),
                Style::default().fg(colors::BORDER).italic(),
            )
        };
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::styled(" ", Style::default()));
        spans.push(Span::styled(*desc, desc_style));
    }

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(colors::BORDER));

    let commands_widget = Paragraph::new(Line::from(spans)).block(block);

    frame.render_widget(commands_widget, area);
}

/// Returns `(key, description, enabled)` for each command.
fn get_commands(app: &App) -> Vec<(&'static str, &'static str, bool)> {
    let status = app.countdown.status();
    let toggle = match status {
        CountdownStatus::Running => ("Space", "stop", true),
        CountdownStatus::Paused => ("Space", "start", true),
        CountdownStatus::Finished => ("Space", "start", false),
    };
    let adjustable = status != CountdownStatus::Running;
    let skippable = status != CountdownStatus::Finished
        && app.countdown.phase_index() + 1 < app.countdown.phases().len();
    let prompt = if app.prompt.pending {
        ("p", "generating...", false)
    } else {
        ("p", "prompt", true)
    };

    vec![
        toggle,
        ("r", "reset", true),
        ("s", "skip", skippable),
        ("←/→", "length", adjustable),
        prompt,
        ("?", "help", true),
        ("q", "quit", true),
    ]
}

/// Draws the status bar at the bottom (for messages).
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let (text, style) = if let Some(status) = &app.status {
        let style = if status.is_error {
            Style::default().fg(colors::ERROR)
        } else {
            Style::default().fg(colors::SUCCESS)
        };
        (format!(" {} ", status.text), style)
    } else {
        let idle = match app.countdown.status() {
            CountdownStatus::Paused => " Ready - Space to start",
            CountdownStatus::Running => " Running",
            CountdownStatus::Finished => " Session complete - r to start over",
        };
        (idle.to_string(), Style::default().fg(colors::MUTED))
    };

    let status = Paragraph::new(text).style(style);
    frame.render_widget(status, area);
}
