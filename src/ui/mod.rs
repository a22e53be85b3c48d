//! UI rendering module.
//!
//! A single screen: header, countdown and prompt panels on the left, the
//! phase list on the right, then the commands and status bars.

mod colors;
mod header;
mod help;
mod phases;
mod prompt;
mod status;
mod timer;
mod utils;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::App;
use crate::constants::layout;

use header::draw_header;
use help::draw_help_overlay;
use phases::draw_phase_list;
use prompt::draw_prompt_panel;
use status::{draw_commands_bar, draw_status_bar};
use timer::draw_timer_panel;

/// Draws the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    // Header, content, commands bar, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(layout::HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(layout::COMMANDS_BAR_HEIGHT),
            Constraint::Length(layout::STATUS_BAR_HEIGHT),
        ])
        .split(frame.area());

    draw_header(frame, chunks[0], app);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(layout::LEFT_COLUMN_PERCENT),
            Constraint::Percentage(100 - layout::LEFT_COLUMN_PERCENT),
        ])
        .split(chunks[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(layout::TIMER_PANEL_HEIGHT),
            Constraint::Min(0),
        ])
        .split(columns[0]);

    draw_timer_panel(frame, left[0], app);
    draw_prompt_panel(frame, left[1], app);
    draw_phase_list(frame, columns[1], app);

    draw_commands_bar(frame, chunks[2], app);
    draw_status_bar(frame, chunks[3], app);

    if app.show_help {
        draw_help_overlay(frame, app.selector.range());
    }
}
