//! Application-wide constants.
//!
//! Centralizes timing values and layout dimensions.

use std::time::Duration;

/// Event polling timeout - balances responsiveness with CPU usage.
pub const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Length of one countdown tick.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Upper bound on a single prompt service request.
pub const PROMPT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Layout dimensions for the main UI structure.
pub mod layout {
    /// Header height (title line, session info, bottom rule).
    pub const HEADER_HEIGHT: u16 = 4;
    /// Commands bar height.
    pub const COMMANDS_BAR_HEIGHT: u16 = 2;
    /// Status bar height.
    pub const STATUS_BAR_HEIGHT: u16 = 1;
    /// Countdown panel height: clocks, phase name and two gauges.
    pub const TIMER_PANEL_HEIGHT: u16 = 14;
    /// Share of the width given to the countdown and prompt column.
    pub const LEFT_COLUMN_PERCENT: u16 = 58;
}

/// Dialog dimensions (percentages of screen size).
pub mod dialog {
    /// Help overlay width percentage.
    pub const HELP_WIDTH: u16 = 60;
    /// Help overlay height percentage.
    pub const HELP_HEIGHT: u16 = 70;
}
