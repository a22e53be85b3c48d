//! Event handling module.
//!
//! Keyboard input comes from crossterm and is mapped to [`Action`]s.
//! Background work (the tick source, prompt requests) reports back through
//! [`AppEvent`]s on a tokio channel.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::constants::POLL_TIMEOUT;

/// Represents the different actions a user can take in the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Quit the application
    Quit,
    /// Start the countdown, or stop it if running
    ToggleRunning,
    /// Rebuild the schedule at the selected length and stop
    Reset,
    /// Abandon the current phase
    Skip,
    /// Lengthen the session by one step
    Longer,
    /// Shorten the session by one step
    Shorter,
    /// Ask for a new branding prompt
    GeneratePrompt,
    /// Show help
    Help,
    /// Close the help overlay
    Back,
}

/// Messages sent to the main loop by background tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// One interval elapsed on the tick source with this generation.
    Tick { generation: u64 },
    /// A prompt request completed (with service text or a fallback).
    PromptReady(String),
}

/// Handles terminal events and converts them to application actions.
pub struct EventHandler {
    /// Timeout for polling events
    poll_timeout: Duration,
}

impl EventHandler {
    /// Creates a new event handler with default settings.
    pub fn new() -> Self {
        Self {
            poll_timeout: POLL_TIMEOUT,
        }
    }

    /// Polls for the next event and converts it to an Action.
    ///
    /// Returns Ok(None) if no event is available within the timeout.
    pub fn next(&self) -> io::Result<Option<Action>> {
        if event::poll(self.poll_timeout)? {
            if let Event::Key(key_event) = event::read()? {
                // Only process key press events (not releases)
                if key_event.kind == KeyEventKind::Press {
                    return Ok(self.key_to_action(key_event));
                }
            }
        }
        Ok(None)
    }

    /// Converts a key event to an application action.
    pub(crate) fn key_to_action(&self, key: KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        match key.code {
            // Timer control
            KeyCode::Char(' ') | KeyCode::Enter => Some(Action::ToggleRunning),
            KeyCode::Char('r') => Some(Action::Reset),
            KeyCode::Char('s') => Some(Action::Skip),

            // Session length
            KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right | KeyCode::Char('l') => {
                Some(Action::Longer)
            }
            KeyCode::Char('-') | KeyCode::Left | KeyCode::Char('h') => Some(Action::Shorter),

            // Other
            KeyCode::Char('p') => Some(Action::GeneratePrompt),
            KeyCode::Char('?') | KeyCode::F(1) => Some(Action::Help),
            KeyCode::Esc => Some(Action::Back),
            KeyCode::Char('q') => Some(Action::Quit),

            _ => None,
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
