//! Application state and logic.
//!
//! `App` is the single owner of the countdown, the session-length selector,
//! the tick source and the prompt panel. Key actions and background events
//! both go through it, so every state change happens in one place.

use std::sync::Arc;

use chrono::{DateTime, Local};
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info, trace, warn};

use crate::config::PhasePlan;
use crate::constants::TICK_INTERVAL;
use crate::countdown::{Countdown, TickOutcome};
use crate::event::{Action, AppEvent};
use crate::format::format_clock;
use crate::prompt_client::PromptGenerator;
use crate::selector::DurationSelector;
use crate::ticker::Ticker;

/// Status message to display to the user.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// The message text
    pub text: String,
    /// Whether this is an error message
    pub is_error: bool,
}

/// Prompt panel state.
#[derive(Debug, Clone, Default)]
pub struct PromptState {
    /// Last prompt received, if any
    pub text: Option<String>,
    /// A request is in flight; the trigger is disabled until it completes
    pub pending: bool,
}

/// Main application state.
pub struct App {
    /// The phase countdown
    pub countdown: Countdown,
    /// Session length picker
    pub selector: DurationSelector,
    /// Prompt panel
    pub prompt: PromptState,
    /// Status message to display
    pub status: Option<StatusMessage>,
    /// Help overlay visibility
    pub show_help: bool,

    ticker: Ticker,
    generator: Arc<PromptGenerator>,
    events: UnboundedSender<AppEvent>,
}

impl App {
    /// Creates the application with a paused countdown at the selected length.
    pub fn new(
        plan: PhasePlan,
        selector: DurationSelector,
        generator: PromptGenerator,
        events: UnboundedSender<AppEvent>,
    ) -> Self {
        let countdown = Countdown::new(plan, selector.total_seconds());

        Self {
            countdown,
            selector,
            prompt: PromptState::default(),
            status: None,
            show_help: false,
            ticker: Ticker::new(TICK_INTERVAL, events.clone()),
            generator: Arc::new(generator),
            events,
        }
    }

    /// Handles an action and returns true if the app should quit.
    pub fn handle_event(&mut self, action: Action) -> bool {
        // Handle help toggle from any view
        if action == Action::Help {
            self.show_help = !self.show_help;
            return false;
        }

        // If help is showing, any key closes it
        if self.show_help {
            self.show_help = false;
            return false;
        }

        match action {
            Action::Quit => return true,
            Action::ToggleRunning => self.toggle_running(),
            Action::Reset => self.reset(),
            Action::Skip => self.skip_phase(),
            Action::Longer => self.change_length(true),
            Action::Shorter => self.change_length(false),
            Action::GeneratePrompt => self.request_prompt(),
            Action::Help | Action::Back => {}
        }
        false
    }

    /// Applies a message from a background task.
    pub fn handle_background(&mut self, event: AppEvent) {
        match event {
            AppEvent::Tick { generation } => {
                if self.ticker.is_current(generation) {
                    self.on_tick();
                } else {
                    trace!(generation, "Dropping tick from a cancelled source");
                }
            }
            AppEvent::PromptReady(text) => {
                self.prompt.text = Some(text);
                self.prompt.pending = false;
            }
        }
    }

    fn toggle_running(&mut self) {
        if self.countdown.pause() {
            self.ticker.cancel();
            info!(
                remaining = self.countdown.remaining_total(),
                "Countdown paused"
            );
            self.set_status("Paused", false);
        } else if self.countdown.start() {
            self.ticker.start();
            info!(
                remaining = self.countdown.remaining_total(),
                phase = self.countdown.phase_index(),
                "Countdown started"
            );
            self.clear_status();
        } else {
            self.set_status("Session complete - press r to start over", false);
        }
    }

    fn reset(&mut self) {
        self.ticker.cancel();
        self.countdown.reset(self.selector.total_seconds());
        info!(total = self.countdown.total_seconds(), "Countdown reset");
        self.set_status(&format!("Reset to {}", self.selector.label()), false);
    }

    fn skip_phase(&mut self) {
        let Some(forfeited) = self.countdown.skip() else {
            self.set_status("Already on the final phase", false);
            return;
        };

        let current = self.phase_name(self.countdown.phase_index());
        let catch_all = self.phase_name(self.countdown.phases().len() - 1);
        let catch_all_secs = self.countdown.schedule().catch_all();
        info!(forfeited, catch_all_secs, phase = %current, "Phase skipped");
        self.set_status(
            &format!(
                "Skipped to {current} - {} moved to {catch_all}",
                format_clock(forfeited)
            ),
            false,
        );
    }

    fn change_length(&mut self, longer: bool) {
        if self.countdown.is_running() {
            warn!("Session length change rejected while running");
            self.set_status("Stop the timer before changing the session length", true);
            return;
        }

        let changed = if longer {
            self.selector.increase()
        } else {
            self.selector.decrease()
        };
        if !changed {
            return;
        }

        self.ticker.cancel();
        self.countdown.reset(self.selector.total_seconds());
        debug!(hours = self.selector.hours(), "Session length changed");
        self.set_status(&format!("Session length set to {}", self.selector.label()), false);
    }

    fn request_prompt(&mut self) {
        if self.prompt.pending {
            return;
        }
        self.prompt.pending = true;

        let generator = Arc::clone(&self.generator);
        let events = self.events.clone();
        tokio::spawn(async move {
            let text = generator.generate().await;
            // The receiver only goes away on shutdown.
            let _ = events.send(AppEvent::PromptReady(text));
        });
    }

    fn on_tick(&mut self) {
        match self.countdown.tick() {
            TickOutcome::PhaseAdvanced { to, .. } => {
                let name = self.phase_name(to);
                info!(phase = %name, "Phase started");
                self.set_status(&format!("Now: {name}"), false);
            }
            TickOutcome::Finished => {
                self.ticker.cancel();
                info!("Session complete");
                self.set_status("Session complete", false);
            }
            TickOutcome::Counted | TickOutcome::Ignored => {}
        }
    }

    fn phase_name(&self, index: usize) -> String {
        self.countdown
            .phases()
            .get(index)
            .map(|phase| phase.name.clone())
            .unwrap_or_default()
    }

    /// Wall-clock time the session will end if left running.
    pub fn ends_at(&self) -> Option<DateTime<Local>> {
        if !self.countdown.is_running() {
            return None;
        }
        let remaining = i64::try_from(self.countdown.remaining_total()).ok()?;
        Local::now().checked_add_signed(chrono::Duration::try_seconds(remaining)?)
    }

    /// Is a tick source currently installed?
    #[cfg(test)]
    pub fn is_ticking(&self) -> bool {
        self.ticker.is_active()
    }

    /// Sets a status message.
    fn set_status(&mut self, text: &str, is_error: bool) {
        self.status = Some(StatusMessage {
            text: text.to_string(),
            is_error,
        });
    }

    /// Clears the status message.
    pub fn clear_status(&mut self) {
        self.status = None;
    }
}
