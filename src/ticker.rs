//! Cancelable one-second tick source.
//!
//! A [`Ticker`] owns at most one spawned tokio task that sends
//! [`AppEvent::Tick`] into the application's event channel at a fixed
//! interval. Every installed task gets a new generation number, and the
//! receiver checks it with [`Ticker::is_current`], so a tick that was already
//! queued when its task was cancelled is never applied.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::debug;

use crate::event::AppEvent;

pub struct Ticker {
    interval: Duration,
    events: UnboundedSender<AppEvent>,
    handle: Option<JoinHandle<()>>,
    generation: u64,
}

impl Ticker {
    pub fn new(interval: Duration, events: UnboundedSender<AppEvent>) -> Self {
        Self {
            interval,
            events,
            handle: None,
            generation: 0,
        }
    }

    /// Installs a fresh tick task, cancelling any task already running.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&mut self) {
        self.cancel();
        self.generation += 1;

        let generation = self.generation;
        let period = self.interval;
        let events = self.events.clone();

        self.handle = Some(tokio::spawn(async move {
            // First tick one full period after start, not immediately.
            let mut interval = time::interval_at(Instant::now() + period, period);
            // Late ticks are not made up for; drift simply accumulates.
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                interval.tick().await;
                if events.send(AppEvent::Tick { generation }).is_err() {
                    break;
                }
            }
        }));

        debug!(generation, "Tick source installed");
    }

    /// Stops the current tick task, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            debug!(generation = self.generation, "Tick source cancelled");
        }
    }

    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    /// True when a tick stamped with `generation` comes from the live task.
    pub fn is_current(&self, generation: u64) -> bool {
        self.is_active() && generation == self.generation
    }

    #[cfg(test)]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}
