//! Countdown state machine.
//!
//! `Countdown` walks a [`Schedule`] one second at a time. It knows nothing
//! about wall-clock time: the controller calls [`Countdown::tick`] whenever
//! its tick source fires, and tests call it directly.
//!
//! Besides the usual bounds, every transition keeps
//! `remaining_total == remaining_in_phase + schedule.remaining_after(index)`,
//! so the phase clocks and the session clock can never disagree.

use crate::config::{Phase, PhasePlan};
use crate::format::progress_percent;
use crate::schedule::Schedule;

/// Where the countdown is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CountdownStatus {
    /// Built or reset, or stopped by the user.
    #[default]
    Paused,
    Running,
    /// No time left. Only a reset leaves this state.
    Finished,
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The countdown was not running.
    Ignored,
    /// One second elapsed inside the current phase.
    Counted,
    /// One second elapsed and the next phase began.
    PhaseAdvanced { from: usize, to: usize },
    /// The session ran out of time.
    Finished,
}

#[derive(Debug, Clone)]
pub struct Countdown {
    plan: PhasePlan,
    schedule: Schedule,
    total: u64,
    remaining_total: u64,
    phase_index: usize,
    remaining_in_phase: u64,
    status: CountdownStatus,
}

impl Countdown {
    /// Builds a paused countdown of `total_secs` over `plan`.
    pub fn new(plan: PhasePlan, total_secs: u64) -> Self {
        let schedule = Schedule::build(total_secs, &plan);
        let remaining_in_phase = schedule.get(0);
        Self {
            plan,
            schedule,
            total: total_secs,
            remaining_total: total_secs,
            phase_index: 0,
            remaining_in_phase,
            status: CountdownStatus::Paused,
        }
    }

    /// Rebuilds the schedule for `total_secs` and rewinds to the first phase.
    pub fn reset(&mut self, total_secs: u64) {
        self.schedule = Schedule::build(total_secs, &self.plan);
        self.total = total_secs;
        self.remaining_total = total_secs;
        self.phase_index = 0;
        self.remaining_in_phase = self.schedule.get(0);
        self.status = CountdownStatus::Paused;
    }

    /// Paused -> Running. Returns false from any other state.
    pub fn start(&mut self) -> bool {
        if self.status != CountdownStatus::Paused {
            return false;
        }
        self.status = CountdownStatus::Running;
        true
    }

    /// Running -> Paused. Returns false from any other state.
    pub fn pause(&mut self) -> bool {
        if self.status != CountdownStatus::Running {
            return false;
        }
        self.status = CountdownStatus::Paused;
        true
    }

    /// Counts down one second.
    pub fn tick(&mut self) -> TickOutcome {
        if self.status != CountdownStatus::Running {
            return TickOutcome::Ignored;
        }

        if self.remaining_total == 0 {
            self.finish();
            return TickOutcome::Finished;
        }

        let from = self.phase_index;

        // An exhausted phase (zero-length, or emptied by an earlier tick) must
        // not swallow this second.
        self.advance_past_exhausted();

        self.remaining_total -= 1;
        self.remaining_in_phase = self.remaining_in_phase.saturating_sub(1);

        self.advance_past_exhausted();

        if self.remaining_total == 0 {
            self.finish();
            return TickOutcome::Finished;
        }

        if self.phase_index != from {
            TickOutcome::PhaseAdvanced {
                from,
                to: self.phase_index,
            }
        } else {
            TickOutcome::Counted
        }
    }

    /// Abandons the current phase and moves to the next one.
    ///
    /// The unused time of the skipped phase is handed to the catch-all phase,
    /// so the session length is unchanged. Returns the forfeited seconds, or
    /// `None` when already on the catch-all phase or finished.
    pub fn skip(&mut self) -> Option<u64> {
        if self.is_last_phase() || self.status == CountdownStatus::Finished {
            return None;
        }

        let forfeited = self
            .schedule
            .forfeit(self.phase_index, self.remaining_in_phase);
        self.phase_index += 1;
        self.remaining_in_phase = self.schedule.get(self.phase_index);
        Some(forfeited)
    }

    fn advance_past_exhausted(&mut self) {
        while self.remaining_in_phase == 0 && !self.is_last_phase() {
            self.phase_index += 1;
            self.remaining_in_phase = self.schedule.get(self.phase_index);
        }
    }

    fn finish(&mut self) {
        self.remaining_total = 0;
        self.remaining_in_phase = 0;
        self.status = CountdownStatus::Finished;
    }

    fn is_last_phase(&self) -> bool {
        self.phase_index >= self.plan.catch_all_index()
    }

    pub fn status(&self) -> CountdownStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == CountdownStatus::Running
    }

    pub fn is_finished(&self) -> bool {
        self.status == CountdownStatus::Finished
    }

    pub fn total_seconds(&self) -> u64 {
        self.total
    }

    pub fn remaining_total(&self) -> u64 {
        self.remaining_total
    }

    pub fn phase_index(&self) -> usize {
        self.phase_index
    }

    pub fn remaining_in_phase(&self) -> u64 {
        self.remaining_in_phase
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn phases(&self) -> &[Phase] {
        self.plan.phases()
    }

    pub fn current_phase(&self) -> Option<&Phase> {
        self.plan.phase(self.phase_index)
    }

    /// Allocated length of the current phase.
    pub fn phase_duration(&self) -> u64 {
        self.schedule.get(self.phase_index)
    }

    /// Elapsed share of the current phase, 0-100.
    pub fn phase_progress(&self) -> f64 {
        progress_percent(self.phase_duration(), self.remaining_in_phase)
    }

    /// Elapsed share of the whole session, 0-100.
    pub fn overall_progress(&self) -> f64 {
        progress_percent(self.total, self.remaining_total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_phases;

    /// Schedule for 500 s is [100, 200, 100, 100].
    fn small_plan() -> PhasePlan {
        PhasePlan::new(
            vec![
                Phase::new("Warm up", 1.0, ""),
                Phase::new("Build", 2.0, ""),
                Phase::new("Polish", 1.0, ""),
                Phase::new("Extras", 0.0, ""),
            ],
            0.8,
        )
        .unwrap()
    }

    fn assert_consistent(countdown: &Countdown) {
        let schedule = countdown.schedule();
        assert_eq!(schedule.total(), countdown.total_seconds());
        assert!(countdown.remaining_in_phase() <= countdown.phase_duration());
        assert!(countdown.remaining_total() <= countdown.total_seconds());
        assert!(countdown.phase_index() < countdown.phases().len());
        assert_eq!(
            countdown.remaining_total(),
            countdown.remaining_in_phase() + schedule.remaining_after(countdown.phase_index())
        );
    }

    fn tick_n(countdown: &mut Countdown, n: u64) -> Vec<TickOutcome> {
        (0..n).map(|_| countdown.tick()).collect()
    }

    #[test]
    fn test_new_countdown_is_paused_on_first_phase() {
        let countdown = Countdown::new(PhasePlan::default(), 3600);

        assert_eq!(countdown.status(), CountdownStatus::Paused);
        assert_eq!(countdown.phase_index(), 0);
        assert_eq!(countdown.remaining_in_phase(), 295);
        assert_eq!(countdown.remaining_total(), 3600);
        assert_eq!(countdown.current_phase().unwrap().name, "Research");
        assert_consistent(&countdown);
    }

    #[test]
    fn test_start_and_pause_transitions() {
        let mut countdown = Countdown::new(small_plan(), 500);

        assert!(!countdown.pause());
        assert!(countdown.start());
        assert!(!countdown.start());
        assert!(countdown.is_running());
        assert!(countdown.pause());
        assert_eq!(countdown.status(), CountdownStatus::Paused);
    }

    #[test]
    fn test_tick_ignored_unless_running() {
        let mut countdown = Countdown::new(small_plan(), 500);

        assert_eq!(countdown.tick(), TickOutcome::Ignored);
        assert_eq!(countdown.remaining_total(), 500);

        countdown.start();
        countdown.pause();
        assert_eq!(countdown.tick(), TickOutcome::Ignored);
        assert_eq!(countdown.remaining_in_phase(), 100);
    }

    #[test]
    fn test_tick_counts_down_and_advances_phase() {
        let mut countdown = Countdown::new(small_plan(), 500);
        countdown.start();

        let outcomes = tick_n(&mut countdown, 99);
        assert!(outcomes.iter().all(|o| *o == TickOutcome::Counted));
        assert_eq!(countdown.remaining_in_phase(), 1);
        assert_eq!(countdown.remaining_total(), 401);

        assert_eq!(
            countdown.tick(),
            TickOutcome::PhaseAdvanced { from: 0, to: 1 }
        );
        assert_eq!(countdown.phase_index(), 1);
        assert_eq!(countdown.remaining_in_phase(), 200);
        assert_eq!(countdown.remaining_total(), 400);
        assert_consistent(&countdown);
    }

    #[test]
    fn test_ticking_whole_session_reaches_last_phase() {
        let mut countdown = Countdown::new(PhasePlan::default(), 3600);
        countdown.start();

        let outcomes = tick_n(&mut countdown, 3600);

        assert_eq!(countdown.remaining_total(), 0);
        assert_eq!(countdown.remaining_in_phase(), 0);
        assert_eq!(countdown.phase_index(), 6);
        assert_eq!(countdown.status(), CountdownStatus::Finished);
        assert_eq!(outcomes.last(), Some(&TickOutcome::Finished));

        let advances = outcomes
            .iter()
            .filter(|o| matches!(o, TickOutcome::PhaseAdvanced { .. }))
            .count();
        assert_eq!(advances, 6);

        // Nothing more happens until a reset.
        assert_eq!(countdown.tick(), TickOutcome::Ignored);
        assert!(!countdown.start());
    }

    #[test]
    fn test_zero_length_phases_are_passed_over() {
        // At 7 s Brainstorm gets no time at all.
        let mut countdown = Countdown::new(PhasePlan::default(), 7);
        assert_eq!(countdown.schedule().durations(), &[1, 0, 1, 1, 1, 2, 1]);
        countdown.start();

        assert_eq!(
            countdown.tick(),
            TickOutcome::PhaseAdvanced { from: 0, to: 2 }
        );
        assert_consistent(&countdown);

        tick_n(&mut countdown, 6);
        assert!(countdown.is_finished());
        assert_eq!(countdown.phase_index(), 6);
    }

    #[test]
    fn test_zero_total_finishes_on_first_tick() {
        let mut countdown = Countdown::new(PhasePlan::default(), 0);
        assert!(countdown.start());

        assert_eq!(countdown.tick(), TickOutcome::Finished);
        assert_eq!(countdown.remaining_total(), 0);
        assert_eq!(countdown.remaining_in_phase(), 0);
        assert!(countdown.is_finished());
    }

    #[test]
    fn test_skip_forfeits_time_to_catch_all() {
        let mut countdown = Countdown::new(small_plan(), 500);

        assert_eq!(countdown.skip(), Some(100));
        assert_eq!(countdown.schedule().catch_all(), 200);
        assert_eq!(countdown.phase_index(), 1);
        assert_eq!(countdown.remaining_in_phase(), 200);

        assert_eq!(countdown.skip(), Some(200));
        assert_eq!(countdown.schedule().catch_all(), 400);
        assert_eq!(countdown.phase_index(), 2);
        assert_eq!(countdown.schedule().total(), 500);
        assert_consistent(&countdown);
    }

    #[test]
    fn test_skip_mid_phase_keeps_elapsed_time() {
        let mut countdown = Countdown::new(small_plan(), 500);
        countdown.start();
        tick_n(&mut countdown, 30);

        let before = countdown.schedule().catch_all();
        let forfeited = countdown.remaining_in_phase();
        assert_eq!(countdown.skip(), Some(forfeited));

        assert_eq!(forfeited, 70);
        assert_eq!(countdown.schedule().catch_all(), before + 70);
        assert_eq!(countdown.schedule().get(0), 30);
        assert_eq!(countdown.remaining_total(), 470);
        assert!(countdown.is_running());
        assert_consistent(&countdown);
    }

    #[test]
    fn test_skip_into_catch_all_includes_forfeited_time() {
        let mut countdown = Countdown::new(small_plan(), 500);
        countdown.skip();
        countdown.skip();
        countdown.skip();

        assert_eq!(countdown.phase_index(), 3);
        assert_eq!(countdown.remaining_in_phase(), 500);
        assert_eq!(countdown.remaining_total(), 500);
        assert_eq!(countdown.skip(), None);
        assert_consistent(&countdown);
    }

    #[test]
    fn test_skipped_session_still_ends_on_time() {
        let mut countdown = Countdown::new(small_plan(), 500);
        countdown.start();
        tick_n(&mut countdown, 10);
        countdown.skip();
        tick_n(&mut countdown, 50);
        countdown.skip();

        tick_n(&mut countdown, 439);
        assert!(countdown.is_running());
        assert_eq!(countdown.remaining_total(), 1);
        assert_consistent(&countdown);

        assert_eq!(countdown.tick(), TickOutcome::Finished);
    }

    #[test]
    fn test_reset_restores_first_phase_from_any_state() {
        let mut countdown = Countdown::new(small_plan(), 500);
        countdown.start();
        tick_n(&mut countdown, 150);
        countdown.skip();

        countdown.reset(500);
        assert_eq!(countdown.status(), CountdownStatus::Paused);
        assert_eq!(countdown.phase_index(), 0);
        assert_eq!(countdown.remaining_in_phase(), countdown.schedule().get(0));
        assert_eq!(countdown.schedule().durations(), &[100, 200, 100, 100]);

        countdown.start();
        tick_n(&mut countdown, 500);
        assert!(countdown.is_finished());

        countdown.reset(1000);
        assert_eq!(countdown.status(), CountdownStatus::Paused);
        assert_eq!(countdown.remaining_total(), 1000);
        assert_eq!(countdown.remaining_in_phase(), 200);
        assert_consistent(&countdown);
    }

    #[test]
    fn test_progress() {
        let mut countdown = Countdown::new(small_plan(), 500);
        assert_eq!(countdown.phase_progress(), 0.0);
        assert_eq!(countdown.overall_progress(), 0.0);

        countdown.start();
        tick_n(&mut countdown, 50);
        assert_eq!(countdown.phase_progress(), 50.0);
        assert_eq!(countdown.overall_progress(), 10.0);

        tick_n(&mut countdown, 450);
        assert_eq!(countdown.overall_progress(), 100.0);
    }

    #[test]
    fn test_invariants_hold_through_mixed_operations() {
        let mut countdown = Countdown::new(PhasePlan::new(default_phases(), 0.8).unwrap(), 5400);
        countdown.start();

        for step in 0..5400u64 {
            if step % 700 == 13 {
                countdown.skip();
            } else {
                countdown.tick();
            }
            assert_consistent(&countdown);
            if countdown.is_finished() {
                break;
            }
        }
    }
}
