//! Phase duration allocation.
//!
//! A session of `T` seconds is split in two: `round(T * primary_fraction)`
//! seconds are shared among the weighted phases in proportion to their
//! weights, and the rest goes to the catch-all phase. Each weighted share is
//! rounded on its own, and whatever rounding gains or loses is settled on the
//! last weighted phase, so the durations always add up to exactly `T`.

use crate::config::{ConfigError, Phase, PhasePlan};

/// Per-phase durations in whole seconds, aligned with the plan's phases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    durations: Vec<u64>,
}

impl Schedule {
    /// Allocates `total_secs` across a validated plan.
    pub fn build(total_secs: u64, plan: &PhasePlan) -> Self {
        Self {
            durations: split(
                total_secs,
                plan.phases(),
                plan.primary_fraction(),
                plan.weight_sum(),
            ),
        }
    }

    pub fn durations(&self) -> &[u64] {
        &self.durations
    }

    /// Duration of phase `index`, or 0 past the end.
    pub fn get(&self, index: usize) -> u64 {
        self.durations.get(index).copied().unwrap_or(0)
    }

    #[cfg(test)]
    pub fn total(&self) -> u64 {
        self.durations.iter().sum()
    }

    /// Current allocation of the catch-all phase.
    pub fn catch_all(&self) -> u64 {
        self.durations.last().copied().unwrap_or(0)
    }

    /// Total allocation of every phase after `index`.
    #[cfg(test)]
    pub fn remaining_after(&self, index: usize) -> u64 {
        self.durations.iter().skip(index + 1).sum()
    }

    /// Moves `seconds` of phase `index`'s allocation onto the catch-all.
    ///
    /// Returns the amount actually moved, capped at the phase's allocation.
    /// Moving from the catch-all itself is a no-op.
    pub fn forfeit(&mut self, index: usize, seconds: u64) -> u64 {
        let last = self.durations.len().saturating_sub(1);
        if index >= last {
            return 0;
        }

        let moved = seconds.min(self.durations[index]);
        self.durations[index] -= moved;
        self.durations[last] += moved;
        moved
    }
}

/// Splits `total_secs` across `phases`, the last of which is the catch-all.
///
/// Fails when the weighted phases have no positive weight, the fraction is
/// outside `[0, 1]`, or there is no catch-all phase.
#[allow(dead_code)]
pub fn allocate(
    total_secs: u64,
    phases: &[Phase],
    primary_fraction: f64,
) -> Result<Vec<u64>, ConfigError> {
    let plan = PhasePlan::new(phases.to_vec(), primary_fraction)?;
    Ok(Schedule::build(total_secs, &plan).durations)
}

fn split(total_secs: u64, phases: &[Phase], primary_fraction: f64, weight_sum: f64) -> Vec<u64> {
    let primary_total = ((total_secs as f64 * primary_fraction).round() as u64).min(total_secs);
    let secondary_total = total_secs - primary_total;

    let weighted = &phases[..phases.len() - 1];
    let mut durations: Vec<u64> = weighted
        .iter()
        .map(|phase| (primary_total as f64 * phase.weight / weight_sum).round() as u64)
        .collect();

    let allocated: u64 = durations.iter().sum();
    if allocated < primary_total {
        if let Some(last) = durations.last_mut() {
            *last += primary_total - allocated;
        }
    } else if allocated > primary_total {
        // The last weighted phase gives back the surplus. If its own share is
        // too small to cover it, earlier phases make up the difference.
        let mut surplus = allocated - primary_total;
        for duration in durations.iter_mut().rev() {
            let taken = surplus.min(*duration);
            *duration -= taken;
            surplus -= taken;
            if surplus == 0 {
                break;
            }
        }
    }

    durations.push(secondary_total);
    durations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{default_phases, DEFAULT_PRIMARY_FRACTION};

    fn weighted(weights: &[f64]) -> Vec<Phase> {
        weights
            .iter()
            .enumerate()
            .map(|(idx, weight)| Phase::new(format!("Phase {idx}"), *weight, ""))
            .collect()
    }

    #[test]
    fn test_one_hour_design_session() {
        let durations = allocate(3600, &default_phases(), DEFAULT_PRIMARY_FRACTION).unwrap();

        assert_eq!(durations, vec![295, 222, 332, 665, 443, 923, 720]);
        assert_eq!(durations.iter().sum::<u64>(), 3600);
        assert_eq!(durations[..6].iter().sum::<u64>(), 2880);
    }

    #[test]
    fn test_rounding_surplus_taken_from_last_weighted_phase() {
        // Independently rounded shares come to 1441 against a primary total
        // of 1440; Refinement drops from 462 to 461.
        let durations = allocate(1800, &default_phases(), DEFAULT_PRIMARY_FRACTION).unwrap();

        assert_eq!(durations, vec![148, 111, 166, 332, 222, 461, 360]);
        assert_eq!(durations.iter().sum::<u64>(), 1800);
    }

    #[test]
    fn test_rounding_shortfall_added_to_last_weighted_phase() {
        // Three equal weights of 100 s: 33.33 rounds down three times.
        let durations = allocate(125, &weighted(&[1.0, 1.0, 1.0, 0.0]), 0.8).unwrap();

        assert_eq!(durations, vec![33, 33, 34, 25]);
    }

    #[test]
    fn test_sum_is_exact_for_many_totals() {
        let plans = [
            default_phases(),
            weighted(&[1.0, 1.0, 1.0, 0.0]),
            weighted(&[0.3, 7.0, 0.01, 2.5, 4.0]),
            weighted(&[5.0, 0.0, 0.0, 3.0]),
        ];

        for phases in &plans {
            for total in (0..5000).chain([28_800, 86_399, 1_000_003]) {
                let durations = allocate(total, phases, 0.8).unwrap();
                assert_eq!(durations.len(), phases.len());
                assert_eq!(durations.iter().sum::<u64>(), total, "total {total}");
            }
        }
    }

    #[test]
    fn test_catch_all_gets_secondary_share() {
        for total in [0, 1, 7, 59, 3600, 5400, 28_800] {
            let durations = allocate(total, &default_phases(), 0.8).unwrap();
            let primary = (total as f64 * 0.8).round() as u64;
            assert_eq!(*durations.last().unwrap(), total - primary);
        }
    }

    #[test]
    fn test_zero_total_is_all_zero() {
        let durations = allocate(0, &default_phases(), 0.8).unwrap();
        assert!(durations.iter().all(|d| *d == 0));
    }

    #[test]
    fn test_zero_weight_last_weighted_phase_never_negative() {
        // Two phases at 0.5 s each round up; the zero-weight phase cannot give
        // back the extra second, so the one before it does.
        let durations = allocate(1, &weighted(&[1.0, 1.0, 0.0, 0.0]), 1.0).unwrap();

        assert_eq!(durations.iter().sum::<u64>(), 1);
        assert_eq!(durations[2], 0);
        assert_eq!(durations[3], 0);
    }

    #[test]
    fn test_zero_weight_sum_rejected() {
        let result = allocate(3600, &weighted(&[0.0, 0.0, 4.0]), 0.8);
        assert_eq!(result, Err(ConfigError::ZeroWeightSum));
    }

    #[test]
    fn test_full_primary_fraction_leaves_catch_all_empty() {
        let durations = allocate(3600, &default_phases(), 1.0).unwrap();
        assert_eq!(durations[6], 0);
        assert_eq!(durations.iter().sum::<u64>(), 3600);
    }

    #[test]
    fn test_forfeit_moves_time_to_catch_all() {
        let plan = PhasePlan::new(weighted(&[1.0, 2.0, 1.0, 0.0]), 0.8).unwrap();
        let mut schedule = Schedule::build(500, &plan);
        assert_eq!(schedule.durations(), &[100, 200, 100, 100]);

        assert_eq!(schedule.forfeit(0, 40), 40);
        assert_eq!(schedule.durations(), &[60, 200, 100, 140]);
        assert_eq!(schedule.total(), 500);

        // Capped at what the phase has left; the catch-all cannot forfeit.
        assert_eq!(schedule.forfeit(0, 1000), 60);
        assert_eq!(schedule.forfeit(3, 10), 0);
        assert_eq!(schedule.durations(), &[0, 200, 100, 200]);
    }

    #[test]
    fn test_remaining_after() {
        let plan = PhasePlan::new(weighted(&[1.0, 2.0, 1.0, 0.0]), 0.8).unwrap();
        let schedule = Schedule::build(500, &plan);

        assert_eq!(schedule.remaining_after(0), 400);
        assert_eq!(schedule.remaining_after(2), 100);
        assert_eq!(schedule.remaining_after(3), 0);
        assert_eq!(schedule.get(9), 0);
        assert_eq!(schedule.catch_all(), 100);
    }
}
