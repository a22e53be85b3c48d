//! Session-length selector.

use crate::config::{ConfigError, DurationRange};
use crate::format::hours_label;

/// Session length picked by the user, kept on the configured step grid.
///
/// The value is stored as a whole number of steps above the range minimum,
/// so stepping up and down any number of times never drifts.
#[derive(Debug, Clone, PartialEq)]
pub struct DurationSelector {
    range: DurationRange,
    position: u32,
}

impl DurationSelector {
    /// Creates a selector at `hours`, snapped to the nearest step.
    pub fn new(range: DurationRange, hours: f64) -> Result<Self, ConfigError> {
        range.validate()?;
        let position = range.position_of(hours)?;
        Ok(Self { range, position })
    }

    pub fn hours(&self) -> f64 {
        self.range.hours_at(self.position)
    }

    pub fn total_seconds(&self) -> u64 {
        (self.hours() * 3600.0).round() as u64
    }

    pub fn label(&self) -> String {
        hours_label(self.hours())
    }

    /// Moves one step up. Returns false at the maximum.
    pub fn increase(&mut self) -> bool {
        if self.position >= self.range.step_count() {
            return false;
        }
        self.position += 1;
        true
    }

    /// Moves one step down. Returns false at the minimum.
    pub fn decrease(&mut self) -> bool {
        if self.position == 0 {
            return false;
        }
        self.position -= 1;
        true
    }

    pub fn range(&self) -> &DurationRange {
        &self.range
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selector() {
        let selector = DurationSelector::new(DurationRange::default(), 1.0).unwrap();

        assert_eq!(selector.hours(), 1.0);
        assert_eq!(selector.total_seconds(), 3600);
        assert_eq!(selector.label(), "1 hour");
    }

    #[test]
    fn test_step_up_and_down() {
        let mut selector = DurationSelector::new(DurationRange::default(), 1.0).unwrap();

        assert!(selector.increase());
        assert_eq!(selector.hours(), 1.5);
        assert_eq!(selector.total_seconds(), 5400);
        assert_eq!(selector.label(), "1.5 hours");

        assert!(selector.decrease());
        assert!(selector.decrease());
        assert_eq!(selector.hours(), 0.5);
        assert!(!selector.decrease());
        assert_eq!(selector.total_seconds(), 1800);
    }

    #[test]
    fn test_clamps_at_maximum() {
        let mut selector = DurationSelector::new(DurationRange::default(), 7.5).unwrap();

        assert!(selector.increase());
        assert!(!selector.increase());
        assert_eq!(selector.label(), "8 hours");
    }

    #[test]
    fn test_no_drift_after_many_steps() {
        let mut selector = DurationSelector::new(DurationRange::default(), 0.5).unwrap();
        for _ in 0..15 {
            selector.increase();
        }
        for _ in 0..13 {
            selector.decrease();
        }
        assert_eq!(selector.hours(), 1.5);
    }

    #[test]
    fn test_rejects_out_of_range_start() {
        assert!(matches!(
            DurationSelector::new(DurationRange::default(), 24.0),
            Err(ConfigError::DurationOutOfRange { .. })
        ));
    }
}
