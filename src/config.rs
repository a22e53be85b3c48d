//! Timer configuration.
//!
//! Holds the phase plan, the range of the session-length selector and the
//! prompt service settings. Everything is validated when it is built, so the
//! rest of the program never sees a plan that cannot be scheduled.

use std::path::PathBuf;

use thiserror::Error;

/// Share of the session spread across the weighted phases.
pub const DEFAULT_PRIMARY_FRACTION: f64 = 0.8;

/// Text-generation endpoint used for branding prompts.
pub const DEFAULT_PROMPT_URL: &str = "https://text.pollinations.ai/openai";

/// Environment variable overriding the prompt endpoint.
pub const PROMPT_URL_ENV: &str = "PHASETIMER_PROMPT_URL";

/// Environment variable naming the log file.
pub const LOG_PATH_ENV: &str = "PHASETIMER_LOG";

/// Errors raised while validating configuration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("A phase plan needs at least one weighted phase and a final catch-all phase")]
    TooFewPhases,

    #[error("Phase '{0}' has invalid weight {1} (must be finite and non-negative)")]
    InvalidWeight(String, f64),

    #[error("Weighted phases must have a positive total weight")]
    ZeroWeightSum,

    #[error("Primary fraction {0} must be between 0 and 1")]
    InvalidPrimaryFraction(f64),

    #[error("Invalid duration range: min {min} h, max {max} h, step {step} h")]
    InvalidRange { min: f64, max: f64, step: f64 },

    #[error("Session length {value} h is outside {min}-{max} h")]
    DurationOutOfRange { value: f64, min: f64, max: f64 },
}

/// A named segment of the session.
#[derive(Debug, Clone, PartialEq)]
pub struct Phase {
    pub name: String,
    /// Relative share of the primary allocation. Ignored for the catch-all.
    pub weight: f64,
    pub description: String,
}

impl Phase {
    pub fn new(name: impl Into<String>, weight: f64, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            weight,
            description: description.into(),
        }
    }
}

/// The ordered phases plus the primary fraction, checked for schedulability.
///
/// The last phase is the catch-all: it gets whatever the primary fraction
/// leaves over and absorbs time forfeited by skipped phases.
#[derive(Debug, Clone, PartialEq)]
pub struct PhasePlan {
    phases: Vec<Phase>,
    primary_fraction: f64,
    weight_sum: f64,
}

impl PhasePlan {
    /// Validates and builds a plan.
    pub fn new(phases: Vec<Phase>, primary_fraction: f64) -> Result<Self, ConfigError> {
        if phases.len() < 2 {
            return Err(ConfigError::TooFewPhases);
        }

        if !(0.0..=1.0).contains(&primary_fraction) {
            return Err(ConfigError::InvalidPrimaryFraction(primary_fraction));
        }

        if let Some(bad) = phases
            .iter()
            .find(|phase| !phase.weight.is_finite() || phase.weight < 0.0)
        {
            return Err(ConfigError::InvalidWeight(bad.name.clone(), bad.weight));
        }

        let weight_sum = weighted_sum(&phases);
        if weight_sum <= 0.0 {
            return Err(ConfigError::ZeroWeightSum);
        }

        Ok(Self {
            phases,
            primary_fraction,
            weight_sum,
        })
    }

    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    pub fn primary_fraction(&self) -> f64 {
        self.primary_fraction
    }

    /// Sum of the weights of every phase except the catch-all.
    pub fn weight_sum(&self) -> f64 {
        self.weight_sum
    }

    pub fn len(&self) -> usize {
        self.phases.len()
    }

    pub fn catch_all_index(&self) -> usize {
        self.phases.len() - 1
    }

    pub fn phase(&self, index: usize) -> Option<&Phase> {
        self.phases.get(index)
    }
}

impl Default for PhasePlan {
    fn default() -> Self {
        let phases = default_phases();
        Self {
            weight_sum: weighted_sum(&phases),
            phases,
            primary_fraction: DEFAULT_PRIMARY_FRACTION,
        }
    }
}

fn weighted_sum(phases: &[Phase]) -> f64 {
    phases[..phases.len().saturating_sub(1)]
        .iter()
        .map(|phase| phase.weight)
        .sum()
}

/// The logo design session the timer ships with.
pub fn default_phases() -> Vec<Phase> {
    vec![
        Phase::new("Research", 8.0, "Quick audience + landscape scan"),
        Phase::new("Brainstorm", 6.0, "Rapid idea capture"),
        Phase::new("Sketch", 9.0, "Loose visual directions"),
        Phase::new("Vector drafts", 18.0, "Structured logo explorations"),
        Phase::new("Concept selection", 12.0, "Narrow to finalists"),
        Phase::new("Refinement", 25.0, "Polish the lead concept"),
        Phase::new("Secondary branding", 0.0, "Extend the system"),
    ]
}

/// Bounds and granularity of the session-length selector, in hours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationRange {
    pub min_hours: f64,
    pub max_hours: f64,
    pub step_hours: f64,
    pub default_hours: f64,
}

impl DurationRange {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [self.min_hours, self.max_hours, self.step_hours]
            .iter()
            .all(|value| value.is_finite());

        if !finite || self.min_hours < 0.0 || self.step_hours <= 0.0 || self.max_hours < self.min_hours
        {
            return Err(ConfigError::InvalidRange {
                min: self.min_hours,
                max: self.max_hours,
                step: self.step_hours,
            });
        }

        self.position_of(self.default_hours).map(|_| ())
    }

    /// Number of steps between the minimum and the maximum.
    pub fn step_count(&self) -> u32 {
        ((self.max_hours - self.min_hours) / self.step_hours).round() as u32
    }

    /// Snaps `hours` to the nearest step and returns its offset from the minimum.
    pub fn position_of(&self, hours: f64) -> Result<u32, ConfigError> {
        // Half a step of slack so values typed by hand still land on the grid.
        let slack = self.step_hours / 2.0;
        if !hours.is_finite() || hours < self.min_hours - slack || hours > self.max_hours + slack {
            return Err(ConfigError::DurationOutOfRange {
                value: hours,
                min: self.min_hours,
                max: self.max_hours,
            });
        }

        let position = ((hours - self.min_hours) / self.step_hours).round().max(0.0) as u32;
        Ok(position.min(self.step_count()))
    }

    pub fn hours_at(&self, position: u32) -> f64 {
        self.min_hours + f64::from(position) * self.step_hours
    }
}

impl Default for DurationRange {
    fn default() -> Self {
        Self {
            min_hours: 0.5,
            max_hours: 8.0,
            step_hours: 0.5,
            default_hours: 1.0,
        }
    }
}

/// Everything the application needs at start-up.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub plan: PhasePlan,
    pub range: DurationRange,
    pub prompt_url: String,
    /// Skip the prompt service and always use the local list.
    pub offline: bool,
    pub log_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            plan: PhasePlan::default(),
            range: DurationRange::default(),
            prompt_url: DEFAULT_PROMPT_URL.to_string(),
            offline: false,
            log_path: None,
        }
    }
}

impl AppConfig {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(url) = lookup(PROMPT_URL_ENV).filter(|url| !url.trim().is_empty()) {
            config.prompt_url = url.trim().to_string();
        }

        if let Some(path) = lookup(LOG_PATH_ENV).filter(|path| !path.trim().is_empty()) {
            config.log_path = Some(PathBuf::from(path.trim()));
        }

        config
    }
}
