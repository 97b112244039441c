// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search configuration and its validation.

use std::fmt;
use std::time::Duration;

use crate::grid::Root;

/// Smallest gap between `step` and `min_root`: a base combination needs eight
/// roots below the step's own root.
pub const MIN_STEP_SPAN: Root = 7;

/// Options shared by both strategies.
///
/// `verbose` and `quiet` only change what is logged; they never change which
/// candidates are tried or in which order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Initial root ceiling for the brute-force search.
    pub step: Root,
    /// Smallest root considered by the brute-force search (one-based).
    pub min_root: Root,
    /// Stop with "not found" after this many candidates.
    pub max_tests: Option<u64>,
    /// Graph strategy: stop after this many shells.
    pub max_shells: Option<u64>,
    /// Shuffle the root pool and each base combination.
    pub random_combinations: bool,
    /// Seed for the shuffle; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Graph strategy: pass over buckets smaller than the largest seen.
    pub skip_short_entries: bool,
    /// Interval between status updates.
    pub update: Duration,
    pub verbose: bool,
    pub quiet: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            step: 9,
            min_root: 1,
            max_tests: None,
            max_shells: None,
            random_combinations: false,
            seed: None,
            skip_short_entries: false,
            update: Duration::from_secs(50),
            verbose: false,
            quiet: false,
        }
    }
}

impl SearchConfig {
    /// Check the brute-force root bounds.
    pub fn validate_roots(&self) -> Result<(), ConfigError> {
        if self.min_root < 1 {
            return Err(ConfigError::MinRootTooSmall {
                min_root: self.min_root,
            });
        }
        if self.step.saturating_sub(self.min_root) < MIN_STEP_SPAN {
            return Err(ConfigError::StepTooSmall {
                step: self.step,
                min_root: self.min_root,
            });
        }
        Ok(())
    }

    /// True once `tests` has reached the configured budget.
    pub fn budget_reached(&self, tests: u64) -> bool {
        self.max_tests.is_some_and(|max| tests >= max)
    }
}

/// Configuration rejected before any search work starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Roots are one-based here, so the smallest allowed is 1.
    MinRootTooSmall { min_root: Root },

    /// The pool `[min_root-1, step-2]` cannot supply eight roots.
    StepTooSmall { step: Root, min_root: Root },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MinRootTooSmall { min_root } => {
                write!(f, "--min-root must be at least 1 (got {})", min_root)
            }
            ConfigError::StepTooSmall { step, min_root } => {
                write!(
                    f,
                    "--min-root must be no more than step-{}: step is {}, min_root is {}",
                    MIN_STEP_SPAN, step, min_root
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}
