// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use mss_search::context::SearchContext;
use mss_search::grid::Root;
use mss_search::{Predicate, PredicateResult, SearchConfig};

/// `[49 1 25; 1 25 49; 25 49 1]`, the smallest magic square of squares
/// (with repeated entries).
pub const DEGENERATE_MAGIC: [Root; 9] = [6, 0, 4, 0, 4, 6, 4, 6, 0];

/// Default configuration with logging suppressed.
pub fn quiet_config() -> SearchConfig {
    SearchConfig {
        quiet: true,
        ..SearchConfig::default()
    }
}

/// Brute force from step 9, stopping after `max_tests` candidates.
pub fn brute_config(max_tests: u64) -> SearchConfig {
    SearchConfig {
        max_tests: Some(max_tests),
        ..quiet_config()
    }
}

/// Graph search over the first `max_shells` shells.
pub fn graph_config(max_shells: u64) -> SearchConfig {
    SearchConfig {
        max_shells: Some(max_shells),
        ..quiet_config()
    }
}

/// A predicate that tries each root in `[start, end)` as the current step.
#[derive(Debug)]
pub struct StepRangePredicate {
    pub start: Root,
    pub end: Root,
}

impl Predicate for StepRangePredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        match usize::try_from(self.end - self.start) {
            Ok(n) if n > 0 => PredicateResult::Choices(n),
            _ => PredicateResult::Failure,
        }
    }

    fn retry_pred(&mut self, ctx: &mut SearchContext, _round: usize, choice: usize) -> PredicateResult {
        ctx.state.step = self.start + choice as Root;
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "StepRange"
    }
}

/// A predicate that runs for `rounds` rounds, recording each in `tests`.
#[derive(Debug)]
pub struct MultiRoundPredicate {
    pub rounds: usize,
}

impl Predicate for MultiRoundPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, round: usize) -> PredicateResult {
        ctx.state.tests += 1;
        if round + 1 < self.rounds {
            PredicateResult::SuccessSamePredicate
        } else {
            PredicateResult::Success
        }
    }

    fn name(&self) -> &str {
        "MultiRound"
    }
}

/// A predicate that always fails.
#[derive(Debug)]
pub struct AlwaysFailPredicate;

impl Predicate for AlwaysFailPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "AlwaysFail"
    }
}
