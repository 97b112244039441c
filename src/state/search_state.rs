// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-run search counters.

use crate::grid::Root;

/// Counters owned by one run of one strategy.
///
/// Strategies never share a `SearchState`. Should shells or steps ever be
/// explored in parallel, per-worker states combine with [`SearchState::merge`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    /// Current root ceiling (brute force).
    pub step: Root,
    /// Current shell index (graph).
    pub shell: Root,
    /// Candidates tested so far.
    pub tests: u64,
    /// Best match score of any completed grid (graph).
    pub cur_score: usize,
    /// Largest pair-sum bucket seen (graph).
    pub cur_max_sums: usize,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a match score; returns true when it is a new best.
    pub fn record_score(&mut self, score: usize) -> bool {
        if score > self.cur_score {
            self.cur_score = score;
            true
        } else {
            false
        }
    }

    /// Record a bucket size; returns true when it is a new maximum.
    pub fn record_bucket(&mut self, count: usize) -> bool {
        if count > self.cur_max_sums {
            self.cur_max_sums = count;
            true
        } else {
            false
        }
    }

    /// Combine counters from another worker, taking the maximum of each.
    pub fn merge(&mut self, other: &SearchState) {
        self.step = self.step.max(other.step);
        self.shell = self.shell.max(other.shell);
        self.tests = self.tests.max(other.tests);
        self.cur_score = self.cur_score.max(other.cur_score);
        self.cur_max_sums = self.cur_max_sums.max(other.cur_max_sums);
    }
}
