// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Graph search predicates.
//!
//! ```text
//! Shell -> Pair -> GraphBuild
//! ```
//!
//! Shell `i` fixes the vertex `(i+1)^2`. The pair predicate files each pair
//! of smaller squares in the [`PairSumIndex`](crate::pairs::PairSumIndex) and
//! succeeds only for pairs whose bucket is worth building from; the build
//! predicate then runs the [`GraphSquareBuilder`] on that bucket.

use tracing::{debug, info};

use crate::builder::{BuildOutcome, GraphSquareBuilder};
use crate::combinatorics::Combinations;
use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult, TerminalPredicate};
use crate::grid::{squared_value, Root};
use crate::pairs::{should_emit, Emission};
use crate::state::Counters;

/// The builder needs three lines through the center.
const MIN_BUCKET: usize = 3;

/// Choose the shell: 0, 1, 2, …, optionally capped.
#[derive(Debug)]
pub struct ShellPredicate {
    max_shells: Option<u64>,
}

impl ShellPredicate {
    pub fn new(max_shells: Option<u64>) -> Self {
        Self { max_shells }
    }
}

impl Predicate for ShellPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        // Keep `shell + 1` representable.
        let unbounded = usize::try_from(Root::MAX - 1).unwrap_or(usize::MAX);
        let shells = match self.max_shells {
            Some(max) => usize::try_from(max).unwrap_or(usize::MAX).min(unbounded),
            None => unbounded,
        };
        if shells == 0 {
            PredicateResult::Failure
        } else {
            PredicateResult::Choices(shells)
        }
    }

    fn retry_pred(&mut self, ctx: &mut SearchContext, _round: usize, choice: usize) -> PredicateResult {
        let Ok(shell) = Root::try_from(choice) else {
            return PredicateResult::Failure;
        };
        ctx.state.shell = shell;
        ctx.statistics.increment_counter(Counters::Shells);
        debug!("Shell {} (vertex {})", shell, squared_value(shell));
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "Shell"
    }
}

/// File each pair below the current shell; succeed when its bucket is emitted.
#[derive(Debug, Default)]
pub struct PairPredicate {
    pairs: Option<Combinations<Root>>,
}

impl PairPredicate {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Predicate for PairPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        let shell = ctx.state.shell;
        let pairs = Combinations::new((0..shell).collect(), 2);
        let total = pairs.count_total().unwrap_or(usize::MAX);
        self.pairs = Some(pairs);
        if total == 0 {
            PredicateResult::Failure
        } else {
            PredicateResult::Choices(total)
        }
    }

    fn retry_pred(&mut self, ctx: &mut SearchContext, _round: usize, _choice: usize) -> PredicateResult {
        let Some(pair) = self.pairs.as_mut().and_then(Iterator::next) else {
            return PredicateResult::Failure;
        };
        let [j, k] = pair[..] else {
            return PredicateResult::Failure;
        };
        let shell = ctx.state.shell;
        let insertion = ctx.pairs.insert(shell, j, k);
        ctx.statistics.increment_counter(Counters::PairsIndexed);

        let previous_max = ctx.state.cur_max_sums;
        if ctx.state.record_bucket(insertion.count) {
            info!(
                "{} matches for sum {}: {:?}",
                insertion.count,
                insertion.sum,
                ctx.pairs.bucket(insertion.sum)
            );
        } else if ctx.config.verbose && insertion.count == previous_max {
            debug!(
                "{} matches for sum {}: {:?}",
                insertion.count,
                insertion.sum,
                ctx.pairs.bucket(insertion.sum)
            );
        }

        let emit = should_emit(
            insertion.count,
            ctx.state.cur_max_sums,
            ctx.state.cur_score,
            ctx.config.skip_short_entries,
        );
        if !emit || insertion.count < MIN_BUCKET {
            return PredicateResult::Failure;
        }
        ctx.emission = Some(Emission {
            sum: insertion.sum,
            vertex: squared_value(shell),
        });
        ctx.statistics.increment_counter(Counters::BucketsEmitted);
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "Pair"
    }
}

/// Build squares from the emitted bucket.
#[derive(Debug, Default)]
pub struct GraphBuildPredicate;

impl GraphBuildPredicate {
    pub fn new() -> Self {
        Self
    }
}

impl Predicate for GraphBuildPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        let Some(emission) = ctx.emission.take() else {
            return PredicateResult::Failure;
        };
        let builder = GraphSquareBuilder::new(ctx.pairs.bucket(emission.sum), emission.vertex);
        match builder.build(&ctx.config, &mut ctx.state, &mut ctx.statistics) {
            BuildOutcome::Solved(square) => {
                ctx.solution = Some(square);
                PredicateResult::Suspend
            }
            BuildOutcome::BudgetReached => {
                ctx.budget_exhausted = true;
                PredicateResult::Suspend
            }
            BuildOutcome::Exhausted => PredicateResult::Failure,
        }
    }

    fn name(&self) -> &str {
        "GraphBuild"
    }
}

impl TerminalPredicate for GraphBuildPredicate {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SearchConfig;
    use crate::engine::EngineBuilder;
    use crate::predicates::FailPredicate;

    fn quiet_ctx() -> SearchContext {
        SearchContext::new(SearchConfig {
            quiet: true,
            ..SearchConfig::default()
        })
    }

    #[test]
    fn test_max_shells_caps_the_shells() {
        let mut ctx = quiet_ctx();
        let engine = EngineBuilder::new()
            .add(Box::new(ShellPredicate::new(Some(5))))
            .terminal(Box::new(FailPredicate))
            .build();
        assert!(engine.search(&mut ctx).is_none());
        assert_eq!(ctx.statistics.get(Counters::Shells), 5);
        assert_eq!(ctx.state.shell, 4);
    }

    #[test]
    fn test_zero_shells() {
        let mut pred = ShellPredicate::new(Some(0));
        assert_eq!(pred.try_pred(&mut quiet_ctx(), 0), PredicateResult::Failure);
    }

    #[test]
    fn test_pairs_of_a_shell() {
        let mut ctx = quiet_ctx();
        ctx.state.shell = 8;
        let engine = EngineBuilder::new()
            .add(Box::new(PairPredicate::new()))
            .terminal(Box::new(FailPredicate))
            .build();
        assert!(engine.search(&mut ctx).is_none());
        assert_eq!(ctx.statistics.get(Counters::PairsIndexed), 28);
        assert_eq!(ctx.pairs.total_triples(), 28);
        // 1 + 64 + 81 == 16 + 49 + 81
        assert!(ctx.pairs.bucket(146).len() >= 2);
        assert_eq!(ctx.state.cur_max_sums, ctx.pairs.max_sums());
    }

    #[test]
    fn test_shells_below_two_have_no_pairs() {
        let mut ctx = quiet_ctx();
        ctx.state.shell = 1;
        let mut pred = PairPredicate::new();
        assert_eq!(pred.try_pred(&mut ctx, 0), PredicateResult::Failure);
    }

    #[test]
    fn test_build_without_emission_fails() {
        let mut ctx = quiet_ctx();
        let mut pred = GraphBuildPredicate::new();
        assert_eq!(pred.try_pred(&mut ctx, 0), PredicateResult::Failure);
    }

    #[test]
    fn test_build_consumes_the_emission() {
        let mut ctx = quiet_ctx();
        for (j, k) in [(0, 1), (2, 3), (4, 5)] {
            ctx.pairs.insert(9, j, k);
        }
        let sum = ctx.pairs.insert(9, 6, 7).sum;
        ctx.emission = Some(Emission {
            sum,
            vertex: 100,
        });
        let mut pred = GraphBuildPredicate::new();
        assert_eq!(pred.try_pred(&mut ctx, 0), PredicateResult::Failure);
        assert!(ctx.emission.is_none());
        assert!(ctx.solution.is_none());
    }
}
