// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Brute-force search predicates.
//!
//! The pipeline is
//!
//! ```text
//! Step -> Combination -> Count -> Anchor -> Permutation -> CandidateTest
//! ```
//!
//! For each step `s` (the root ceiling, growing without bound) every
//! 8-subset of the roots `[min_root-1, s-2]` is extended with `s-1`, pinned
//! by each anchor and permuted over the free cells. The candidate test is
//! terminal: it fails to ask for the next candidate, and suspends when a
//! magic square is found or the test budget runs out.

use tracing::{debug, info, warn};

use crate::combinatorics::{Combinations, Permutations};
use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult, TerminalPredicate};
use crate::grid::{render, squared_value, value_width, Root, Square, NCELLS};
use crate::state::Counters;
use crate::symmetry::ANCHORS;
use crate::tester::{check_lines, LinesMatched};

/// Pool values chosen per base; the step's own root makes nine.
const BASE_CHOICE: usize = NCELLS - 1;

/// Choose the step: `start`, `start + 1`, ….
#[derive(Debug)]
pub struct StepPredicate {
    start: Root,
}

impl StepPredicate {
    pub fn new(start: Root) -> Self {
        Self { start }
    }
}

impl Predicate for StepPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        // Keep `step + 1` representable.
        let steps = Root::MAX.saturating_sub(1).saturating_sub(self.start);
        if steps <= 0 {
            return PredicateResult::Failure;
        }
        PredicateResult::Choices(usize::try_from(steps).unwrap_or(usize::MAX))
    }

    fn retry_pred(&mut self, ctx: &mut SearchContext, _round: usize, choice: usize) -> PredicateResult {
        let Some(step) = Root::try_from(choice)
            .ok()
            .and_then(|offset| self.start.checked_add(offset))
        else {
            return PredicateResult::Failure;
        };
        ctx.state.step = step;
        ctx.statistics.increment_counter(Counters::Steps);
        info!("At step {}", step);
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "Step"
    }
}

/// Choose the base combination for the current step.
#[derive(Debug, Default)]
pub struct CombinationPredicate {
    combinations: Option<Combinations<Root>>,
}

impl CombinationPredicate {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Predicate for CombinationPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        let step = ctx.state.step;
        let mut pool: Vec<Root> = (ctx.config.min_root - 1..=step - 2).collect();
        ctx.shuffle(&mut pool);
        let combinations = Combinations::new(pool, BASE_CHOICE);
        let total = combinations.count_total().unwrap_or(usize::MAX);
        self.combinations = Some(combinations);
        if total == 0 {
            debug!("Step {} has no base combinations", step);
            PredicateResult::Failure
        } else {
            PredicateResult::Choices(total)
        }
    }

    fn retry_pred(&mut self, ctx: &mut SearchContext, _round: usize, _choice: usize) -> PredicateResult {
        let Some(mut base) = self.combinations.as_mut().and_then(Iterator::next) else {
            return PredicateResult::Failure;
        };
        base.push(ctx.state.step - 1);
        ctx.shuffle(&mut base);
        ctx.workspace.base = base;
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "Combination"
    }
}

/// Choose one of the twelve anchors and pin its cells.
#[derive(Debug, Default)]
pub struct AnchorPredicate;

impl AnchorPredicate {
    pub fn new() -> Self {
        Self
    }
}

impl Predicate for AnchorPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Choices(ANCHORS.len())
    }

    fn retry_pred(&mut self, ctx: &mut SearchContext, _round: usize, choice: usize) -> PredicateResult {
        let anchor = &ANCHORS[choice];
        let assignment = anchor.assign(&ctx.workspace.base);
        let workspace = &mut ctx.workspace;
        workspace.cells = [0; NCELLS];
        for (&position, &value) in assignment.fixed_positions.iter().zip(&assignment.fixed_values) {
            workspace.cells[position] = value;
        }
        workspace.free_positions = assignment.free_positions;
        workspace.free_values = assignment.free_values;
        ctx.statistics.increment_counter(Counters::AnchorPlacements);
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "Anchor"
    }
}

/// Choose an ordering of the free values over the free cells.
#[derive(Debug, Default)]
pub struct PermutationPredicate {
    permutations: Option<Permutations<Root>>,
}

impl PermutationPredicate {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Predicate for PermutationPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        let permutations = Permutations::new(ctx.workspace.free_values.clone());
        let total = permutations.count_total().unwrap_or(usize::MAX);
        self.permutations = Some(permutations);
        PredicateResult::Choices(total)
    }

    fn retry_pred(&mut self, ctx: &mut SearchContext, _round: usize, _choice: usize) -> PredicateResult {
        let Some(indices) = self.permutations.as_mut().and_then(Permutations::next_indices) else {
            return PredicateResult::Failure;
        };
        let workspace = &mut ctx.workspace;
        for (&position, &index) in workspace.free_positions.iter().zip(indices) {
            workspace.cells[position] = workspace.free_values[index];
        }
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "Permutation"
    }
}

/// Test the assembled candidate.
#[derive(Debug, Default)]
pub struct CandidateTestPredicate {
    seen_rows: bool,
}

impl CandidateTestPredicate {
    pub fn new() -> Self {
        Self::default()
    }

    fn report_status(ctx: &SearchContext, square: &Square) {
        let step = ctx.state.step;
        info!(
            "{} seconds in, after {} tests",
            ctx.progress.elapsed_secs(),
            ctx.state.tests
        );
        info!("Current square is:\n{}", render(square, value_width(step)));

        let limit = squared_value(step - 1);
        if square.max_value() > limit {
            warn!("Values are too large! Max should be {}", limit);
        }
        for value in square.duplicate_values() {
            warn!("Duplicate value in square: {}", value);
        }
    }

    fn report_stage(&mut self, stage: LinesMatched, square: &Square, width: usize) {
        if !self.seen_rows {
            self.seen_rows = true;
            info!(
                "Rows work:\n{}This is the last row-only update.",
                render(square, width)
            );
        }
        if stage >= LinesMatched::RowsAndColumns {
            info!("Rows+Cols work:\n{}", render(square, width));
        }
        if stage >= LinesMatched::MainDiagonal {
            info!("R+C+1diag works!:\n{}", render(square, width));
        }
    }
}

impl Predicate for CandidateTestPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        // A budget of zero tests nothing.
        if ctx.config.budget_reached(ctx.state.tests) {
            ctx.budget_exhausted = true;
            return PredicateResult::Suspend;
        }
        let square = ctx.workspace.square();
        ctx.state.tests += 1;

        let quiet = ctx.config.quiet;
        if !quiet && ctx.progress.due() {
            Self::report_status(ctx, &square);
        }

        let stage = check_lines(&square);
        if !quiet && stage >= LinesMatched::Rows {
            self.report_stage(stage, &square, value_width(ctx.state.step));
        }
        if stage == LinesMatched::All {
            if !quiet {
                info!(
                    "After {} seconds:\n{}",
                    ctx.progress.elapsed_secs(),
                    render(&square, value_width(ctx.state.step))
                );
            }
            ctx.solution = Some(square);
            return PredicateResult::Suspend;
        }
        if ctx.config.verbose {
            debug!("Tested {:?}", square.roots());
        }
        if ctx.config.budget_reached(ctx.state.tests) {
            ctx.budget_exhausted = true;
            return PredicateResult::Suspend;
        }
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "CandidateTest"
    }
}

impl TerminalPredicate for CandidateTestPredicate {}
