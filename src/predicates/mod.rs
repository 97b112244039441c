// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search predicates.
//!
//! This module contains the predicates used by both search strategies.
//! Each predicate represents a choice point in the search space.
//!
//! # Organization
//!
//! - `brute_force`: step, combination, anchor, permutation and candidate test
//! - `graph`: shell, pair and square-building predicates
//! - Built-in predicates: `FailPredicate`, `SuspendPredicate`

pub mod brute_force;
pub mod graph;

pub use brute_force::{
    AnchorPredicate, CandidateTestPredicate, CombinationPredicate, PermutationPredicate,
    StepPredicate,
};
pub use graph::{GraphBuildPredicate, PairPredicate, ShellPredicate};

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult, TerminalPredicate};

/// Built-in fail predicate (Prolog's `fail.`).
///
/// This predicate always fails, forcing backtracking. Ending a sequence with
/// it makes the engine visit every alternative.
///
/// # Example
///
/// ```
/// use mss_search::engine::EngineBuilder;
/// use mss_search::predicates::{FailPredicate, PermutationPredicate};
/// use mss_search::context::SearchContext;
///
/// let mut ctx = SearchContext::default();
/// ctx.workspace.free_positions = &[0, 1, 2];
/// ctx.workspace.free_values = vec![0, 1, 2];
/// let engine = EngineBuilder::new()
///     .add(Box::new(PermutationPredicate::new()))
///     .terminal(Box::new(FailPredicate))
///     .build();
///
/// // Engine will exhaust all six orderings then fail
/// let result = engine.search(&mut ctx);
/// assert!(result.is_none());
/// ```
#[derive(Debug)]
pub struct FailPredicate;

impl Predicate for FailPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Fail"
    }
}

impl TerminalPredicate for FailPredicate {}

/// Built-in suspend predicate.
///
/// Hands control back to the caller with the engine state intact; calling
/// `search` again resumes with the next alternative.
#[derive(Debug)]
pub struct SuspendPredicate;

impl Predicate for SuspendPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Suspend
    }

    fn name(&self) -> &str {
        "Suspend"
    }
}

impl TerminalPredicate for SuspendPredicate {}
