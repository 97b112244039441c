// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for the search engine.
//!
//! These tests validate that the engine correctly:
//! - Runs predicates in sequence
//! - Handles Choices and retry_pred correctly
//! - Backtracks on failure
//! - Supports SuccessSamePredicate for multi-round predicates
//! - Suspends execution when requested, and resumes after it

mod common;

use common::{AlwaysFailPredicate, MultiRoundPredicate, StepRangePredicate};
use mss_search::context::SearchContext;
use mss_search::engine::EngineBuilder;
use mss_search::predicates::{FailPredicate, SuspendPredicate};
use mss_search::state::{Counters, Statistics};

#[test]
fn test_simple_step_search_with_suspend() {
    let mut ctx = SearchContext::default();
    let engine = EngineBuilder::new()
        .add(Box::new(StepRangePredicate { start: 9, end: 20 }))
        .terminal(Box::new(SuspendPredicate))
        .build();

    // Should suspend after first predicate succeeds
    let engine = engine.search(&mut ctx);
    assert!(engine.is_some()); // Suspended
    let engine = engine.unwrap();
    let (tries, retries) = engine.statistics();
    assert_eq!(tries, 2); // StepRange.try_pred + Suspend.try_pred
    assert_eq!(retries, 1); // StepRange.retry_pred(choice=0)
    assert_eq!(ctx.state.step, 9);
}

#[test]
fn test_resume_continues_with_next_choice() {
    let mut ctx = SearchContext::default();
    let engine = EngineBuilder::new()
        .add(Box::new(StepRangePredicate { start: 9, end: 20 }))
        .terminal(Box::new(SuspendPredicate))
        .build();

    let engine = engine.search(&mut ctx).unwrap();
    let engine = engine.search(&mut ctx).unwrap();
    assert_eq!(ctx.state.step, 10);
    let (tries, retries) = engine.statistics();
    assert_eq!(tries, 3);
    assert_eq!(retries, 2);
}

#[test]
fn test_resume_until_exhausted() {
    let mut ctx = SearchContext::default();
    let mut engine = Some(
        EngineBuilder::new()
            .add(Box::new(StepRangePredicate { start: 3, end: 6 }))
            .terminal(Box::new(SuspendPredicate))
            .build(),
    );

    let mut seen = Vec::new();
    while let Some(running) = engine {
        engine = running.search(&mut ctx);
        if engine.is_some() {
            seen.push(ctx.state.step);
        }
    }
    assert_eq!(seen, vec![3, 4, 5]);
}

#[test]
fn test_two_step_ranges() {
    let mut ctx = SearchContext::default();
    let engine = EngineBuilder::new()
        .add(Box::new(StepRangePredicate { start: 1, end: 3 }))
        .add(Box::new(StepRangePredicate { start: 10, end: 12 }))
        .terminal(Box::new(SuspendPredicate))
        .build();

    // Should find solution with first choice of each
    let engine = engine.search(&mut ctx);
    assert!(engine.is_some()); // Suspended
    let engine = engine.unwrap();
    let (tries, retries) = engine.statistics();
    assert_eq!(tries, 3); // All three predicates tried
    assert_eq!(retries, 2); // One retry_pred call per range
    assert_eq!(ctx.state.step, 10);
}

#[test]
fn test_backtracking_with_failure() {
    let mut ctx = SearchContext::default();
    let engine = EngineBuilder::new()
        .add(Box::new(StepRangePredicate { start: 1, end: 3 }))
        .add(Box::new(AlwaysFailPredicate)) // Force backtracking
        .terminal(Box::new(SuspendPredicate))
        .build();

    // Should fail - second predicate always fails
    let result = engine.search(&mut ctx);
    assert!(result.is_none()); // Exhausted - engine consumed
}

#[test]
fn test_backtracking_exhausts_options() {
    let mut ctx = SearchContext::default();

    // 3 x 3 combinations, every one rejected
    let engine = EngineBuilder::new()
        .add(Box::new(StepRangePredicate { start: 1, end: 4 }))
        .add(Box::new(StepRangePredicate { start: 10, end: 13 }))
        .add(Statistics::counting_predicate(Counters::Steps, None))
        .terminal(Box::new(FailPredicate))
        .build();

    let result = engine.search(&mut ctx);
    assert!(result.is_none()); // Exhausted - engine consumed
    assert_eq!(ctx.statistics.get(Counters::Steps), 9);
}

#[test]
fn test_counting_filter() {
    let mut ctx = SearchContext::default();
    let even: fn(&SearchContext) -> bool = |ctx| ctx.state.step % 2 == 0;
    let engine = EngineBuilder::new()
        .add(Box::new(StepRangePredicate { start: 1, end: 11 }))
        .add(Statistics::counting_predicate(Counters::Steps, Some(even)))
        .terminal(Box::new(FailPredicate))
        .build();

    assert!(engine.search(&mut ctx).is_none());
    assert_eq!(ctx.statistics.get(Counters::Steps), 5);
}

#[test]
fn test_empty_search_space() {
    let mut ctx = SearchContext::default();
    let engine = EngineBuilder::new()
        .add(Box::new(StepRangePredicate { start: 5, end: 5 })) // Empty range
        .terminal(Box::new(SuspendPredicate))
        .build();

    let result = engine.search(&mut ctx);
    assert!(result.is_none()); // Exhausted - engine consumed
}

#[test]
fn test_multi_round_predicate() {
    let mut ctx = SearchContext::default();

    // This predicate will execute 3 times (rounds 0, 1, 2)
    let engine = EngineBuilder::new()
        .add(Box::new(MultiRoundPredicate { rounds: 3 }))
        .terminal(Box::new(SuspendPredicate))
        .build();

    let engine = engine.search(&mut ctx);
    assert!(engine.is_some()); // Suspended
    let engine = engine.unwrap();
    let (tries, retries) = engine.statistics();

    // Should call try_pred 4 times: MultiRound(0, 1, 2) + Suspend
    assert_eq!(tries, 4);
    assert_eq!(retries, 0); // No retry_pred calls
    assert_eq!(ctx.state.tests, 3);
}

#[test]
fn test_multi_round_predicate_is_not_rerun_on_backtrack() {
    let mut ctx = SearchContext::default();
    let engine = EngineBuilder::new()
        .add(Box::new(MultiRoundPredicate { rounds: 3 }))
        .terminal(Box::new(FailPredicate))
        .build();

    assert!(engine.search(&mut ctx).is_none());
    assert_eq!(ctx.state.tests, 3);
}

#[test]
fn test_empty_predicates() {
    let mut ctx = SearchContext::default();
    let engine = EngineBuilder::new()
        .terminal(Box::new(SuspendPredicate))
        .build();

    let result = engine.search(&mut ctx);
    assert!(result.is_some()); // Actually suspends immediately with just terminal
}
