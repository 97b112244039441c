// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search for a 3×3 magic square of squares.
//!
//! A magic square of squares is a grid of nine perfect squares whose rows,
//! columns and both diagonals share one sum. Whether one with nine distinct
//! entries exists is an open problem; this crate searches for one.
//!
//! # Architecture
//!
//! Squares are held as roots: the root `r` stands for the value `(r+1)^2`,
//! and `-1` marks an empty cell. Values are `u128`, so every square of an
//! `i64` root and every line sum fits without overflow checks.
//!
//! Both strategies run as predicate pipelines on the backtracking
//! [`SearchEngine`], threading an explicit [`SearchContext`] through every
//! predicate.
//!
//! ## Brute force
//!
//! 1. **StepPredicate**: raise the root ceiling `s` one step at a time
//! 2. **CombinationPredicate**: choose 8 roots below `s-1`, add `s-1`
//! 3. **AnchorPredicate**: pin 2 or 3 values to break the grid's symmetry
//! 4. **PermutationPredicate**: order the rest over the free cells
//! 5. **CandidateTestPredicate**: strict line test, budget check
//!
//! ## Graph
//!
//! 1. **ShellPredicate**: fix the center value `(i+1)^2`
//! 2. **PairPredicate**: file pairs of smaller squares by their sum with the
//!    center in a [`pairs::PairSumIndex`]
//! 3. **GraphBuildPredicate**: complete squares from buckets holding three or
//!    more lines through the center
//!
//! # Entry points
//!
//! [`brute_force_find`] and [`graph_find`], or the [`SquareFinder`] trait.

pub mod builder;
pub mod combinatorics;
pub mod config;
pub mod context;
pub mod engine;
pub mod finder;
pub mod grid;
pub mod pairs;
pub mod predicates;
pub mod state;
pub mod symmetry;
pub mod tester;

// Re-export commonly used types
pub use config::{ConfigError, SearchConfig};
pub use context::SearchContext;
pub use engine::{Predicate, PredicateResult, SearchEngine};
pub use finder::{
    brute_force_find, graph_find, BruteForceFinder, FindOutcome, GraphFinder, SearchReport,
    SquareFinder,
};
pub use grid::{render, Square};
