// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search strategies behind one interface.
//!
//! A [`SquareFinder`] validates a [`SearchConfig`], builds its predicate
//! pipeline and runs it on a fresh [`SearchContext`]. The two strategies
//! share nothing but the tester and the square arithmetic.
//!
//! ```
//! use mss_search::config::SearchConfig;
//! use mss_search::finder::{brute_force_find, FindOutcome};
//!
//! let config = SearchConfig {
//!     max_tests: Some(1000),
//!     quiet: true,
//!     ..SearchConfig::default()
//! };
//! let report = brute_force_find(&config).unwrap();
//! assert_eq!(report.outcome, FindOutcome::NotFound);
//! assert_eq!(report.state.tests, 1000);
//! ```

use std::time::Duration;

use tracing::{debug, info};

use crate::config::{ConfigError, SearchConfig};
use crate::context::SearchContext;
use crate::engine::{EngineBuilder, SearchEngine};
use crate::grid::{render, Square};
use crate::predicates::{
    AnchorPredicate, CandidateTestPredicate, CombinationPredicate, GraphBuildPredicate,
    PairPredicate, PermutationPredicate, ShellPredicate, StepPredicate,
};
use crate::state::{Counters, SearchState, Statistics};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FindOutcome {
    Found(Square),
    /// The budget ran out or the search space was exhausted.
    NotFound,
}

/// Everything a finished run reports.
#[derive(Debug, Clone)]
pub struct SearchReport {
    pub outcome: FindOutcome,
    pub state: SearchState,
    pub statistics: Statistics,
    /// The brute-force candidate assembled last. Unused by the graph search.
    pub last_candidate: Square,
    pub elapsed: Duration,
}

impl SearchReport {
    pub fn solution(&self) -> Option<&Square> {
        match &self.outcome {
            FindOutcome::Found(square) => Some(square),
            FindOutcome::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        self.solution().is_some()
    }

    /// The solution drawn with its sums.
    pub fn render_solution(&self) -> Option<String> {
        self.solution()
            .map(|square| render(square, square.max_value().to_string().len()))
    }
}

/// A strategy for finding a magic square of squares.
pub trait SquareFinder {
    fn name(&self) -> &'static str;

    /// Reject configurations the strategy cannot run.
    fn validate(&self, _config: &SearchConfig) -> Result<(), ConfigError> {
        Ok(())
    }

    /// The predicate pipeline for `config`.
    fn engine(&self, config: &SearchConfig) -> SearchEngine;

    /// Run until a square is found, the budget runs out or the space ends.
    fn find(&self, config: &SearchConfig) -> Result<SearchReport, ConfigError> {
        self.validate(config)?;
        let mut ctx = SearchContext::new(config.clone());
        info!("Starting {} search", self.name());

        let engine = self.engine(config);
        // A suspended engine is not resumed: one solution is enough.
        let suspended = engine.search(&mut ctx);
        if let Some(engine) = &suspended {
            let (tries, retries) = engine.statistics();
            debug!("Engine: {} tries, {} retries", tries, retries);
        }

        let elapsed = ctx.progress.elapsed();
        let outcome = match ctx.solution.take() {
            Some(square) => FindOutcome::Found(square),
            None => FindOutcome::NotFound,
        };
        match &outcome {
            FindOutcome::Found(_) => info!(
                "{} search found a square after {} tests in {:.1?}",
                self.name(),
                ctx.state.tests,
                elapsed
            ),
            FindOutcome::NotFound if ctx.budget_exhausted => info!(
                "{} search stopped at its budget after {} tests",
                self.name(),
                ctx.state.tests
            ),
            FindOutcome::NotFound => info!(
                "{} search exhausted after {} tests",
                self.name(),
                ctx.state.tests
            ),
        }
        for (counter, count) in ctx.statistics.summary() {
            debug!("{}: {}", counter, count);
        }

        Ok(SearchReport {
            outcome,
            last_candidate: ctx.workspace.square(),
            state: ctx.state,
            statistics: ctx.statistics,
            elapsed,
        })
    }
}

/// Enumerate bases, anchors and permutations step by step.
#[derive(Debug, Default, Clone, Copy)]
pub struct BruteForceFinder;

impl SquareFinder for BruteForceFinder {
    fn name(&self) -> &'static str {
        "brute-force"
    }

    fn validate(&self, config: &SearchConfig) -> Result<(), ConfigError> {
        config.validate_roots()
    }

    fn engine(&self, config: &SearchConfig) -> SearchEngine {
        EngineBuilder::new()
            .add(Box::new(StepPredicate::new(config.step)))
            .add(Box::new(CombinationPredicate::new()))
            .add(Statistics::counting_predicate(Counters::Combinations, None))
            .add(Box::new(AnchorPredicate::new()))
            .add(Box::new(PermutationPredicate::new()))
            .terminal(Box::new(CandidateTestPredicate::new()))
            .build()
    }
}

/// Build squares from coincident pair sums around a shared center.
#[derive(Debug, Default, Clone, Copy)]
pub struct GraphFinder;

impl SquareFinder for GraphFinder {
    fn name(&self) -> &'static str {
        "graph"
    }

    fn engine(&self, config: &SearchConfig) -> SearchEngine {
        EngineBuilder::new()
            .add(Box::new(ShellPredicate::new(config.max_shells)))
            .add(Box::new(PairPredicate::new()))
            .terminal(Box::new(GraphBuildPredicate::new()))
            .build()
    }
}

pub fn brute_force_find(config: &SearchConfig) -> Result<SearchReport, ConfigError> {
    BruteForceFinder.find(config)
}

pub fn graph_find(config: &SearchConfig) -> Result<SearchReport, ConfigError> {
    GraphFinder.find(config)
}
