// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context: everything one run of one strategy reads and writes.
//!
//! The context is passed to every predicate. It combines:
//! - the immutable `SearchConfig`
//! - the `SearchState` counters and `Statistics`
//! - the brute-force `Workspace`
//! - the graph strategy's `PairSumIndex` and the bucket last emitted from it
//! - the solution, once found
//!
//! A fresh context is created per run, which keeps runs deterministic and
//! independent of each other.

pub mod workspace;

pub use workspace::Workspace;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::config::SearchConfig;
use crate::grid::Square;
use crate::pairs::{Emission, PairSumIndex};
use crate::state::{Progress, SearchState, Statistics};

#[derive(Debug)]
pub struct SearchContext {
    pub config: SearchConfig,
    pub state: SearchState,
    pub statistics: Statistics,
    pub progress: Progress,
    /// Brute force: the candidate being assembled.
    pub workspace: Workspace,
    /// Graph: buckets of pair sums, retained for the whole run.
    pub pairs: PairSumIndex,
    /// Graph: the bucket handed from the pair predicate to the builder.
    pub emission: Option<Emission>,
    pub solution: Option<Square>,
    /// Set when the `max_tests` budget stopped the run.
    pub budget_exhausted: bool,
    /// Only present when `random_combinations` is set.
    rng: Option<StdRng>,
}

impl SearchContext {
    pub fn new(config: SearchConfig) -> Self {
        let rng = config.random_combinations.then(|| match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        });
        Self {
            progress: Progress::new(config.update),
            config,
            state: SearchState::new(),
            statistics: Statistics::new(),
            workspace: Workspace::default(),
            pairs: PairSumIndex::new(),
            emission: None,
            solution: None,
            budget_exhausted: false,
            rng,
        }
    }

    /// Shuffle `items` when `random_combinations` is set; otherwise leave them.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        if let Some(rng) = self.rng.as_mut() {
            items.shuffle(rng);
        }
    }
}

impl Default for SearchContext {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}
