// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Completes candidate squares from a bucket of pair sums.
//!
//! Three triples that share a sum and a vertex value `V` are three lines
//! through a common center. The builder places `V` at the center, lays the
//! three companion pairs out as the middle row, the middle column and the
//! main diagonal, and then tries the bucket's other values in the two
//! remaining corners:
//!
//! ```text
//!   d0  c0  ..
//!   r0   V  r1
//!   ..  c1  d1
//! ```
//!
//! Every completion is scored by [`crate::tester::evaluate`]; a score of 8 is
//! a solution.

use std::collections::BTreeSet;

use tracing::{info, trace};

use crate::combinatorics::{ordered_pairs, Combinations};
use crate::config::SearchConfig;
use crate::grid::{render, root_of, Root, Square, Value, CENTER, NCELLS};
use crate::pairs::SumTriple;
use crate::state::{Counters, SearchState, Statistics};
use crate::tester::evaluate;

/// Ways of giving three triples the roles (row, column, diagonal).
///
/// The other three orderings are reflections of these.
const ROLE_ARRANGEMENTS: [[usize; 3]; 3] = [[0, 1, 2], [0, 2, 1], [2, 1, 0]];

const ROW_CELLS: [usize; 2] = [3, 5];
const COLUMN_CELLS: [usize; 2] = [1, 7];
const DIAGONAL_CELLS: [usize; 2] = [0, 8];
const OPEN_CORNERS: [usize; 2] = [2, 6];

/// Placements produced from one selection of three triples.
pub const PLACEMENTS_PER_SELECTION: usize = ROLE_ARRANGEMENTS.len() * 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildOutcome {
    Solved(Square),
    Exhausted,
    BudgetReached,
}

#[derive(Debug)]
pub struct GraphSquareBuilder<'a> {
    bucket: &'a [SumTriple],
    vertex: Value,
}

impl<'a> GraphSquareBuilder<'a> {
    pub fn new(bucket: &'a [SumTriple], vertex: Value) -> Self {
        Self { bucket, vertex }
    }

    /// Choices of three triples that all contain the vertex.
    pub fn selections(&self) -> impl Iterator<Item = [SumTriple; 3]> + '_ {
        Combinations::new(self.bucket.to_vec(), 3).filter_map(move |selection| {
            let triples: [SumTriple; 3] = selection.try_into().ok()?;
            if triples.iter().all(|t| t.contains(self.vertex)) {
                Some(triples)
            } else {
                trace!("vertex {} missing from {:?}", self.vertex, triples);
                None
            }
        })
    }

    /// The squared values of every layout of `selection`, corners left at 0.
    pub fn placements(&self, selection: &[SumTriple; 3]) -> Vec<[Value; NCELLS]> {
        let mut placements = Vec::with_capacity(PLACEMENTS_PER_SELECTION);
        for arrangement in ROLE_ARRANGEMENTS {
            let [row, column, diagonal] =
                arrangement.map(|role| selection[role].companions(self.vertex));
            for row in orderings(row) {
                for column in orderings(column) {
                    for diagonal in orderings(diagonal) {
                        let mut values = [0; NCELLS];
                        values[CENTER] = self.vertex;
                        for (cells, pair) in [
                            (ROW_CELLS, row),
                            (COLUMN_CELLS, column),
                            (DIAGONAL_CELLS, diagonal),
                        ] {
                            values[cells[0]] = pair[0];
                            values[cells[1]] = pair[1];
                        }
                        placements.push(values);
                    }
                }
            }
        }
        placements
    }

    /// Roots of the bucket's values not already in `placement`, ascending.
    pub fn remainder(&self, placement: &[Value; NCELLS]) -> Vec<Root> {
        let possible: BTreeSet<Value> = self.bucket.iter().flat_map(SumTriple::values).collect();
        possible
            .into_iter()
            .filter(|value| !placement.contains(value))
            .map(root_of)
            .collect()
    }

    /// Try every completion of every selection.
    pub fn build(
        &self,
        config: &SearchConfig,
        state: &mut SearchState,
        statistics: &mut Statistics,
    ) -> BuildOutcome {
        let width = self.display_width();
        for selection in self.selections() {
            statistics.increment_counter(Counters::GraphSelections);
            for placement in self.placements(&selection) {
                statistics.increment_counter(Counters::GraphPlacements);
                let partial = Square::from_values(&placement);
                for (first, second) in ordered_pairs(&self.remainder(&placement)) {
                    let mut roots = *partial.roots();
                    roots[OPEN_CORNERS[0]] = first;
                    roots[OPEN_CORNERS[1]] = second;
                    let square = Square::new(roots);

                    if config.budget_reached(state.tests) {
                        return BuildOutcome::BudgetReached;
                    }
                    state.tests += 1;
                    let evaluation = evaluate(&square);
                    if state.record_score(evaluation.match_score) {
                        info!(
                            "Candidate is new top-score with {} matches\n{}",
                            evaluation.match_score,
                            render(&square, width)
                        );
                    }
                    if evaluation.is_magic {
                        return BuildOutcome::Solved(square);
                    }
                    if config.budget_reached(state.tests) {
                        return BuildOutcome::BudgetReached;
                    }
                }
            }
        }
        BuildOutcome::Exhausted
    }

    fn display_width(&self) -> usize {
        self.bucket
            .iter()
            .flat_map(SumTriple::values)
            .max()
            .map_or(1, |value| value.to_string().len())
    }
}

fn orderings(pair: [Value; 2]) -> [[Value; 2]; 2] {
    [pair, [pair[1], pair[0]]]
}
