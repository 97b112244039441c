// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The brute-force candidate under construction.

use crate::grid::{Root, Square, NCELLS};

/// Cells and base values shared by the brute-force predicates.
///
/// Each predicate overwrites the part it owns on every choice, so nothing
/// has to be restored on backtracking:
/// - the combination predicate sets `base`
/// - the anchor predicate clears `cells`, pins the anchor cells and sets
///   `free_positions` / `free_values`
/// - the permutation predicate fills `free_positions`
#[derive(Debug, Clone, Default)]
pub struct Workspace {
    /// Eight pool roots plus the step's own root.
    pub base: Vec<Root>,
    pub free_positions: &'static [usize],
    pub free_values: Vec<Root>,
    pub cells: [Root; NCELLS],
}

impl Workspace {
    pub fn square(&self) -> Square {
        Square::new(self.cells)
    }
}
