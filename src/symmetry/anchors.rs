// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Anchors: symmetry-breaking placements for the brute-force search.
//!
//! A 3×3 square and its reflections and rotations are magic together, so a
//! search that tries every ordering of nine values tests each class of
//! equivalent squares several times. An anchor pins the first two or three
//! values of a base combination to fixed cells; the remaining values are then
//! permuted over the free cells only. The twelve anchors cover the distinct
//! classes of corner/edge placement, with and without the center fixed.
//!
//! Each anchor is a list of `(position, rank)` pins: the value at `base[rank]`
//! goes to cell `position`.

use crate::grid::{Root, NCELLS};

/// Free cells for two-pin anchors that do not use cell 6.
const FREE_TWO: [usize; 7] = [2, 3, 4, 5, 6, 7, 8];
/// Free cells for two-pin anchors that use cell 6.
const FREE_TWO_WITH_SIX: [usize; 7] = [1, 2, 3, 4, 5, 7, 8];
/// Free cells for three-pin anchors that do not use cell 6.
const FREE_THREE: [usize; 6] = [2, 3, 5, 6, 7, 8];
/// Free cells for three-pin anchors that use cell 6.
const FREE_THREE_WITH_SIX: [usize; 6] = [1, 2, 3, 5, 7, 8];

/// A set of `(position, rank)` pins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    pins: &'static [(usize, usize)],
}

/// The twelve predefined anchors.
pub const ANCHORS: [Anchor; 12] = [
    Anchor::new(&[(0, 0), (1, 1)]),
    Anchor::new(&[(0, 0), (6, 1)]),
    Anchor::new(&[(0, 1), (1, 0)]),
    Anchor::new(&[(0, 1), (6, 0)]),
    Anchor::new(&[(0, 0), (1, 2), (4, 1)]),
    Anchor::new(&[(0, 0), (6, 2), (4, 1)]),
    Anchor::new(&[(0, 2), (1, 0), (4, 1)]),
    Anchor::new(&[(0, 2), (6, 0), (4, 1)]),
    Anchor::new(&[(0, 1), (1, 2), (4, 0)]),
    Anchor::new(&[(0, 1), (6, 2), (4, 0)]),
    Anchor::new(&[(0, 2), (1, 1), (4, 0)]),
    Anchor::new(&[(0, 2), (6, 1), (4, 0)]),
];

/// Where an anchor puts a base combination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorAssignment {
    pub fixed_positions: Vec<usize>,
    pub fixed_values: Vec<Root>,
    pub free_positions: &'static [usize],
    /// Values still to be permuted over `free_positions`.
    pub free_values: Vec<Root>,
}

impl Anchor {
    const fn new(pins: &'static [(usize, usize)]) -> Self {
        Self { pins }
    }

    pub fn pins(&self) -> &'static [(usize, usize)] {
        self.pins
    }

    /// Number of pinned cells (2 or 3).
    pub fn len(&self) -> usize {
        self.pins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }

    pub fn fixed_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.pins.iter().map(|&(position, _)| position)
    }

    /// Cells left for the permuted values.
    pub fn free_positions(&self) -> &'static [usize] {
        let uses_six = self.fixed_positions().any(|p| p == 6);
        match (self.pins.len(), uses_six) {
            (2, false) => &FREE_TWO,
            (2, true) => &FREE_TWO_WITH_SIX,
            (_, false) => &FREE_THREE,
            (_, true) => &FREE_THREE_WITH_SIX,
        }
    }

    /// Apply the anchor to a 9-element base combination.
    ///
    /// The pinned values are the first `len()` entries of `base` (in pin
    /// order, via their ranks); the rest are left for the free cells.
    pub fn assign(&self, base: &[Root]) -> AnchorAssignment {
        debug_assert_eq!(base.len(), NCELLS, "base combination must fill the grid");
        AnchorAssignment {
            fixed_positions: self.fixed_positions().collect(),
            fixed_values: self.pins.iter().map(|&(_, rank)| base[rank]).collect(),
            free_positions: self.free_positions(),
            free_values: base[self.pins.len()..].to_vec(),
        }
    }
}

/// Number of candidates one base combination produces across all anchors.
pub fn candidates_per_base() -> usize {
    ANCHORS
        .iter()
        .map(|anchor| {
            crate::combinatorics::factorial(anchor.free_positions().len()).unwrap_or(usize::MAX)
        })
        .sum()
}
