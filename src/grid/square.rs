// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Roots, squared values and the 3×3 candidate grid.
//!
//! A cell holds a *root* `r`; the number that actually takes part in the
//! magic sums is the squared value `(r+1)^2`. Root `-1` is the sentinel for
//! "no valid root" and squares to `0`.
//!
//! Roots are `i64` and values `u128`: `(r+1)^2 <= 2^126` for every `i64`
//! root, so a value, and any sum of three values, fits without overflow.

use std::collections::BTreeSet;

/// A zero-based root. Legitimate roots are `>= 0`.
pub type Root = i64;

/// A squared value `(root + 1)^2`.
pub type Value = u128;

/// Number of cells in the grid.
pub const NCELLS: usize = 9;

/// Index of the center cell.
pub const CENTER: usize = 4;

/// Root used for cells that have no valid value.
pub const NO_ROOT: Root = -1;

/// Square a root: `(root + 1)^2`.
#[inline]
pub fn squared_value(root: Root) -> Value {
    let r = i128::from(root) + 1;
    (r * r) as Value
}

/// Inverse of [`squared_value`] for perfect squares.
///
/// `0` maps to [`NO_ROOT`]. Values that are not perfect squares round down.
#[inline]
pub fn root_of(value: Value) -> Root {
    if value == 0 {
        return NO_ROOT;
    }
    Root::try_from(value.isqrt()).map_or(Root::MAX, |r| r - 1)
}

/// A 3×3 grid of roots in row-major order.
///
/// No uniqueness is enforced: a grid with repeated roots is a valid (if
/// uninteresting) candidate, see [`Square::duplicate_values`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    roots: [Root; NCELLS],
}

impl Square {
    pub fn new(roots: [Root; NCELLS]) -> Self {
        Self { roots }
    }

    /// Build a grid from squared values, mapping each back with [`root_of`].
    pub fn from_values(values: &[Value; NCELLS]) -> Self {
        Self {
            roots: values.map(root_of),
        }
    }

    pub fn roots(&self) -> &[Root; NCELLS] {
        &self.roots
    }

    pub fn root(&self, cell: usize) -> Root {
        self.roots[cell]
    }

    /// The squared values of the grid.
    pub fn squared(&self) -> [Value; NCELLS] {
        self.roots.map(squared_value)
    }

    pub fn max_value(&self) -> Value {
        self.squared().into_iter().max().unwrap_or(0)
    }

    /// Values that occur more than once, in ascending order.
    pub fn duplicate_values(&self) -> Vec<Value> {
        let mut seen = BTreeSet::new();
        let mut duplicates = BTreeSet::new();
        for value in self.squared() {
            if !seen.insert(value) {
                duplicates.insert(value);
            }
        }
        duplicates.into_iter().collect()
    }
}

impl From<[Root; NCELLS]> for Square {
    fn from(roots: [Root; NCELLS]) -> Self {
        Self::new(roots)
    }
}
