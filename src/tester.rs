// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Magic property tests for candidate squares.
//!
//! Two modes are provided:
//!
//! - **Strict** ([`check_lines`], [`is_magic`]): rows, then columns, then the
//!   main diagonal, then the anti-diagonal are compared against the first row
//!   sum, stopping at the first line that differs. This is the hot path of the
//!   brute-force search.
//! - **Scoring** ([`match_score`], [`evaluate`]): all eight sums are computed
//!   and the size of the largest group of equal sums is returned. A score of
//!   8 means the square is magic.

use crate::grid::lines::{line_sum, line_sums, ANTI_DIAGONAL, COLUMNS, MAIN_DIAGONAL, ROWS};
use crate::grid::Square;

/// How far the strict test got before a line failed.
///
/// Ordered, so `stage >= LinesMatched::Rows` means "at least the rows match".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LinesMatched {
    /// Some row differs from the first row.
    None,
    /// All rows share a sum; some column does not.
    Rows,
    /// Rows and columns match; the main diagonal does not.
    RowsAndColumns,
    /// Rows, columns and the main diagonal match; the anti-diagonal does not.
    MainDiagonal,
    /// Magic.
    All,
}

/// Result of a scoring-mode evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub is_magic: bool,
    pub match_score: usize,
}

/// Strict test, short-circuiting at the first mismatching line.
pub fn check_lines(square: &Square) -> LinesMatched {
    let values = square.squared();
    let target = line_sum(&values, &ROWS[0]);

    if ROWS[1..].iter().any(|row| line_sum(&values, row) != target) {
        return LinesMatched::None;
    }
    if COLUMNS.iter().any(|column| line_sum(&values, column) != target) {
        return LinesMatched::Rows;
    }
    if line_sum(&values, &MAIN_DIAGONAL) != target {
        return LinesMatched::RowsAndColumns;
    }
    if line_sum(&values, &ANTI_DIAGONAL) != target {
        return LinesMatched::MainDiagonal;
    }
    LinesMatched::All
}

pub fn is_magic(square: &Square) -> bool {
    check_lines(square) == LinesMatched::All
}

/// Size of the largest group of equal line sums (1..=8).
pub fn match_score(square: &Square) -> usize {
    let mut sums = line_sums(&square.squared());
    sums.sort_unstable();

    let mut best = 0;
    let mut run = 0;
    for (i, sum) in sums.iter().enumerate() {
        if i > 0 && sums[i - 1] == *sum {
            run += 1;
        } else {
            run = 1;
        }
        best = best.max(run);
    }
    best
}

/// Scoring-mode evaluation; `is_magic` is exactly `match_score == 8`.
pub fn evaluate(square: &Square) -> Evaluation {
    let match_score = match_score(square);
    Evaluation {
        is_magic: match_score == 8,
        match_score,
    }
}
