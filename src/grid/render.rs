// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! ASCII rendering of a square with its row, column and diagonal sums.
//!
//! ```text
//!                 /= 75
//!    49    1   25  = 75
//!     1   25   49  = 75
//!    25   49    1  = 75
//!   ------------- \= 75
//!    75   75   75
//! ```
//!
//! The anti-diagonal sum is drawn above the grid, the main diagonal sum below
//! it, and the column sums on the last line.

use std::fmt::Write;

use super::lines::{line_sum, ANTI_DIAGONAL, COLUMNS, MAIN_DIAGONAL, ROWS};
use super::square::Square;

/// Display width needed for values up to `step^2`.
pub fn value_width(step: i64) -> usize {
    let max = i128::from(step) * i128::from(step);
    max.to_string().len()
}

/// Draw `square` using `width` characters per value.
pub fn render(square: &Square, width: usize) -> String {
    let values = square.squared();
    let cell = width + 1;
    let margin = cell * 3 + 4;
    let mut out = String::new();

    let _ = writeln!(
        out,
        "  {} /= {}",
        " ".repeat(margin),
        line_sum(&values, &ANTI_DIAGONAL)
    );
    for row in ROWS.iter() {
        let cells: Vec<String> = row
            .iter()
            .map(|&i| format!("{:>cell$}", values[i]))
            .collect();
        let _ = writeln!(out, "  {}  = {}", cells.join("  "), line_sum(&values, row));
    }
    let _ = writeln!(
        out,
        "  {} \\= {}",
        "-".repeat(margin),
        line_sum(&values, &MAIN_DIAGONAL)
    );
    let totals: Vec<String> = COLUMNS
        .iter()
        .map(|column| format!("{:>cell$}", line_sum(&values, column)))
        .collect();
    let _ = writeln!(out, "  {}", totals.join("  "));
    out
}
