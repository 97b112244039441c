// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The eight lines of a 3×3 grid.

use super::square::{Value, NCELLS};

/// Cell indices of one row, column or diagonal.
pub type Line = [usize; 3];

pub const ROWS: [Line; 3] = [[0, 1, 2], [3, 4, 5], [6, 7, 8]];

pub const COLUMNS: [Line; 3] = [[0, 3, 6], [1, 4, 7], [2, 5, 8]];

pub const MAIN_DIAGONAL: Line = [0, 4, 8];

pub const ANTI_DIAGONAL: Line = [2, 4, 6];

/// All lines in evaluation order: rows, columns, main diagonal, anti-diagonal.
pub const LINES: [Line; 8] = [
    ROWS[0],
    ROWS[1],
    ROWS[2],
    COLUMNS[0],
    COLUMNS[1],
    COLUMNS[2],
    MAIN_DIAGONAL,
    ANTI_DIAGONAL,
];

#[inline]
pub fn line_sum(values: &[Value; NCELLS], line: &Line) -> Value {
    line.iter().map(|&cell| values[cell]).sum()
}

/// The eight line sums, in the order of [`LINES`].
pub fn line_sums(values: &[Value; NCELLS]) -> [Value; 8] {
    LINES.map(|line| line_sum(values, &line))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_cell_is_on_expected_number_of_lines() {
        let mut counts = [0usize; NCELLS];
        for line in LINES.iter() {
            for &cell in line {
                counts[cell] += 1;
            }
        }
        // Corners: row, column, one diagonal. Edges: row, column. Center: four.
        assert_eq!(counts, [3, 2, 3, 2, 4, 2, 3, 2, 3]);
    }

    #[test]
    fn test_line_sums() {
        let values: [Value; NCELLS] = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        assert_eq!(line_sums(&values), [6, 15, 24, 12, 15, 18, 15, 15]);
    }
}
