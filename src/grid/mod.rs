// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The candidate grid and its arithmetic.
//!
//! - `square`: roots, squared values, the `Square` type
//! - `lines`: the eight rows, columns and diagonals
//! - `render`: ASCII drawing of a square with its sums

pub mod lines;
pub mod render;
pub mod square;

pub use lines::{line_sum, line_sums, Line, LINES};
pub use render::{render, value_width};
pub use square::{root_of, squared_value, Root, Square, Value, CENTER, NCELLS, NO_ROOT};
