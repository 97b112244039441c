// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Symmetry reduction for the brute-force search.
//!
//! ## Module Structure
//!
//! - `anchors`: the twelve anchors and their free-cell tables
//! - `mod`: Public API and re-exports

pub mod anchors;

pub use anchors::{candidates_per_base, Anchor, AnchorAssignment, ANCHORS};
