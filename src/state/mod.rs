// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable per-run state.
//!
//! - `search_state`: the counters a strategy reports (`SearchState`)
//! - `statistics`: event counters indexed by `Counters`
//! - `progress`: timing of periodic status updates
//!
//! None of this is shared between runs or between strategies.

pub mod progress;
pub mod search_state;
pub mod statistics;

pub use progress::Progress;
pub use search_state::SearchState;
pub use statistics::{Counters, Statistics};
