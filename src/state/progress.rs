// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Status update timing.

use std::time::{Duration, Instant};

/// Decides when the next periodic status update is due.
#[derive(Debug, Clone)]
pub struct Progress {
    started: Instant,
    last: Instant,
    interval: Duration,
}

impl Progress {
    pub fn new(interval: Duration) -> Self {
        let now = Instant::now();
        Self {
            started: now,
            last: now,
            interval,
        }
    }

    /// True (and resets the timer) when `interval` has passed since the last update.
    pub fn due(&mut self) -> bool {
        let now = Instant::now();
        if now.duration_since(self.last) >= self.interval {
            self.last = now;
            true
        } else {
            false
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Whole seconds since the run started, rounded.
    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed().as_secs_f64().round() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_interval_is_always_due() {
        let mut progress = Progress::new(Duration::ZERO);
        assert!(progress.due());
        assert!(progress.due());
    }

    #[test]
    fn test_long_interval_is_not_due() {
        let mut progress = Progress::new(Duration::from_secs(3600));
        assert!(!progress.due());
        assert_eq!(progress.elapsed_secs(), 0);
    }
}
