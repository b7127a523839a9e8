//! Logical clock for deterministic timestamps.
//!
//! The VFS never reads wall-clock time. Node timestamps come from an
//! injected monotonic counter so that test runs are reproducible.

use std::cell::Cell;

/// Default starting value for a fresh clock.
const CLOCK_EPOCH: u64 = 1_000_000;

/// A strictly increasing logical timestamp source.
///
/// Every call to [`now`](Self::now) returns a value greater than the
/// previous one.
#[derive(Debug)]
pub struct MonotonicClock {
    next: Cell<u64>,
}

impl MonotonicClock {
    /// Create a clock starting at the default epoch.
    pub fn new() -> Self {
        Self::starting_at(CLOCK_EPOCH)
    }

    /// Create a clock whose first `now()` returns `start + 1`.
    pub fn starting_at(start: u64) -> Self {
        Self {
            next: Cell::new(start),
        }
    }

    /// Advance the clock and return the new timestamp.
    pub fn now(&self) -> u64 {
        let t = self.next.get() + 1;
        self.next.set(t);
        t
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}
