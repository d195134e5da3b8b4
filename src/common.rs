//! Common time utilities shared across programs

use std::time::Instant;

/// Source of monotonic millisecond timestamps and blocking delays.
///
/// The logging loop only ever needs "milliseconds since start" and "block for
/// N milliseconds", so both live behind one trait and tests can substitute a
/// fake that advances instantly.
pub trait Clock {
    /// Milliseconds elapsed since the clock was created
    fn now_ms(&self) -> u64;

    /// Block the calling thread for `ms` milliseconds
    fn sleep_ms(&self, ms: u64);
}

/// Wall-clock implementation backed by `Instant`
pub struct MonotonicClock {
    start: Instant,
}

impl MonotonicClock {
    /// Create a new clock starting now
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    fn sleep_ms(&self, ms: u64) {
        std::thread::sleep(std::time::Duration::from_millis(ms));
    }
}
