//! Startup acknowledgment signal
//!
//! When the device has no display, the operator still needs to know which
//! session started. The original hardware blinks its LED once as a preamble,
//! then one short pulse per unit of the chosen file suffix. On a host the
//! same pattern is reproduced on the console with real pulse timing.

use crate::common::Clock;

// Pulse timing, matching the original LED pattern
const PREAMBLE_ON_MS: u64 = 3000;
const PREAMBLE_OFF_MS: u64 = 1000;
const COUNT_ON_MS: u64 = 300;
const COUNT_OFF_MS: u64 = 200;

/// Count-encoded acknowledgment emitted once after a session initializes
pub trait StartupSignal {
    /// Signal that session `session_number` has started
    fn announce(&mut self, session_number: u32);
}

/// Console rendition of the pulse pattern, paced by a real clock.
///
/// One long preamble pulse, then `session_number` short pulses.
pub struct ConsolePulse<'a> {
    clock: &'a dyn Clock,
}

impl<'a> ConsolePulse<'a> {
    pub fn new(clock: &'a dyn Clock) -> Self {
        Self { clock }
    }
}

impl StartupSignal for ConsolePulse<'_> {
    fn announce(&mut self, session_number: u32) {
        println!("* session signal: preamble");
        self.clock.sleep_ms(PREAMBLE_ON_MS);
        self.clock.sleep_ms(PREAMBLE_OFF_MS);
        for pulse in 1..=session_number {
            println!("* session signal: pulse {}/{}", pulse, session_number);
            self.clock.sleep_ms(COUNT_ON_MS);
            self.clock.sleep_ms(COUNT_OFF_MS);
        }
    }
}

/// No-op signal for tests and headless runs
pub struct SilentSignal;

impl StartupSignal for SilentSignal {
    fn announce(&mut self, _session_number: u32) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct FakeClock {
        slept_ms: Cell<u64>,
        sleeps: Cell<u32>,
    }

    impl Clock for FakeClock {
        fn now_ms(&self) -> u64 {
            self.slept_ms.get()
        }
        fn sleep_ms(&self, ms: u64) {
            self.slept_ms.set(self.slept_ms.get() + ms);
            self.sleeps.set(self.sleeps.get() + 1);
        }
    }

    #[test]
    fn test_pulse_pattern_length() {
        let clock = FakeClock {
            slept_ms: Cell::new(0),
            sleeps: Cell::new(0),
        };
        let mut signal = ConsolePulse::new(&clock);
        signal.announce(3);

        // preamble on/off plus on/off per counted pulse
        assert_eq!(clock.sleeps.get(), 2 + 3 * 2);
        assert_eq!(
            clock.slept_ms.get(),
            PREAMBLE_ON_MS + PREAMBLE_OFF_MS + 3 * (COUNT_ON_MS + COUNT_OFF_MS)
        );
    }
}
