//! External time sources.
//!
//! Playback never measures time itself: every `play`/`restart`/`update`
//! call pulls "now" from a shared [`TickClock`]. Drivers hand the player a
//! wall clock or step a [`ManualClock`] themselves.

use std::cell::Cell;

use crate::time::TickTime;

/// Monotonic millisecond time source queried by the player.
pub trait TickClock {
    /// Current time; must be non-decreasing across calls.
    fn now(&self) -> TickTime;
}

/// Wall-clock time measured from the moment the clock was created.
///
/// Built on the `instant` crate so it also works under WASM.
#[derive(Debug)]
pub struct SystemClock {
    origin: instant::Instant,
}

impl SystemClock {
    /// Create a wall clock with "now" as its zero point
    #[inline]
    pub fn new() -> Self {
        Self {
            origin: instant::Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TickClock for SystemClock {
    fn now(&self) -> TickTime {
        let millis = self.origin.elapsed().as_secs_f64() * 1000.0;
        TickTime::from_millis(millis).unwrap_or_else(|_| TickTime::zero())
    }
}

/// Caller-stepped clock for cooperative drivers and tests.
#[derive(Debug, Default)]
pub struct ManualClock {
    now_ms: Cell<f64>,
}

impl ManualClock {
    /// Create a manual clock starting at zero
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the absolute time in milliseconds
    #[inline]
    pub fn set_millis(&self, milliseconds: f64) {
        self.now_ms.set(milliseconds.max(0.0));
    }

    /// Advance the clock by the given number of milliseconds
    #[inline]
    pub fn advance_millis(&self, milliseconds: f64) {
        self.set_millis(self.now_ms.get() + milliseconds);
    }
}

impl TickClock for ManualClock {
    fn now(&self) -> TickTime {
        TickTime::from(self.now_ms.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock() {
        let clock = ManualClock::new();
        assert_eq!(clock.now(), TickTime::zero());

        clock.set_millis(100.0);
        assert_eq!(clock.now(), TickTime::from_millis(100.0).unwrap());

        clock.advance_millis(50.0);
        assert_eq!(clock.now(), TickTime::from_millis(150.0).unwrap());
    }

    #[test]
    fn test_manual_clock_clamps_negative() {
        let clock = ManualClock::new();
        clock.set_millis(-10.0);
        assert_eq!(clock.now(), TickTime::zero());
    }

    #[test]
    fn test_system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
    }
}
