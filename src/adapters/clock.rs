//! Monotonic tick clock adapter.
//!
//! Implements [`ClockPort`] at the configured tick frequency on top of a
//! microsecond time source:
//!
//! - **`target_os = "espidf"`**: `esp_timer_get_time()` (monotonic,
//!   microsecond precision).
//! - **`not(target_os = "espidf")`**: `std::time::Instant` for host-side
//!   runs.

use crate::app::ports::{ClockPort, Tick};

pub struct MonotonicClock {
    tick_hz: u32,
    reset_us: u64,
    #[cfg(not(target_os = "espidf"))]
    start: std::time::Instant,
}

impl MonotonicClock {
    pub fn new(tick_hz: u32) -> Self {
        let mut clock = Self {
            tick_hz,
            reset_us: 0,
            #[cfg(not(target_os = "espidf"))]
            start: std::time::Instant::now(),
        };
        clock.reset_us = clock.now_us();
        clock
    }

    /// Microseconds since boot (monotonic).
    #[cfg(target_os = "espidf")]
    fn now_us(&self) -> u64 {
        // SAFETY: read-only access to the high-resolution timer counter.
        (unsafe { esp_idf_svc::sys::esp_timer_get_time() }) as u64
    }

    /// Microseconds since construction (monotonic).
    #[cfg(not(target_os = "espidf"))]
    fn now_us(&self) -> u64 {
        self.start.elapsed().as_micros() as u64
    }
}

/// Scale a microsecond span to ticks; truncates to the counter width.
pub fn us_to_ticks(us: u64, tick_hz: u32) -> Tick {
    (u128::from(us) * u128::from(tick_hz) / 1_000_000) as Tick
}

impl ClockPort for MonotonicClock {
    fn elapsed(&self) -> Tick {
        us_to_ticks(self.now_us().saturating_sub(self.reset_us), self.tick_hz)
    }

    fn reset(&mut self) {
        self.reset_us = self.now_us();
    }
}
