//! GPIO board adapter: bridges `embedded-hal` pins to the door ports.
//!
//! Owns the three input pins, the four output pins and a delay provider,
//! exposing them through [`LinePort`], [`OutputPort`] and [`DelayPort`].
//! This is the only module in the system that touches pins.  Pin errors
//! are logged and degraded (inputs read idle, writes skipped) so the
//! dispatch loop never stops on a flaky line.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use log::warn;

use crate::app::ports::{DelayPort, Input, LinePort, Output, OutputPort};
use crate::drivers::watchdog::Watchdog;

/// Longest single delay between watchdog feeds (ms).
const FEED_SLICE_MS: u32 = 1000;

/// Input electrical polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// Pulled up; asserted when low.
    ActiveLow,
    /// Pulled down; asserted when high.
    ActiveHigh,
}

/// Concrete adapter over any `embedded-hal` 1.0 pins.
pub struct GpioBoard<I, O, D> {
    inputs: [I; Input::COUNT],
    outputs: [O; Output::COUNT],
    levels: [bool; Output::COUNT],
    polarity: Polarity,
    delay: D,
    watchdog: Watchdog,
}

impl<I, O, D> GpioBoard<I, O, D>
where
    I: InputPin,
    O: OutputPin,
    D: DelayNs,
{
    /// `inputs` are indexed by [`Input`], `outputs` by [`Output`].
    pub fn new(
        inputs: [I; Input::COUNT],
        outputs: [O; Output::COUNT],
        polarity: Polarity,
        delay: D,
        watchdog: Watchdog,
    ) -> Self {
        let mut board = Self {
            inputs,
            outputs,
            levels: [true; Output::COUNT],
            polarity,
            delay,
            watchdog,
        };
        board.all_off();
        board
    }
}

// ── LinePort implementation ───────────────────────────────────

impl<I: InputPin, O, D> LinePort for GpioBoard<I, O, D> {
    fn is_active(&mut self, input: Input) -> bool {
        let pin = &mut self.inputs[input as usize];
        let level = match self.polarity {
            Polarity::ActiveLow => pin.is_low(),
            Polarity::ActiveHigh => pin.is_high(),
        };
        match level {
            Ok(active) => active,
            Err(e) => {
                warn!("gpio: read {:?} failed: {:?}", input, e);
                false
            }
        }
    }
}

// ── OutputPort implementation ─────────────────────────────────

impl<I, O: OutputPin, D> OutputPort for GpioBoard<I, O, D> {
    fn set(&mut self, output: Output, on: bool) {
        let pin = &mut self.outputs[output as usize];
        let res = if on { pin.set_high() } else { pin.set_low() };
        match res {
            Ok(()) => self.levels[output as usize] = on,
            Err(e) => warn!("gpio: write {:?}={} failed: {:?}", output, on, e),
        }
    }

    fn is_on(&self, output: Output) -> bool {
        self.levels[output as usize]
    }
}

// ── DelayPort implementation ──────────────────────────────────

impl<I, O, D: DelayNs> DelayPort for GpioBoard<I, O, D> {
    fn delay_ms(&mut self, ms: u32) {
        let mut left = ms;
        while left > 0 {
            let slice = left.min(FEED_SLICE_MS);
            self.delay.delay_ms(slice);
            self.watchdog.feed();
            left -= slice;
        }
    }
}
