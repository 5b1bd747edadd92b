//! Doorbell pulse-pattern decoder.
//!
//! A code is entered on the street-side bell button as three timed
//! presses.  The decoder measures the width of every level change on the
//! doorbell line and, once enough have been seen, decides whether the
//! widths form a code.
//!
//! ```text
//!  level   ‾‾‾‾‾‾‾|____|‾‾‾‾|____|‾‾‾‾|____|‾‾‾‾‾‾‾‾‾‾‾‾
//!  slot      [0]    [1]  [2]  [3]  [4]  [5]  [6]
//!          priming  P    R    P    R    P    R (closed by idle)
//! ```
//!
//! Slot 0 is the idle time before the first press and is never validated.
//! Odd slots are press widths, even slots release widths.  A slot is
//! accepted when the line reaches the level its parity expects (even slots
//! end on a press, odd slots on a release) and the time since the last
//! accepted transition is above the debounce floor.
//!
//! The final release has no press to end it.  Slot 6 is closed as soon as
//! the line has stayed idle for the release minimum after the third press,
//! so the verdict arrives well inside the inactivity window.  A fourth
//! press arriving earlier closes it instead, with a short (failing) width.
//!
//! The decoder owns no clock.  The caller passes the elapsed ticks and
//! resets its clock whenever a sample is accepted.

use log::debug;

use crate::config::DoorConfig;

use super::ports::Tick;

/// Priming slot plus six validated samples.
pub const PATTERN_SLOTS: usize = 7;

/// Number of validated samples in one code attempt.
pub const CODE_SAMPLES: usize = PATTERN_SLOTS - 1;

/// Result of a completed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Granted,
    Rejected,
}

/// Outcome of feeding one sample to the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeStep {
    /// The line is not at the level the next slot expects.
    Waiting,
    /// Expected level reached too soon after the last transition.
    Noise,
    /// A sample was stored; the caller must reset its clock.
    Accepted,
    /// The final sample was stored and the attempt classified.  The caller
    /// must reset its clock.
    Complete(Verdict),
}

impl DecodeStep {
    /// Whether the caller should restart its stopwatch.
    pub fn resets_clock(self) -> bool {
        matches!(self, Self::Accepted | Self::Complete(_))
    }
}

/// Per-attempt pulse buffer and classifier.
#[derive(Debug, Clone)]
pub struct PulseDecoder {
    samples: [Tick; PATTERN_SLOTS],
    index: usize,
    debounce_ticks: Tick,
    pressed_min_ticks: Tick,
    released_min_ticks: Tick,
}

impl PulseDecoder {
    pub fn new(config: &DoorConfig) -> Self {
        Self {
            samples: [0; PATTERN_SLOTS],
            index: 0,
            debounce_ticks: config.debounce_ticks(),
            pressed_min_ticks: config.pressed_min_ticks(),
            released_min_ticks: config.released_min_ticks(),
        }
    }

    /// Feed the current doorbell level and the ticks elapsed since the
    /// last accepted transition.  Idle samples after the third press close
    /// the attempt once the release minimum has passed.
    pub fn feed(&mut self, active: bool, elapsed: Tick) -> DecodeStep {
        if active != self.expects_active() {
            if self.closes_final_release(elapsed) {
                return self.record(elapsed);
            }
            return DecodeStep::Waiting;
        }
        if elapsed <= self.debounce_ticks {
            return DecodeStep::Noise;
        }
        self.record(elapsed)
    }

    /// The trailing release has lasted long enough to count as complete.
    fn closes_final_release(&self, elapsed: Tick) -> bool {
        self.index == CODE_SAMPLES && elapsed >= self.released_min_ticks
    }

    fn record(&mut self, elapsed: Tick) -> DecodeStep {
        self.samples[self.index] = elapsed;
        debug!("decoder: slot {} = {} ticks", self.index, elapsed);
        self.index += 1;

        if self.index < PATTERN_SLOTS {
            return DecodeStep::Accepted;
        }

        let verdict = self.classify();
        self.clear();
        DecodeStep::Complete(verdict)
    }

    /// Whether the next slot ends on a press (`true`) or a release.
    pub fn expects_active(&self) -> bool {
        self.index % 2 == 0
    }

    /// At least one transition of the current attempt has been stored.
    pub fn is_pending(&self) -> bool {
        self.index != 0
    }

    /// Number of samples stored in the current attempt (priming included).
    pub fn len(&self) -> usize {
        self.index
    }

    pub fn is_empty(&self) -> bool {
        self.index == 0
    }

    /// Drop the current attempt.
    pub fn clear(&mut self) {
        self.samples = [0; PATTERN_SLOTS];
        self.index = 0;
    }

    fn classify(&self) -> Verdict {
        let valid = self.samples[1..].iter().enumerate().all(|(i, &width)| {
            // i = 0 is slot 1, a press.
            let min = if i % 2 == 0 {
                self.pressed_min_ticks
            } else {
                self.released_min_ticks
            };
            width >= min
        });
        if valid {
            Verdict::Granted
        } else {
            debug!("decoder: rejected pattern {:?}", &self.samples[1..]);
            Verdict::Rejected
        }
    }
}
