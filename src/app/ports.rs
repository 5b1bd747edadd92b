//! Port traits: the hexagonal boundary between the door logic and the board.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ DoorController (domain)
//! ```
//!
//! The GPIO adapter implements [`LinePort`], [`OutputPort`] and
//! [`DelayPort`]; the clock adapter implements [`ClockPort`]; notification
//! adapters implement [`EventSink`].  The domain core consumes them via
//! generics and never touches a register.

use super::events::DoorEvent;

/// Clock ticks since the last [`ClockPort::reset`].  Wraps at 32 bits.
pub type Tick = u32;

// ───────────────────────────────────────────────────────────────
// Digital lines
// ───────────────────────────────────────────────────────────────

/// Named digital inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Input {
    /// Signal from the street-side bell button.
    Doorbell = 0,
    /// Local push-button that opens the door.
    OpenButton = 1,
    /// Local push-button that flips Thursday mode.
    ThursdayButton = 2,
}

impl Input {
    pub const COUNT: usize = 3;
    pub const ALL: [Input; Self::COUNT] = [Self::Doorbell, Self::OpenButton, Self::ThursdayButton];
}

/// Named digital outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Output {
    /// Door opener relay.
    OpenerRelay = 0,
    /// Chime / ring relay.
    RingRelay = 1,
    /// Status LED.
    StatusLed = 2,
    /// Thursday mode indicator.
    ThursdayIndicator = 3,
}

impl Output {
    pub const COUNT: usize = 4;
    pub const ALL: [Output; Self::COUNT] = [
        Self::OpenerRelay,
        Self::RingRelay,
        Self::StatusLed,
        Self::ThursdayIndicator,
    ];
}

/// Read-side port: sampled input levels.
pub trait LinePort {
    /// `true` while the input is asserted (button pressed, bell ringing).
    /// Polarity is the adapter's concern.
    fn is_active(&mut self, input: Input) -> bool;
}

/// Write-side port: relays and indicators.
pub trait OutputPort {
    /// Drive an output on or off.
    fn set(&mut self, output: Output, on: bool);

    /// Last level written to `output`.
    fn is_on(&self, output: Output) -> bool;

    /// Invert an output.
    fn toggle(&mut self, output: Output) {
        let on = self.is_on(output);
        self.set(output, !on);
    }

    /// Drive every output to its idle (off) level.
    fn all_off(&mut self) {
        for output in Output::ALL {
            self.set(output, false);
        }
    }
}

/// Blocking delay.  The sequencer's timing is built entirely from these.
pub trait DelayPort {
    fn delay_ms(&mut self, ms: u32);
}

// ───────────────────────────────────────────────────────────────
// Clock
// ───────────────────────────────────────────────────────────────

/// Free-running tick counter with a fixed frequency.
pub trait ClockPort {
    /// Ticks since the last [`reset`](Self::reset).
    fn elapsed(&self) -> Tick;

    /// Restart the count from zero.
    fn reset(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → console / log)
// ───────────────────────────────────────────────────────────────

/// The domain emits [`DoorEvent`]s through this port.  Adapters decide
/// where they go (serial console line, log record, test recorder).
pub trait EventSink {
    fn emit(&mut self, event: &DoorEvent);

    /// Print the operator help banner.  Sinks without a console ignore it.
    fn help(&mut self) {}
}

/// Forward to both sinks, in order.
impl<A: EventSink, B: EventSink> EventSink for (A, B) {
    fn emit(&mut self, event: &DoorEvent) {
        self.0.emit(event);
        self.1.emit(event);
    }

    fn help(&mut self) {
        self.0.help();
        self.1.help();
    }
}
