//! Door control sequencer: the blocking physical actions.
//!
//! Every action asserts its outputs, waits through [`DelayPort`], and
//! deasserts them again on every exit path.  Only one action can run at a
//! time: they are called from the single dispatch loop and block it.

use log::info;

use crate::config::DoorConfig;

use super::events::DoorEvent;
use super::ports::{DelayPort, EventSink, Input, LinePort, Output, OutputPort};

/// Pulse the opener relay for the open duration while blinking the
/// status LED.  No early exit.
pub fn open(hw: &mut (impl OutputPort + DelayPort), config: &DoorConfig) {
    hw.set(Output::OpenerRelay, true);
    for _ in 0..config.open_blink_count() {
        hw.toggle(Output::StatusLed);
        hw.delay_ms(config.blink_interval_ms);
    }
    hw.set(Output::OpenerRelay, false);
    hw.set(Output::StatusLed, false);
}

/// Open in response to the local button or a console command.
pub fn manual_open(
    hw: &mut (impl OutputPort + DelayPort),
    sink: &mut impl EventSink,
    config: &DoorConfig,
) {
    sink.emit(&DoorEvent::ManualOpen);
    open(hw, config);
}

/// Open after a valid code pattern.
pub fn granted(
    hw: &mut (impl OutputPort + DelayPort),
    sink: &mut impl EventSink,
    config: &DoorConfig,
) {
    sink.emit(&DoorEvent::CodeGranted);
    open(hw, config);
}

/// How a [`ring`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingEnd {
    /// Rang for the full duration.
    Elapsed,
    /// The visitor let go of the bell.
    Released,
    /// The open button was pressed; the door has been opened.
    Opened,
}

/// Ring the chime for up to the ring duration.
///
/// Stops early when the open button is pressed (the door is opened first)
/// or when the doorbell goes idle after having been active during the ring.
pub fn ring(
    hw: &mut (impl LinePort + OutputPort + DelayPort),
    sink: &mut impl EventSink,
    config: &DoorConfig,
) -> RingEnd {
    sink.emit(&DoorEvent::Ring);
    hw.set(Output::StatusLed, true);
    hw.set(Output::RingRelay, true);

    let mut bell_seen = hw.is_active(Input::Doorbell);
    let mut end = RingEnd::Elapsed;
    for _ in 0..config.ring_poll_count() {
        if hw.is_active(Input::OpenButton) {
            manual_open(hw, sink, config);
            end = RingEnd::Opened;
            break;
        }
        if hw.is_active(Input::Doorbell) {
            bell_seen = true;
        } else if bell_seen {
            end = RingEnd::Released;
            break;
        }
        hw.delay_ms(config.ring_poll_ms);
    }

    hw.set(Output::StatusLed, false);
    hw.set(Output::RingRelay, false);
    info!("ring ended: {:?}", end);
    end
}
