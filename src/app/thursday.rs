//! Thursday mode: the weekly open-house override.
//!
//! While enabled the indicator is lit, the timeout ring is muted and any
//! doorbell press opens the door.  The mode turns itself off once it has
//! been on for `thursday_timeout_min`, so a forgotten switch cannot leave
//! the door auto-opening all week.

use log::info;

use crate::config::DoorConfig;

use super::events::DoorEvent;
use super::ports::{EventSink, Output, OutputPort};

/// Mode flag plus the time it has been on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThursdayState {
    pub enabled: bool,
    pub elapsed_secs: u32,
}

/// Owns [`ThursdayState`] and enforces its ceiling.
#[derive(Debug, Clone)]
pub struct ThursdayMode {
    state: ThursdayState,
    ceiling_secs: u32,
}

impl ThursdayMode {
    pub fn new(config: &DoorConfig) -> Self {
        Self {
            state: ThursdayState::default(),
            ceiling_secs: config.thursday_ceiling_secs(),
        }
    }

    /// Set the mode, restart the elapsed counter, drive the indicator and
    /// notify.  Setting the current value again restarts the ceiling.
    pub fn set_mode(&mut self, on: bool, hw: &mut impl OutputPort, sink: &mut impl EventSink) {
        self.state = ThursdayState {
            enabled: on,
            elapsed_secs: 0,
        };
        hw.set(Output::ThursdayIndicator, on);
        sink.emit(&DoorEvent::ThursdayToggled(on));
        info!("Thursday mode {}", if on { "on" } else { "off" });
    }

    /// Flip the mode.  Returns the new value.
    pub fn toggle(&mut self, hw: &mut impl OutputPort, sink: &mut impl EventSink) -> bool {
        let on = !self.state.enabled;
        self.set_mode(on, hw, sink);
        on
    }

    /// Account `secs` of on-time.  Returns `true` when the ceiling has been
    /// reached; the caller then forces the mode off.  No-op while disabled.
    pub fn advance(&mut self, secs: u32) -> bool {
        if !self.state.enabled {
            return false;
        }
        self.state.elapsed_secs = self.state.elapsed_secs.saturating_add(secs);
        self.state.elapsed_secs >= self.ceiling_secs
    }

    pub fn is_enabled(&self) -> bool {
        self.state.enabled
    }

    pub fn state(&self) -> ThursdayState {
        self.state
    }
}
