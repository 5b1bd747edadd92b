//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing every door event to the `log`
//! facade (the ESP-IDF logger on the device).  Runs alongside the console
//! notifier so log captures include events that have no wire line.

use log::info;

use crate::app::events::DoorEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`DoorEvent`].
#[derive(Default)]
pub struct LogEventSink {
    emitted: u32,
}

impl LogEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events logged since construction.
    pub fn emitted(&self) -> u32 {
        self.emitted
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &DoorEvent) {
        self.emitted = self.emitted.wrapping_add(1);
        match event.code() {
            Some(code) => info!("EVENT | {} | {}", code, event.description()),
            None => info!("EVENT | ---- | {}", event.description()),
        }
    }
}
