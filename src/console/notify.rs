//! Console notification writer.
//!
//! Implements [`EventSink`] by writing one `CODE description\r\n` line per
//! event to any `std::io::Write` (UART0 via stdout on the device, a
//! `Vec<u8>` in tests).  Events without a wire code are skipped.

use std::io::Write;

use log::warn;

use crate::app::events::DoorEvent;
use crate::app::ports::EventSink;

const BANNER: &[&str] = &[
    concat!("bellgate v", env!("CARGO_PKG_VERSION")),
    "Echo is disabled.",
    "",
    "Notifications are sent on their own line as \"CODE description\".",
    "Notification codes:",
    "    THUA Thursday mode auto open",
    "    RING Ringing",
    "    CODE Code access granted",
    "    THU1 Thursday mode set to on",
    "    THU0 Thursday mode set to off",
    "    TOUT Thursday mode timeout",
    "    BOOT Device booted",
    "    OPEN Manual open",
    "",
    "Commands must be sent on their own line:",
    "    open         - open the door",
    "    thursday on  - mute the ringer and open on every ring",
    "    thursday off - unmute the ringer and stop auto opening",
    "    help         - print this text",
    "",
];

/// Render the notification line for `event` (without terminator).
/// `None` for log-only events or a line that does not fit.
pub fn format_line(event: &DoorEvent) -> Option<heapless::String<48>> {
    let code = event.code()?;
    let mut line = heapless::String::new();
    line.push_str(code).ok()?;
    line.push(' ').ok()?;
    line.push_str(event.description()).ok()?;
    Some(line)
}

pub struct LineNotifier<W: Write> {
    out: W,
}

impl<W: Write> LineNotifier<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, line: &str) {
        let res = self
            .out
            .write_all(line.as_bytes())
            .and_then(|()| self.out.write_all(b"\r\n"))
            .and_then(|()| self.out.flush());
        if let Err(e) = res {
            warn!("console write failed: {}", e);
        }
    }
}

impl<W: Write> EventSink for LineNotifier<W> {
    fn emit(&mut self, event: &DoorEvent) {
        if let Some(line) = format_line(event) {
            self.write_line(&line);
        }
    }

    fn help(&mut self) {
        for line in BANNER {
            self.write_line(line);
        }
    }
}
