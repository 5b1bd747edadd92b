//! Serial command console.
//!
//! Inbound: bytes → [`LineReader`] → [`parse_command`] → [`CommandQueue`].
//! Outbound: [`LineNotifier`] writes one `CODE description` line per
//! [`DoorEvent`](crate::app::events::DoorEvent) and the help banner.
//!
//! Unknown and overlong lines are dropped without a reply; the console
//! stays usable for the next line.

pub mod line_reader;
pub mod notify;

pub use line_reader::{LINE_BUF_LEN, LineReadEvent, LineReader, MAX_LINE_LEN};
pub use notify::LineNotifier;

use log::{debug, warn};

use crate::app::commands::DoorCommand;
use crate::events::CommandQueue;

/// Parse one complete line (terminator already stripped).
pub fn parse_command(line: &[u8]) -> Option<DoorCommand> {
    match line {
        b"open" => Some(DoorCommand::Open),
        b"help" => Some(DoorCommand::Help),
        b"thursday on" => Some(DoorCommand::SetThursday(true)),
        b"thursday off" => Some(DoorCommand::SetThursday(false)),
        _ => None,
    }
}

/// Receive-side console state: feeds bytes in, pushes commands out.
#[derive(Default)]
pub struct ConsoleInput {
    reader: LineReader,
}

impl ConsoleInput {
    pub const fn new() -> Self {
        Self {
            reader: LineReader::new(),
        }
    }

    /// Consume one received byte.  Returns the command that was queued,
    /// if this byte completed a recognised line.
    pub fn feed(&mut self, byte: u8, queue: &CommandQueue) -> Option<DoorCommand> {
        match self.reader.push_byte(byte) {
            LineReadEvent::None => None,
            LineReadEvent::Overflow => {
                warn!("console: line exceeds {} bytes, dropped", MAX_LINE_LEN);
                None
            }
            LineReadEvent::Complete(line) => {
                let Some(cmd) = parse_command(line) else {
                    debug!("console: ignoring {:?}", String::from_utf8_lossy(line));
                    return None;
                };
                queue.push(cmd).then_some(cmd)
            }
        }
    }

    /// Consume a slice of received bytes.
    pub fn feed_all(&mut self, bytes: &[u8], queue: &CommandQueue) {
        for &b in bytes {
            self.feed(b, queue);
        }
    }
}
