//! Console line assembly.
//!
//! Bytes arrive one at a time from the serial receive thread.  A line ends
//! at `\r` or `\n`; the terminator shares the 16-byte buffer, so at most
//! [`MAX_LINE_LEN`] payload bytes fit.

use heapless::Vec;

/// Console line buffer size in bytes, terminator included.
pub const LINE_BUF_LEN: usize = 16;

/// Longest accepted line, terminator excluded.
pub const MAX_LINE_LEN: usize = LINE_BUF_LEN - 1;

#[derive(Debug, PartialEq, Eq)]
pub enum LineReadEvent<'a> {
    None,
    Complete(&'a [u8]),
    Overflow,
}

/// Assembles console bytes into lines terminated by `\r` or `\n`.
///
/// A line longer than [`MAX_LINE_LEN`] is reported once as
/// [`LineReadEvent::Overflow`] and then discarded up to its terminator.
pub struct LineReader {
    line: Vec<u8, MAX_LINE_LEN>,
    complete: Vec<u8, MAX_LINE_LEN>,
    overflowed: bool,
}

impl LineReader {
    pub const fn new() -> Self {
        Self {
            line: Vec::new(),
            complete: Vec::new(),
            overflowed: false,
        }
    }

    pub fn push_byte(&mut self, byte: u8) -> LineReadEvent<'_> {
        if byte == b'\r' || byte == b'\n' {
            if self.overflowed {
                self.overflowed = false;
                return LineReadEvent::None;
            }
            if self.line.is_empty() {
                return LineReadEvent::None;
            }
            self.complete = core::mem::take(&mut self.line);
            return LineReadEvent::Complete(&self.complete);
        }

        if self.overflowed {
            return LineReadEvent::None;
        }

        if self.line.push(byte).is_ok() {
            return LineReadEvent::None;
        }

        self.line.clear();
        self.overflowed = true;
        LineReadEvent::Overflow
    }
}

impl Default for LineReader {
    fn default() -> Self {
        Self::new()
    }
}
