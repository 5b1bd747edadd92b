//! Console command queue.
//!
//! Commands are produced by the serial receive thread and consumed by the
//! dispatch loop, which executes them between iterations.  Door actions
//! therefore never overlap: the loop is their only executor.
//!
//! ```text
//! ┌─────────────┐     ┌───────────────┐     ┌──────────────┐
//! │ Serial RX   │────▶│ CommandQueue  │────▶│ Dispatch     │
//! │ (thread)    │     │ (bounded,     │     │ loop         │
//! │             │     │  crit-section)│     │ (consumer)   │
//! └─────────────┘     └───────────────┘     └──────────────┘
//! ```

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use log::warn;

use crate::app::commands::DoorCommand;

/// Maximum number of pending commands.
pub const COMMAND_QUEUE_CAP: usize = 8;

/// Bounded multi-producer command queue.
pub struct CommandQueue {
    channel: Channel<CriticalSectionRawMutex, DoorCommand, COMMAND_QUEUE_CAP>,
}

impl CommandQueue {
    pub const fn new() -> Self {
        Self {
            channel: Channel::new(),
        }
    }

    /// Enqueue a command.  Safe to call from any thread.
    /// Returns `false` if the queue is full (command dropped).
    pub fn push(&self, cmd: DoorCommand) -> bool {
        if self.channel.try_send(cmd).is_err() {
            warn!("command queue full, dropping {:?}", cmd);
            return false;
        }
        true
    }

    /// Dequeue the oldest command, if any.
    pub fn pop(&self) -> Option<DoorCommand> {
        self.channel.try_receive().ok()
    }

    pub fn is_empty(&self) -> bool {
        self.channel.is_empty()
    }

    pub fn len(&self) -> usize {
        self.channel.len()
    }
}

impl Default for CommandQueue {
    fn default() -> Self {
        Self::new()
    }
}

/// Firmware-wide queue shared by the serial thread and the main loop.
pub static COMMANDS: CommandQueue = CommandQueue::new();
