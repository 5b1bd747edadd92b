//! Application core: door logic, zero I/O.
//!
//! Pulse decoding, the dispatch loop, the door sequencer and Thursday
//! mode.  All interaction with hardware happens through the **port
//! traits** in [`ports`], keeping this layer testable without a board.

pub mod commands;
pub mod decoder;
pub mod events;
pub mod ports;
pub mod sequencer;
pub mod service;
pub mod thursday;
