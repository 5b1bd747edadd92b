//! Inbound commands to the door controller.
//!
//! These represent actions requested from outside the dispatch loop (the
//! serial console today).  The [`DoorController`](super::service::DoorController)
//! executes them through the same code paths as the physical buttons.

/// Commands that external adapters can send into the door core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoorCommand {
    /// Open the door, exactly like the local open button.
    Open,
    /// Print the operator help banner.
    Help,
    /// Set Thursday mode on or off.
    SetThursday(bool),
}
