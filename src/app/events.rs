//! Outbound door events.
//!
//! The [`DoorController`](super::service::DoorController) emits these
//! through the [`EventSink`](super::ports::EventSink) port.  Each one is
//! both the record of a side effect that just happened and a console
//! notification line of the form `CODE description`.

/// Structured events emitted by the door core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoorEvent {
    /// Door opened from the local button or the console.
    ManualOpen,
    /// Chime rung for a plain (or failed-code) doorbell press.
    Ring,
    /// A valid code pattern was received; the door opens.
    CodeGranted,
    /// Six pulses were received but failed the width check.
    CodeRejected,
    /// Doorbell pressed while Thursday mode is on; the door opens.
    ThursdayAutoOpen,
    /// Thursday mode set (carries the new value).
    ThursdayToggled(bool),
    /// Thursday mode switched itself off after its ceiling.
    ThursdayTimeout,
    /// Device finished booting.
    Boot,
}

impl DoorEvent {
    /// Four-letter console code, or `None` for log-only events.
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Self::ManualOpen => Some("OPEN"),
            Self::Ring => Some("RING"),
            Self::CodeGranted => Some("CODE"),
            Self::CodeRejected => None,
            Self::ThursdayAutoOpen => Some("THUA"),
            Self::ThursdayToggled(true) => Some("THU1"),
            Self::ThursdayToggled(false) => Some("THU0"),
            Self::ThursdayTimeout => Some("TOUT"),
            Self::Boot => Some("BOOT"),
        }
    }

    /// Human-readable text following the code.
    pub fn description(&self) -> &'static str {
        match self {
            Self::ManualOpen => "Manual open",
            Self::Ring => "Ringing",
            Self::CodeGranted => "Code access granted",
            Self::CodeRejected => "Code pattern rejected",
            Self::ThursdayAutoOpen => "Thursday mode auto open",
            Self::ThursdayToggled(true) => "Thursday mode set to on",
            Self::ThursdayToggled(false) => "Thursday mode set to off",
            Self::ThursdayTimeout => "Thursday mode timeout",
            Self::Boot => "Device booted.",
        }
    }
}
