//! Timing configuration for the door controller.
//!
//! Every duration the decoder, sequencer and dispatch loop use lives here.
//! Nothing is persisted: the firmware boots with [`DoorConfig::default`],
//! which matches the reference deployment (16 MHz oscillator, /1024
//! prescale, 15 625 Hz tick).

use core::fmt;

use crate::app::ports::Tick;

/// Core timing configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoorConfig {
    // --- Clock ---
    /// Clock tick frequency in Hz.
    pub tick_hz: u32,

    // --- Decoder ---
    /// Inactivity window that ends a decoding attempt (seconds).
    pub inactivity_timeout_secs: u32,
    /// Debounce floor: pulses at or below this width are noise (ms).
    pub min_pulse_width_ms: u32,
    /// Minimum width of a "pressed" code pulse (ms).
    pub pressed_min_ms: u32,
    /// Minimum width of a "released" code gap (ms).
    pub released_min_ms: u32,

    // --- Sequencer ---
    /// Maximum ring relay on-time (seconds).
    pub ring_duration_secs: u32,
    /// Input sampling interval while ringing (ms).
    pub ring_poll_ms: u32,
    /// Opener relay on-time (seconds).
    pub open_duration_secs: u32,
    /// Status LED toggle interval while opening (ms).
    pub blink_interval_ms: u32,

    // --- Thursday mode ---
    /// Thursday mode switches itself off after this many minutes.
    pub thursday_timeout_min: u32,
    /// Settle delay between a doorbell press and the auto-open (ms).
    pub thursday_open_delay_ms: u32,

    // --- Main loop ---
    /// Delay before the boot notification (ms).
    pub boot_settle_ms: u32,
    /// Dispatch loop poll period (ms).
    pub poll_interval_ms: u32,
}

impl Default for DoorConfig {
    fn default() -> Self {
        Self {
            tick_hz: 15_625,

            inactivity_timeout_secs: 4,
            min_pulse_width_ms: 10,
            pressed_min_ms: 50,
            released_min_ms: 50,

            ring_duration_secs: 20,
            ring_poll_ms: 10,
            open_duration_secs: 3,
            blink_interval_ms: 250,

            thursday_timeout_min: 300,
            thursday_open_delay_ms: 750,

            boot_settle_ms: 500,
            poll_interval_ms: 1,
        }
    }
}

impl DoorConfig {
    /// Convert milliseconds to clock ticks (rounded down).
    pub fn ms_to_ticks(&self, ms: u32) -> Tick {
        (u64::from(self.tick_hz) * u64::from(ms) / 1000) as Tick
    }

    /// Pulses must be strictly longer than this to count.
    pub fn debounce_ticks(&self) -> Tick {
        self.ms_to_ticks(self.min_pulse_width_ms)
    }

    pub fn pressed_min_ticks(&self) -> Tick {
        self.ms_to_ticks(self.pressed_min_ms)
    }

    pub fn released_min_ticks(&self) -> Tick {
        self.ms_to_ticks(self.released_min_ms)
    }

    /// Inactivity timeout expressed in ticks.
    pub fn timeout_ticks(&self) -> Tick {
        self.ms_to_ticks(self.inactivity_timeout_secs.saturating_mul(1000))
    }

    /// Thursday mode ceiling in seconds.
    pub fn thursday_ceiling_secs(&self) -> u32 {
        self.thursday_timeout_min.saturating_mul(60)
    }

    /// Number of LED toggles performed by one open cycle.
    pub fn open_blink_count(&self) -> u32 {
        self.open_duration_secs.saturating_mul(1000) / self.blink_interval_ms.max(1)
    }

    /// Number of input samples taken by one full-length ring.
    pub fn ring_poll_count(&self) -> u32 {
        self.ring_duration_secs.saturating_mul(1000) / self.ring_poll_ms.max(1)
    }

    /// Reject values that would break the decoder or the loop.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_hz == 0 {
            return Err(ConfigError::ValidationFailed("tick_hz must be non-zero"));
        }
        if self.inactivity_timeout_secs == 0 {
            return Err(ConfigError::ValidationFailed(
                "inactivity_timeout_secs must be non-zero",
            ));
        }
        let timeout = u64::from(self.tick_hz) * u64::from(self.inactivity_timeout_secs);
        if timeout >= u64::from(Tick::MAX) {
            return Err(ConfigError::ValidationFailed(
                "inactivity timeout overflows the tick counter",
            ));
        }
        if self.pressed_min_ms <= self.min_pulse_width_ms
            || self.released_min_ms <= self.min_pulse_width_ms
        {
            return Err(ConfigError::ValidationFailed(
                "code pulse minimums must exceed the debounce floor",
            ));
        }
        if self.open_duration_secs == 0 || self.blink_interval_ms == 0 {
            return Err(ConfigError::ValidationFailed(
                "open duration and blink interval must be non-zero",
            ));
        }
        if self.ring_duration_secs == 0 || self.ring_poll_ms == 0 {
            return Err(ConfigError::ValidationFailed(
                "ring duration and ring poll interval must be non-zero",
            ));
        }
        if self.thursday_ceiling_secs() < self.inactivity_timeout_secs {
            return Err(ConfigError::ValidationFailed(
                "thursday timeout shorter than one inactivity window",
            ));
        }
        Ok(())
    }
}

/// Errors from [`DoorConfig::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A field failed range validation.
    /// The `&'static str` describes which field and why.
    ValidationFailed(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
        }
    }
}
