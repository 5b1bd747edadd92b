//! Unified error type for firmware bring-up.
//!
//! The dispatch loop itself has no error path: noise, failed codes, the
//! Thursday ceiling and console overflow are all absorbed where they occur.
//! What can fail is startup (bad configuration, a pin that cannot be
//! claimed), and those failures funnel into [`Error`].

use core::fmt;

use crate::config::ConfigError;

/// Every fallible bring-up step returns this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Configuration failed validation.
    Config(ConfigError),
    /// A GPIO could not be configured.
    Gpio(i32),
    /// Peripheral or thread initialisation failed.
    Init(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Gpio(pin) => write!(f, "gpio: pin {pin} could not be configured"),
            Self::Init(msg) => write!(f, "init: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;

/// Validate `config`, mapping failures into [`Error`].
pub fn check_config(config: &crate::config::DoorConfig) -> Result<()> {
    config.validate()?;
    Ok(())
}
