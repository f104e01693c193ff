//! Adapter setup errors

use core::fmt;

use gamma_light_core::{ConfigError, DeviceId};

/// Failure to establish an adapter instance.
///
/// Setup aborts with nothing partially wired; none of these are retried
/// automatically. Command failures are not represented here — they carry the
/// backend's own error type straight through the adapter.
#[derive(Debug, Clone, PartialEq)]
pub enum SetupError {
    /// The target device reference does not resolve.
    UnknownDevice(DeviceId),
    /// A parameter is outside its declared range.
    Config(ConfigError),
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::UnknownDevice(id) => write!(f, "unknown device {id}"),
            SetupError::Config(e) => write!(f, "invalid configuration: {e}"),
        }
    }
}

impl From<ConfigError> for SetupError {
    fn from(e: ConfigError) -> Self {
        SetupError::Config(e)
    }
}
