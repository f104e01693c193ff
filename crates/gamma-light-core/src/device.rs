//! Device references

use core::fmt;

use heapless::String;
use serde::{Deserialize, Serialize};

/// Maximum length of a device reference.
const MAX_DEVICE_ID_LEN: usize = 64;

/// Opaque reference to a device known to the hosting runtime.
///
/// The adapter never interprets the contents; it only hands the reference
/// back to the runtime's directory, subscription and command interfaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceId(String<MAX_DEVICE_ID_LEN>);

impl DeviceId {
    /// Create a reference. Returns `None` when `id` exceeds the supported
    /// length.
    pub fn new(id: &str) -> Option<Self> {
        String::try_from(id).ok().map(Self)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}
