//! Boundary interfaces toward the hosting runtime
//!
//! The hosting runtime owns the device registry, event delivery and service
//! dispatch. The adapter only ever talks to these capabilities, injected at
//! construction time; there is no ambient global state.

use gamma_light_core::{DeviceId, LightSnapshot, TurnOnRequest};

/// One device known to the hosting runtime's registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceEntry {
    pub id: DeviceId,
    /// True when the device is itself the output of a gamma-light adapter.
    pub adapter_output: bool,
    /// True when the device is hidden because an adapter already wraps it.
    pub hidden: bool,
}

/// Lookup and update access to the hosting runtime's device registry.
pub trait DeviceDirectory {
    /// Resolve a device reference. Returns `None` when it no longer
    /// resolves; callers must treat that as an explicit failure, never
    /// proceed silently.
    fn resolve(&self, id: &DeviceId) -> Option<DeviceEntry>;

    /// All registered light devices.
    fn lights(&self) -> impl Iterator<Item = DeviceEntry>;

    /// Mark a device hidden or visible. Returns whether the device was
    /// known.
    fn set_hidden(&mut self, id: &DeviceId, hidden: bool) -> bool;
}

/// Stream of state reports for one subscribed device.
///
/// `None` means the device is absent from the runtime. Dropping the source
/// releases the subscription; implementations tie the registration to the
/// value's lifetime so release happens on every deactivation path.
pub trait StateSource {
    async fn next(&mut self) -> Option<LightSnapshot>;
}

/// Acquires state subscriptions for single devices.
///
/// Implementations deliver the device's current state as the first event of
/// a fresh subscription, so a newly activated adapter reconciles without
/// waiting for the wrapped light to change.
pub trait StateSubscriber {
    type Source: StateSource;

    fn subscribe(&self, id: &DeviceId) -> Self::Source;
}

/// Command dispatch toward the wrapped light.
///
/// Calls complete, or fail, before returning; the adapter issues no retries
/// and owns no timeout. Timeout or cancellation semantics belong to the
/// implementation and surface here as errors.
pub trait LightCommands {
    type Error;

    /// Turn the wrapped light on. Brightness in `request` is already in the
    /// physical domain.
    async fn turn_on(&mut self, request: &TurnOnRequest<'_>) -> Result<(), Self::Error>;

    async fn turn_off(&mut self) -> Result<(), Self::Error>;
}
