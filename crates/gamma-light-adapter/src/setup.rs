//! Adapter lifecycle
//!
//! Activation resolves the target through the injected directory, hides the
//! wrapped device, acquires the state subscription and returns the bound
//! adapter. Removal undoes the registry effects. Reconfiguration is a
//! removal followed by a fresh activation: adapter instances are immutable.

use gamma_light_core::{AdapterConfig, GAMMA_SETUP_BOUNDS, LightState, TurnOnRequest};
use log::{error, info};

use crate::adapter::GammaLight;
use crate::channel::StatePublisher;
use crate::error::SetupError;
use crate::ports::{DeviceDirectory, DeviceEntry, LightCommands, StateSource, StateSubscriber};

/// Lights eligible to be wrapped.
///
/// Excludes outputs of this adapter kind and devices that are already
/// wrapped (hidden), preventing chains and cycles.
pub fn selectable_lights<D: DeviceDirectory>(directory: &D) -> impl Iterator<Item = DeviceEntry> {
    directory
        .lights()
        .filter(|entry| !entry.adapter_output && !entry.hidden)
}

/// A configured adapter bound to its device subscription and state
/// publisher.
///
/// Dropping the value releases the subscription; every deactivation path
/// goes through that drop.
pub struct BoundLight<'w, C: LightCommands, S: StateSource> {
    adapter: GammaLight<C>,
    source: S,
    publisher: StatePublisher<'w>,
}

impl<C: LightCommands, S: StateSource> BoundLight<'_, C, S> {
    /// Await the next state report from the wrapped light, reconcile and
    /// publish.
    pub async fn next_update(&mut self) {
        let snapshot = self.source.next().await;
        self.adapter.handle_update(snapshot.as_ref());
        self.publisher.send(self.adapter.state().clone());
    }

    /// Most recently published state.
    pub fn state(&self) -> &LightState {
        self.adapter.state()
    }

    /// Forward a turn-on command, publishing the optimistically updated
    /// state. The underlying failure, if any, is returned as-is.
    pub async fn turn_on(&mut self, request: &TurnOnRequest<'_>) -> Result<(), C::Error> {
        let result = self.adapter.turn_on(request).await;
        self.publisher.send(self.adapter.state().clone());
        result
    }

    /// Forward a turn-off command.
    pub async fn turn_off(&mut self) -> Result<(), C::Error> {
        self.adapter.turn_off().await
    }
}

/// Validate the configuration, resolve the target and wire the adapter.
///
/// Nothing is partially wired on failure: the target is hidden and the
/// subscription acquired only after the reference resolves.
pub fn activate<'w, D, B, C>(
    directory: &mut D,
    subscriber: &B,
    commands: C,
    config: &AdapterConfig,
    publisher: StatePublisher<'w>,
) -> Result<BoundLight<'w, C, B::Source>, SetupError>
where
    D: DeviceDirectory,
    B: StateSubscriber,
    C: LightCommands,
{
    config.validate(GAMMA_SETUP_BOUNDS)?;

    if directory.resolve(&config.light_id).is_none() {
        error!("cannot set up gamma light for unknown device {}", config.light_id);
        return Err(SetupError::UnknownDevice(config.light_id.clone()));
    }

    directory.set_hidden(&config.light_id, true);
    let source = subscriber.subscribe(&config.light_id);
    let adapter = GammaLight::new(config, commands);
    info!(
        "gamma light bound to {} (floor {}%, gamma {})",
        config.light_id, config.min_brightness, config.gamma
    );

    Ok(BoundLight {
        adapter,
        source,
        publisher,
    })
}

/// Undo the registry effects of a removed adapter.
///
/// Unhides the wrapped device; a reference that no longer resolves is not an
/// error at removal time.
pub fn remove<D: DeviceDirectory>(directory: &mut D, config: &AdapterConfig) {
    if directory.resolve(&config.light_id).is_some() {
        directory.set_hidden(&config.light_id, false);
    }
}
