//! Gamma-adjusted virtual light adapter
//!
//! Wraps one dimmable light of a hosting runtime and exposes it as a new
//! virtual light whose brightness is remapped through a gamma curve with a
//! minimum-brightness floor. The crate is structured in three layers:
//!
//! - **Ports** (`ports`): the boundary interfaces the hosting runtime
//!   implements — device directory, state subscription, command dispatch
//! - **Adapter** (`adapter`): the stateful entity mirroring capabilities,
//!   remapping brightness in both directions and suppressing echoes of its
//!   own commands
//! - **Lifecycle** (`setup`, `channel`): activation, the observation loop,
//!   removal, and channel plumbing for hosts built on `embassy-sync`
//!
//! # Example
//!
//! ```ignore
//! use gamma_light_adapter::{activate, StateWatch};
//! use gamma_light_core::{AdapterConfig, DeviceId, TurnOnRequest};
//!
//! let config = AdapterConfig::new(DeviceId::new("light.porch").unwrap(), 20, 2.2);
//! static STATE: StateWatch = StateWatch::new();
//!
//! let mut bound = activate(&mut directory, &subscriber, commands, &config, STATE.sender())?;
//! bound.turn_on(&TurnOnRequest::new().with_brightness(128)).await?;
//! bound.next_update().await;
//! ```

#![no_std]
// Single-threaded hosts; the boundary traits do not promise Send futures.
#![allow(async_fn_in_trait)]

pub mod adapter;
pub mod channel;
pub mod error;
pub mod ports;
pub mod setup;

pub use adapter::GammaLight;
pub use channel::{
    ChannelStateSource, MAX_STATE_OBSERVERS, SnapshotChannel, SnapshotReceiver, SnapshotSender,
    StateObserver, StatePublisher, StateWatch,
};
pub use error::SetupError;
pub use ports::{DeviceDirectory, DeviceEntry, LightCommands, StateSource, StateSubscriber};
pub use setup::{BoundLight, activate, remove, selectable_lights};
