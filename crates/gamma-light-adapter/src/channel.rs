//! Channel plumbing for hosts built on `embassy-sync`
//!
//! Snapshot events travel over a bounded channel per wrapped device; the
//! adapter's own published state fans out through a watch so late observers
//! see the latest value.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};
use embassy_sync::watch;
use gamma_light_core::{LightSnapshot, LightState};

use crate::ports::StateSource;

const SNAPSHOT_CHANNEL_SIZE: usize = 4;

/// Maximum simultaneous observers of the adapter's published state.
pub const MAX_STATE_OBSERVERS: usize = 4;

/// Channel carrying state reports for one wrapped device. `None` marks the
/// device as absent.
pub type SnapshotChannel =
    Channel<CriticalSectionRawMutex, Option<LightSnapshot>, SNAPSHOT_CHANNEL_SIZE>;

/// Type alias for the snapshot sender
pub type SnapshotSender<'a> =
    Sender<'a, CriticalSectionRawMutex, Option<LightSnapshot>, SNAPSHOT_CHANNEL_SIZE>;

/// Type alias for the snapshot receiver
pub type SnapshotReceiver<'a> =
    Receiver<'a, CriticalSectionRawMutex, Option<LightSnapshot>, SNAPSHOT_CHANNEL_SIZE>;

/// Watch distributing the adapter's published state.
pub type StateWatch = watch::Watch<CriticalSectionRawMutex, LightState, MAX_STATE_OBSERVERS>;

/// Sending side of [`StateWatch`].
pub type StatePublisher<'a> =
    watch::Sender<'a, CriticalSectionRawMutex, LightState, MAX_STATE_OBSERVERS>;

/// Receiving side of [`StateWatch`].
pub type StateObserver<'a> =
    watch::Receiver<'a, CriticalSectionRawMutex, LightState, MAX_STATE_OBSERVERS>;

/// [`StateSource`] over a snapshot channel receiver.
pub struct ChannelStateSource<'a> {
    receiver: SnapshotReceiver<'a>,
}

impl<'a> ChannelStateSource<'a> {
    pub const fn new(receiver: SnapshotReceiver<'a>) -> Self {
        Self { receiver }
    }
}

impl StateSource for ChannelStateSource<'_> {
    async fn next(&mut self) -> Option<LightSnapshot> {
        self.receiver.receive().await
    }
}
