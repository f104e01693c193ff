//! The gamma-adjusted light entity
//!
//! Mirrors one wrapped light: capabilities and on/off state follow the
//! wrapped device on every observation, brightness is remapped through the
//! curve in both directions, and everything else passes through verbatim.

use gamma_light_core::{
    AdapterConfig, BrightnessCurve, CapabilitySet, ColorMode, DeviceId, LightSnapshot, LightState,
    TurnOnRequest,
};
use log::{debug, warn};

use crate::ports::LightCommands;

/// Virtual light wrapping one dimmable device.
///
/// The adapter holds no on/off state of its own; it mirrors whatever the
/// wrapped light reports. Within "on", brightness and color fields are
/// reconciled on every observation, except that an observed brightness equal
/// to the value most recently commanded by this adapter is treated as an
/// echo and leaves the apparent brightness untouched.
pub struct GammaLight<C: LightCommands> {
    commands: C,
    light_id: DeviceId,
    curve: BrightnessCurve,
    state: LightState,
    /// Physical brightness most recently sent to the wrapped light.
    /// Advisory: consulted only for echo suppression, reset to 0 whenever an
    /// observation does not match it.
    last_target_brightness: u8,
}

impl<C: LightCommands> GammaLight<C> {
    pub fn new(config: &AdapterConfig, commands: C) -> Self {
        Self {
            commands,
            light_id: config.light_id.clone(),
            curve: config.curve(),
            state: LightState::default(),
            last_target_brightness: 0,
        }
    }

    /// Most recently reconciled state.
    pub fn state(&self) -> &LightState {
        &self.state
    }

    /// The wrapped device.
    pub fn light_id(&self) -> &DeviceId {
        &self.light_id
    }

    /// Reconcile against a state report for the wrapped light.
    ///
    /// `None`, an unavailable report, or a report missing required fields
    /// marks the adapter unavailable; it recovers on the next valid report.
    pub fn handle_update(&mut self, snapshot: Option<&LightSnapshot>) {
        let Some(snapshot) = snapshot else {
            self.state.available = false;
            return;
        };
        if !snapshot.available {
            self.state.available = false;
            return;
        }

        let capabilities = CapabilitySet::for_snapshot(snapshot);
        if capabilities.color_mode == ColorMode::ColorTemp {
            if let Some(min) = snapshot.min_mireds {
                self.state.min_mireds = Some(min);
            }
            if let Some(max) = snapshot.max_mireds {
                self.state.max_mireds = Some(max);
            }
        }

        self.state.is_on = snapshot.is_on;

        if snapshot.is_on && capabilities.color_mode != ColorMode::OnOff {
            let Some(physical) = snapshot.brightness else {
                warn!(
                    "{} reported on without brightness, marking unavailable",
                    self.light_id
                );
                self.state.capabilities = capabilities;
                self.state.available = false;
                return;
            };

            // Recompute the apparent brightness from the observed dimmer
            // value, unless it is the value we asked for.
            if physical == self.last_target_brightness {
                debug!(
                    "{} echoed commanded brightness {}, keeping apparent value",
                    self.light_id, physical
                );
            } else {
                self.last_target_brightness = 0;
                self.state.brightness = Some(self.curve.reverse(physical));
            }

            if capabilities.color_mode == ColorMode::Xy {
                self.state.xy = snapshot.xy;
            }
            if capabilities.color_mode == ColorMode::ColorTemp {
                self.state.color_temp = snapshot.color_temp;
            }
        }

        self.state.capabilities = capabilities;
        self.state.available = true;
    }

    /// Forward a turn-on command to the wrapped light.
    ///
    /// A requested brightness above 0 is stored as the adapter's own
    /// apparent brightness and forwarded through the curve; 0 is forwarded
    /// as physical 0 (an off-level dim, not a power-off). The apparent value
    /// is set optimistically and not rolled back when the underlying call
    /// fails.
    pub async fn turn_on(&mut self, request: &TurnOnRequest<'_>) -> Result<(), C::Error> {
        let mut forwarded = *request;

        if let Some(apparent) = request.brightness {
            if apparent > 0 {
                self.state.brightness = Some(apparent);
                let physical = self.curve.forward(apparent);
                // Remember what we asked for, so the echoed observation does
                // not round-trip into a different apparent value.
                self.last_target_brightness = physical;
                forwarded.brightness = Some(physical);
                debug!(
                    "{} turn_on: apparent {} -> physical {}",
                    self.light_id, apparent, physical
                );
            } else {
                forwarded.brightness = Some(0);
            }
        }

        self.commands.turn_on(&forwarded).await
    }

    /// Forward a turn-off command to the wrapped light.
    pub async fn turn_off(&mut self) -> Result<(), C::Error> {
        self.commands.turn_off().await
    }
}
