//! Core types for the gamma-adjusted light adapter
//!
//! This crate holds everything that is independent of the hosting runtime:
//!
//! - **Brightness curve** (`curve`): the pure remapping between apparent and
//!   physical brightness, parameterized by a gamma exponent and a
//!   minimum-brightness floor
//! - **Light domain types** (`light`): color modes, capability sets, state
//!   snapshots and command DTOs shared with the adapter
//! - **Configuration** (`config`, `device`): validated adapter parameters and
//!   the versioned persisted schema
//!
//! The adapter itself, together with the boundary interfaces toward the
//! hosting runtime, lives in `gamma-light-adapter`.

#![no_std]

pub mod config;
pub mod curve;
pub mod device;
pub mod light;

pub use config::{
    AdapterConfig, ConfigError, DEFAULT_MAX_BRIGHTNESS, GAMMA_ADJUST_BOUNDS, GAMMA_SETUP_BOUNDS,
    GammaBounds, SCHEMA_VERSION, StoredConfig,
};
pub use curve::BrightnessCurve;
pub use device::DeviceId;
pub use light::{
    CapabilitySet, ColorMode, Flash, LightFeatures, LightSnapshot, LightState, TurnOnRequest,
    XyColor,
};
