//! Adapter configuration and the persisted schema
//!
//! Parameters are validated here, before any adapter is constructed; the
//! brightness curve itself assumes valid input. The persisted form is
//! versioned: version 1 predates the upper brightness bound, version 2 adds
//! it with a full-range default.

use core::fmt;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::curve::BrightnessCurve;
use crate::device::DeviceId;

/// Current version of the persisted configuration schema.
pub const SCHEMA_VERSION: u8 = 2;

/// Upper brightness bound assumed by version-1 configurations.
pub const DEFAULT_MAX_BRIGHTNESS: u8 = 100;

/// Inclusive bounds accepted for the gamma exponent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GammaBounds {
    pub min: f32,
    pub max: f32,
}

impl GammaBounds {
    const fn contains(self, gamma: f32) -> bool {
        gamma >= self.min && gamma <= self.max
    }
}

/// Gamma range offered during initial setup.
pub const GAMMA_SETUP_BOUNDS: GammaBounds = GammaBounds { min: 0.1, max: 5.0 };

/// Narrower gamma range offered when adjusting an existing adapter.
pub const GAMMA_ADJUST_BOUNDS: GammaBounds = GammaBounds { min: 0.3, max: 3.0 };

/// Validated parameters of one adapter instance.
///
/// Immutable once the adapter is constructed; changing any field means
/// tearing the adapter down and recreating it.
#[derive(Debug, Clone, PartialEq)]
pub struct AdapterConfig {
    /// The wrapped light.
    pub light_id: DeviceId,
    /// Minimum-brightness floor in percent of the physical range (0-99).
    pub min_brightness: u8,
    /// Upper brightness bound in percent (1-100). Carried for the version-2
    /// schema; the curve treats it as the implicit full range.
    pub max_brightness: u8,
    /// Exponent of the power-law curve.
    pub gamma: f32,
}

impl AdapterConfig {
    pub fn new(light_id: DeviceId, min_brightness: u8, gamma: f32) -> Self {
        Self {
            light_id,
            min_brightness,
            max_brightness: DEFAULT_MAX_BRIGHTNESS,
            gamma,
        }
    }

    /// Check all parameters against their declared ranges.
    ///
    /// `gamma_bounds` is the range of the flow being run:
    /// [`GAMMA_SETUP_BOUNDS`] for initial setup, [`GAMMA_ADJUST_BOUNDS`] for
    /// later adjustments.
    pub fn validate(&self, gamma_bounds: GammaBounds) -> Result<(), ConfigError> {
        if self.min_brightness > 99 {
            return Err(ConfigError::MinBrightnessOutOfRange(self.min_brightness));
        }
        if self.max_brightness == 0 || self.max_brightness > 100 {
            return Err(ConfigError::MaxBrightnessOutOfRange(self.max_brightness));
        }
        if !gamma_bounds.contains(self.gamma) {
            return Err(ConfigError::GammaOutOfRange(self.gamma));
        }
        Ok(())
    }

    /// The brightness curve these parameters describe.
    pub fn curve(&self) -> BrightnessCurve {
        BrightnessCurve::new(self.min_brightness, self.gamma)
    }
}

/// Reasons a configuration is rejected before an adapter is constructed.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    MinBrightnessOutOfRange(u8),
    MaxBrightnessOutOfRange(u8),
    GammaOutOfRange(f32),
    /// The persisted schema version is newer than this build understands.
    UnsupportedVersion(u8),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MinBrightnessOutOfRange(v) => {
                write!(f, "minimum brightness {v}% outside 0-99%")
            }
            ConfigError::MaxBrightnessOutOfRange(v) => {
                write!(f, "maximum brightness {v}% outside 1-100%")
            }
            ConfigError::GammaOutOfRange(v) => write!(f, "gamma {v} outside the accepted range"),
            ConfigError::UnsupportedVersion(v) => {
                write!(f, "unsupported configuration schema version {v}")
            }
        }
    }
}

/// Persisted form of the configuration, tagged with its schema version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredConfig {
    pub version: u8,
    pub light_id: DeviceId,
    pub min_brightness: u8,
    pub gamma: f32,
    /// Added by schema version 2.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_brightness: Option<u8>,
}

impl StoredConfig {
    /// Upgrade a stored entry to [`SCHEMA_VERSION`] in place.
    ///
    /// Version 1 entries gain `max_brightness` with its full-range default;
    /// floor and gamma are never altered. Returns whether anything changed.
    pub fn migrate(&mut self) -> Result<bool, ConfigError> {
        match self.version {
            1 => {
                debug!("migrating configuration from version {}", self.version);
                self.max_brightness.get_or_insert(DEFAULT_MAX_BRIGHTNESS);
                self.version = 2;
                info!("configuration migrated to version {}", self.version);
                Ok(true)
            }
            SCHEMA_VERSION => Ok(false),
            version => Err(ConfigError::UnsupportedVersion(version)),
        }
    }

    /// Runtime configuration from a current-version entry.
    pub fn to_config(&self) -> Result<AdapterConfig, ConfigError> {
        if self.version != SCHEMA_VERSION {
            return Err(ConfigError::UnsupportedVersion(self.version));
        }
        Ok(AdapterConfig {
            light_id: self.light_id.clone(),
            min_brightness: self.min_brightness,
            max_brightness: self.max_brightness.unwrap_or(DEFAULT_MAX_BRIGHTNESS),
            gamma: self.gamma,
        })
    }
}
