//! Gamma and minimum-brightness remapping
//!
//! Maps between the apparent brightness exposed by the adapter and the
//! physical brightness sent to the wrapped light. The forward direction
//! applies gamma compression and rescales the result into the floor-adjusted
//! part of the physical range; the reverse direction undoes both steps for
//! values observed on the wrapped light.

use libm::{powf, roundf};

/// Bidirectional brightness remapping with a gamma curve and a minimum floor.
///
/// Both directions treat brightness 0 as "off"; the caller short-circuits it
/// and never passes 0 to [`forward`](Self::forward). The curve assumes a
/// validated configuration (`min_brightness < 100`, `gamma > 0`, see
/// [`AdapterConfig::validate`](crate::config::AdapterConfig::validate)) and
/// does not re-check its parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrightnessCurve {
    min_brightness: u8,
    gamma: f32,
}

impl BrightnessCurve {
    /// Create a curve from a floor percentage (0-99) and a gamma exponent.
    pub const fn new(min_brightness: u8, gamma: f32) -> Self {
        Self {
            min_brightness,
            gamma,
        }
    }

    /// Map an apparent brightness (1-255) to the physical value (1-255).
    ///
    /// A nonzero request never produces 0: physical 0 would be
    /// indistinguishable from "off" on the wrapped light.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn forward(&self, apparent: u8) -> u8 {
        let gamma_pct = powf(f32::from(apparent) / 255.0, self.gamma) * 100.0;
        let floor = f32::from(self.min_brightness);
        let physical_pct = gamma_pct * (100.0 - floor) / 100.0 + floor;
        let physical = roundf(physical_pct * 255.0 / 100.0) as u8;
        physical.max(1)
    }

    /// Map a physical brightness (0-255) observed on the wrapped light back
    /// to the apparent value (0-255).
    ///
    /// Physical values below the floor clamp to apparent 0.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn reverse(&self, physical: u8) -> u8 {
        let physical_pct = f32::from(physical) * 100.0 / 255.0;
        let floor = f32::from(self.min_brightness);
        let adjusted = (physical_pct - floor).max(0.0) / (100.0 - floor);
        let apparent = powf(adjusted, 1.0 / self.gamma);
        roundf(apparent * 255.0) as u8
    }
}
