//! Light domain types
//!
//! DTOs shared between the brightness curve and the adapter: the state
//! reported by the wrapped light, the capability surface the adapter exposes,
//! the state it publishes, and the attributes a turn-on command may carry.

use heapless::Vec;

/// Maximum number of color modes a wrapped light may report.
const MAX_REPORTED_MODES: usize = 8;

/// Color modes a light can report or expose.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// On/Off only
    OnOff,
    /// Brightness only (no color)
    #[default]
    Brightness,
    /// Color temperature mode (in mireds)
    ColorTemp,
    /// Hue/saturation color
    Hs,
    /// RGB color
    Rgb,
    /// RGB plus white channel
    Rgbw,
    /// RGB plus warm and cold white channels
    Rgbww,
    /// CIE xy color
    Xy,
}

impl ColorMode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ColorMode::OnOff => "onoff",
            ColorMode::Brightness => "brightness",
            ColorMode::ColorTemp => "color_temp",
            ColorMode::Hs => "hs",
            ColorMode::Rgb => "rgb",
            ColorMode::Rgbw => "rgbw",
            ColorMode::Rgbww => "rgbww",
            ColorMode::Xy => "xy",
        }
    }

    /// Whether this mode carries full color information.
    pub const fn is_color(&self) -> bool {
        matches!(
            self,
            ColorMode::Hs | ColorMode::Rgb | ColorMode::Rgbw | ColorMode::Rgbww | ColorMode::Xy
        )
    }
}

/// CIE xy color coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct XyColor {
    pub x: f32,
    pub y: f32,
}

impl XyColor {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Flash styles a light may perform on turn-on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flash {
    Short,
    Long,
}

/// Pass-through feature flags mirrored from the wrapped light.
///
/// Only the features the adapter forwards unchanged are modeled; everything
/// else the wrapped light supports is not exposed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LightFeatures {
    pub transition: bool,
    pub flash: bool,
    pub effect: bool,
}

impl LightFeatures {
    pub const fn new(transition: bool, flash: bool, effect: bool) -> Self {
        Self {
            transition,
            flash,
            effect,
        }
    }
}

/// Point-in-time state reported for the wrapped light.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LightSnapshot {
    /// Whether the wrapped light is reachable at all.
    pub available: bool,
    pub is_on: bool,
    /// Physical brightness (0-255). Absent on lights without dimming, or in
    /// degraded reports.
    pub brightness: Option<u8>,
    pub supported_color_modes: Vec<ColorMode, MAX_REPORTED_MODES>,
    /// Mode the light is currently in.
    pub color_mode: Option<ColorMode>,
    pub features: LightFeatures,
    pub color_temp: Option<u16>,
    pub min_mireds: Option<u16>,
    pub max_mireds: Option<u16>,
    pub xy: Option<XyColor>,
}

impl LightSnapshot {
    /// Snapshot of a reachable light that is on.
    pub fn on() -> Self {
        Self {
            available: true,
            is_on: true,
            ..Self::default()
        }
    }

    /// Snapshot of a reachable light that is off.
    pub fn off() -> Self {
        Self {
            available: true,
            is_on: false,
            ..Self::default()
        }
    }

    /// Snapshot of an unreachable light.
    pub fn unavailable() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_brightness(mut self, brightness: u8) -> Self {
        self.brightness = Some(brightness);
        self
    }

    #[must_use]
    pub fn with_color_modes(mut self, modes: &[ColorMode]) -> Self {
        self.supported_color_modes.clear();
        let _ = self.supported_color_modes.extend_from_slice(modes);
        self
    }

    #[must_use]
    pub fn with_color_mode(mut self, mode: ColorMode) -> Self {
        self.color_mode = Some(mode);
        self
    }

    #[must_use]
    pub fn with_features(mut self, features: LightFeatures) -> Self {
        self.features = features;
        self
    }

    #[must_use]
    pub fn with_color_temp(mut self, mireds: u16) -> Self {
        self.color_temp = Some(mireds);
        self
    }

    #[must_use]
    pub fn with_mireds_range(mut self, min: u16, max: u16) -> Self {
        self.min_mireds = Some(min);
        self.max_mireds = Some(max);
        self
    }

    #[must_use]
    pub fn with_xy(mut self, x: f32, y: f32) -> Self {
        self.xy = Some(XyColor::new(x, y));
        self
    }
}

/// Capability surface the adapter exposes.
///
/// Recomputed wholesale from every observation of the wrapped light and
/// assigned as a value; never mutated field-by-field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilitySet {
    /// Mode the adapter currently reports.
    pub color_mode: ColorMode,
    /// Modes the adapter declares as supported.
    pub supported_color_modes: Vec<ColorMode, 2>,
    pub features: LightFeatures,
}

impl CapabilitySet {
    fn exposing(color_mode: ColorMode, supported: &[ColorMode], features: LightFeatures) -> Self {
        let mut supported_color_modes = Vec::new();
        let _ = supported_color_modes.extend_from_slice(supported);
        Self {
            color_mode,
            supported_color_modes,
            features,
        }
    }

    /// Derive the exposed capability surface from a reported snapshot.
    ///
    /// Collapses the wrapped light's modes to a strictly smaller declared
    /// surface: full color support is exposed as xy (keeping color
    /// temperature alongside when present, and preferring whichever of the
    /// two the light is currently in), otherwise color-temperature-only,
    /// brightness-only, or plain on/off.
    pub fn for_snapshot(snapshot: &LightSnapshot) -> Self {
        let modes = &snapshot.supported_color_modes;
        let supports_color = modes.iter().any(ColorMode::is_color);
        let supports_temperature = modes.contains(&ColorMode::ColorTemp);

        if supports_color {
            if supports_temperature {
                let current = if snapshot.color_mode == Some(ColorMode::ColorTemp) {
                    ColorMode::ColorTemp
                } else {
                    ColorMode::Xy
                };
                return Self::exposing(
                    current,
                    &[ColorMode::Xy, ColorMode::ColorTemp],
                    snapshot.features,
                );
            }
            return Self::exposing(ColorMode::Xy, &[ColorMode::Xy], snapshot.features);
        }
        if supports_temperature {
            return Self::exposing(
                ColorMode::ColorTemp,
                &[ColorMode::ColorTemp],
                snapshot.features,
            );
        }
        if modes.contains(&ColorMode::Brightness) {
            return Self::exposing(
                ColorMode::Brightness,
                &[ColorMode::Brightness],
                snapshot.features,
            );
        }
        // A non-dimmable light leaves nothing to gamma-adjust, but the
        // adapter still mirrors it rather than failing.
        Self::exposing(ColorMode::OnOff, &[ColorMode::OnOff], snapshot.features)
    }
}

impl Default for CapabilitySet {
    fn default() -> Self {
        Self::exposing(
            ColorMode::Brightness,
            &[ColorMode::Brightness],
            LightFeatures::default(),
        )
    }
}

/// State the adapter publishes to its own observers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LightState {
    pub available: bool,
    pub is_on: bool,
    /// Apparent brightness (0-255), i.e. the gamma-corrected value.
    pub brightness: Option<u8>,
    pub capabilities: CapabilitySet,
    pub color_temp: Option<u16>,
    pub min_mireds: Option<u16>,
    pub max_mireds: Option<u16>,
    pub xy: Option<XyColor>,
}

/// Attributes accepted by a turn-on command.
///
/// Brightness is in the apparent domain when handed to the adapter and in the
/// physical domain when the adapter forwards the request to the wrapped
/// light; every other attribute is forwarded verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct TurnOnRequest<'a> {
    pub brightness: Option<u8>,
    pub color_temp: Option<u16>,
    pub effect: Option<&'a str>,
    pub flash: Option<Flash>,
    /// Transition time in seconds.
    pub transition: Option<f32>,
    pub white: Option<u8>,
    pub white_value: Option<u8>,
    pub xy: Option<XyColor>,
}

impl<'a> TurnOnRequest<'a> {
    pub const fn new() -> Self {
        Self {
            brightness: None,
            color_temp: None,
            effect: None,
            flash: None,
            transition: None,
            white: None,
            white_value: None,
            xy: None,
        }
    }

    #[must_use]
    pub const fn with_brightness(mut self, brightness: u8) -> Self {
        self.brightness = Some(brightness);
        self
    }

    #[must_use]
    pub const fn with_color_temp(mut self, mireds: u16) -> Self {
        self.color_temp = Some(mireds);
        self
    }

    #[must_use]
    pub const fn with_effect(mut self, effect: &'a str) -> Self {
        self.effect = Some(effect);
        self
    }

    #[must_use]
    pub const fn with_flash(mut self, flash: Flash) -> Self {
        self.flash = Some(flash);
        self
    }

    #[must_use]
    pub const fn with_transition(mut self, seconds: f32) -> Self {
        self.transition = Some(seconds);
        self
    }

    #[must_use]
    pub const fn with_white(mut self, white: u8) -> Self {
        self.white = Some(white);
        self
    }

    #[must_use]
    pub const fn with_white_value(mut self, white_value: u8) -> Self {
        self.white_value = Some(white_value);
        self
    }

    #[must_use]
    pub const fn with_xy(mut self, x: f32, y: f32) -> Self {
        self.xy = Some(XyColor::new(x, y));
        self
    }
}
