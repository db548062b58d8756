//! Visual encoding: marker size and colour derived from debt figures.
//!
//! Size grows linearly with the amount owed and is clamped to a fixed range
//! so tiny debts stay visible and huge ones don't swamp the map. Colour runs
//! from green (0 %) to red (100 %) along the HSL hue wheel and is deliberately
//! not clamped: shares above 100 give negative hues, negative shares give
//! hues above 120.
//!
//! Non-finite input: a NaN debt sizes as zero, infinite debts pin to the
//! bounds. Any non-finite share colours as zero.

use crate::config::EncodingConfig;

pub const SIZE_SCALE: f64 = 0.000_000_1;
pub const MIN_SIZE: f64 = 0.5;
pub const MAX_SIZE: f64 = 5.0;
pub const BASE_HUE: f64 = 120.0;
pub const HUE_PER_PERCENT: f64 = 1.2;
pub const SATURATION: f64 = 100.0;
pub const LIGHTNESS: f64 = 50.0;

/// Marker size for a debt amount, using the default scale and bounds.
pub fn calculate_marker_size(debt: f64) -> f64 {
    MarkerScale::default().size(debt)
}

/// Marker colour for a debt share (percent), as an `hsl(...)` string.
pub fn calculate_marker_color(debt_share: f64) -> String {
    MarkerScale::default().color(debt_share).to_string()
}

/// An HSL colour. Formats as `hsl(<hue>, <saturation>%, <lightness>%)` with
/// each number in its shortest exact form (`60`, not `60.0`). Numbers are
/// always written in plain decimal, never with an exponent, so a hue of
/// 2.842170943040401e-14 prints as `0.00000000000002842170943040401`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl std::fmt::Display for Hsl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

/// Size and colour mapping parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerScale {
    pub scale: f64,
    pub min_size: f64,
    pub max_size: f64,
    pub base_hue: f64,
    pub hue_per_percent: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl Default for MarkerScale {
    fn default() -> Self {
        Self {
            scale: SIZE_SCALE,
            min_size: MIN_SIZE,
            max_size: MAX_SIZE,
            base_hue: BASE_HUE,
            hue_per_percent: HUE_PER_PERCENT,
            saturation: SATURATION,
            lightness: LIGHTNESS,
        }
    }
}

impl From<&EncodingConfig> for MarkerScale {
    fn from(cfg: &EncodingConfig) -> Self {
        Self {
            scale: cfg.size_scale,
            min_size: cfg.min_size,
            max_size: cfg.max_size,
            base_hue: cfg.base_hue,
            hue_per_percent: cfg.hue_per_percent,
            saturation: cfg.saturation,
            lightness: cfg.lightness,
        }
    }
}

impl MarkerScale {
    /// `debt * scale`, held within `[min_size, max_size]`. The lower bound
    /// wins if the bounds are inverted.
    pub fn size(&self, debt: f64) -> f64 {
        let debt = if debt.is_nan() { 0.0 } else { debt };
        (debt * self.scale).min(self.max_size).max(self.min_size)
    }

    /// `base_hue - share * hue_per_percent`, unclamped.
    pub fn color(&self, debt_share: f64) -> Hsl {
        let share = if debt_share.is_finite() {
            debt_share
        } else {
            tracing::warn!(debt_share, "non-finite debt share, colouring as 0");
            0.0
        };
        Hsl {
            hue: self.base_hue - share * self.hue_per_percent,
            saturation: self.saturation,
            lightness: self.lightness,
        }
    }
}
