use super::config::{ColorRange, ConfigError};
use serde::{Serialize, Serializer};
use std::fmt;

/// Gray level at or above which a cell counts as a dark background.
pub const DARK_BACKGROUND_THRESHOLD: f64 = 0.5;

/// A neutral gray: the same level on all three channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn gray(level: f64) -> Self {
        let channel = (255.0 * level.clamp(0.0, 1.0)).floor() as u8;
        Self {
            r: channel,
            g: channel,
            b: channel,
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FontColor {
    #[serde(rename = "white")]
    Light,
    #[serde(rename = "black")]
    Dark,
}

/// The shading of one cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrayShade {
    /// Gray level in `[0, 1]`; higher coefficients give lower levels.
    pub intensity: f64,
    /// `intensity >= 0.5`. Note that a high gray level is a *light* fill.
    pub is_dark_background: bool,
}

impl GrayShade {
    pub fn from_intensity(intensity: f64) -> Self {
        Self {
            intensity,
            is_dark_background: intensity >= DARK_BACKGROUND_THRESHOLD,
        }
    }

    pub fn fill(&self) -> Rgb {
        Rgb::gray(self.intensity)
    }

    /// Label color that stays readable on [`GrayShade::fill`]: black on the
    /// light half of the scale, white on the dark half.
    pub fn font_color(&self) -> FontColor {
        if self.intensity >= DARK_BACKGROUND_THRESHOLD {
            FontColor::Dark
        } else {
            FontColor::Light
        }
    }
}

/// Maps coefficients onto gray levels over a fixed [`ColorRange`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorEncoder {
    range: ColorRange,
}

impl ColorEncoder {
    pub fn new(range: ColorRange) -> Self {
        Self { range }
    }

    pub fn range(&self) -> ColorRange {
        self.range
    }

    pub fn encode(&self, value: f64) -> GrayShade {
        let (vmin, vmax) = (self.range.vmin(), self.range.vmax());
        let value = if value.is_nan() { 0.0 } else { value };
        let clamped = value.clamp(vmin, vmax);
        GrayShade::from_intensity(1.0 - (clamped - vmin) / (vmax - vmin))
    }
}

impl Default for ColorEncoder {
    fn default() -> Self {
        Self::new(ColorRange::default())
    }
}

/// One-shot form of [`ColorEncoder::encode`] that validates the range first.
pub fn encode(value: f64, vmin: f64, vmax: f64) -> Result<(f64, bool), ConfigError> {
    let shade = ColorEncoder::new(ColorRange::new(vmin, vmax)?).encode(value);
    Ok((shade.intensity, shade.is_dark_background))
}
