use crate::core::models::selection::Modality;
use serde::Serialize;
use thiserror::Error;

pub const DEFAULT_VMIN: f64 = 0.0;
pub const DEFAULT_VMAX: f64 = 5.0;
pub const DEFAULT_NEUTRON_COLUMN: &str = "Attenuation coef [1/cm] (Sears)";
pub const DEFAULT_XRAY_COLUMN: &str = "X-ray 150kV";
pub const DEFAULT_LABEL_PRECISION: usize = 2;
pub const MAX_LABEL_PRECISION: usize = 10;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Degenerate color range: vmin and vmax are both {0}")]
    DegenerateColorRange(f64),

    #[error("Invalid color range [{vmin}, {vmax}]: bounds must be finite and vmin < vmax")]
    InvalidColorRange { vmin: f64, vmax: f64 },

    #[error("Attenuation column name for {0} must not be empty")]
    EmptyModalityColumn(Modality),

    #[error("Label precision {precision} exceeds the maximum of {max} decimal places")]
    LabelPrecisionTooLarge { precision: usize, max: usize },
}

/// Fixed bounds that map coefficients onto gray levels.
///
/// Values outside the range saturate; the range is never fitted to the data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorRange {
    vmin: f64,
    vmax: f64,
}

impl ColorRange {
    pub fn new(vmin: f64, vmax: f64) -> Result<Self, ConfigError> {
        if !vmin.is_finite() || !vmax.is_finite() {
            return Err(ConfigError::InvalidColorRange { vmin, vmax });
        }
        if vmin == vmax {
            return Err(ConfigError::DegenerateColorRange(vmin));
        }
        if vmin > vmax {
            return Err(ConfigError::InvalidColorRange { vmin, vmax });
        }
        Ok(Self { vmin, vmax })
    }

    pub fn vmin(&self) -> f64 {
        self.vmin
    }

    pub fn vmax(&self) -> f64 {
        self.vmax
    }
}

impl Default for ColorRange {
    fn default() -> Self {
        Self {
            vmin: DEFAULT_VMIN,
            vmax: DEFAULT_VMAX,
        }
    }
}

/// Which source column holds the coefficient for each modality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalityColumns {
    pub neutrons: String,
    pub xray: String,
}

impl ModalityColumns {
    pub fn column_for(&self, modality: Modality) -> &str {
        match modality {
            Modality::Neutrons => &self.neutrons,
            Modality::XRay => &self.xray,
        }
    }
}

impl Default for ModalityColumns {
    fn default() -> Self {
        Self {
            neutrons: DEFAULT_NEUTRON_COLUMN.to_string(),
            xray: DEFAULT_XRAY_COLUMN.to_string(),
        }
    }
}

/// Affine map from (group, period) to grid-centre coordinates.
///
/// `x = group - x_offset`, `y = base_row - period`. Cells are unit squares.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridGeometry {
    pub x_offset: f64,
    pub base_row: f64,
}

impl GridGeometry {
    pub const GROUPS: std::ops::RangeInclusive<i32> = 1..=18;
    pub const PERIODS: std::ops::RangeInclusive<i32> = 1..=7;

    pub fn center(&self, group: i32, period: i32) -> (f64, f64) {
        (
            group as f64 - self.x_offset,
            self.base_row - period as f64,
        )
    }
}

impl Default for GridGeometry {
    fn default() -> Self {
        Self {
            x_offset: 8.0,
            base_row: 9.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub color_range: ColorRange,
    pub modality_columns: ModalityColumns,
    pub geometry: GridGeometry,
    /// Decimal places shown for the coefficient in each cell label.
    pub label_precision: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            color_range: ColorRange::default(),
            modality_columns: ModalityColumns::default(),
            geometry: GridGeometry::default(),
            label_precision: DEFAULT_LABEL_PRECISION,
        }
    }
}

impl RenderConfig {
    pub fn builder() -> RenderConfigBuilder {
        RenderConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct RenderConfigBuilder {
    vmin: Option<f64>,
    vmax: Option<f64>,
    neutron_column: Option<String>,
    xray_column: Option<String>,
    geometry: Option<GridGeometry>,
    label_precision: Option<usize>,
}

impl RenderConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vmin(mut self, vmin: f64) -> Self {
        self.vmin = Some(vmin);
        self
    }
    pub fn vmax(mut self, vmax: f64) -> Self {
        self.vmax = Some(vmax);
        self
    }
    pub fn neutron_column(mut self, column: impl Into<String>) -> Self {
        self.neutron_column = Some(column.into());
        self
    }
    pub fn xray_column(mut self, column: impl Into<String>) -> Self {
        self.xray_column = Some(column.into());
        self
    }
    pub fn geometry(mut self, geometry: GridGeometry) -> Self {
        self.geometry = Some(geometry);
        self
    }
    pub fn label_precision(mut self, precision: usize) -> Self {
        self.label_precision = Some(precision);
        self
    }

    pub fn build(self) -> Result<RenderConfig, ConfigError> {
        let color_range = ColorRange::new(
            self.vmin.unwrap_or(DEFAULT_VMIN),
            self.vmax.unwrap_or(DEFAULT_VMAX),
        )?;

        let modality_columns = ModalityColumns {
            neutrons: self
                .neutron_column
                .unwrap_or_else(|| DEFAULT_NEUTRON_COLUMN.to_string()),
            xray: self
                .xray_column
                .unwrap_or_else(|| DEFAULT_XRAY_COLUMN.to_string()),
        };
        for modality in Modality::ALL {
            if modality_columns.column_for(modality).trim().is_empty() {
                return Err(ConfigError::EmptyModalityColumn(modality));
            }
        }

        let label_precision = self.label_precision.unwrap_or(DEFAULT_LABEL_PRECISION);
        if label_precision > MAX_LABEL_PRECISION {
            return Err(ConfigError::LabelPrecisionTooLarge {
                precision: label_precision,
                max: MAX_LABEL_PRECISION,
            });
        }

        Ok(RenderConfig {
            color_range,
            modality_columns,
            geometry: self.geometry.unwrap_or_default(),
            label_precision,
        })
    }
}
