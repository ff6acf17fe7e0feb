use periodica::core::io::traits::LoadOptions;
use periodica::engine::config::{
    DEFAULT_LABEL_PRECISION, DEFAULT_NEUTRON_COLUMN, DEFAULT_VMAX, DEFAULT_VMIN,
    DEFAULT_XRAY_COLUMN,
};

pub struct DefaultsConfig {
    pub vmin: f64,
    pub vmax: f64,
    pub neutron_column: String,
    pub xray_column: String,
    pub sheet: String,
    pub skip_rows: usize,
    pub label_precision: usize,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        let load = LoadOptions::default();
        Self {
            vmin: DEFAULT_VMIN,
            vmax: DEFAULT_VMAX,
            neutron_column: DEFAULT_NEUTRON_COLUMN.to_string(),
            xray_column: DEFAULT_XRAY_COLUMN.to_string(),
            sheet: load.sheet,
            skip_rows: load.skip_rows,
            label_precision: DEFAULT_LABEL_PRECISION,
        }
    }
}
