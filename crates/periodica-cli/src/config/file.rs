use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileColorRangeConfig {
    pub vmin: Option<f64>,
    pub vmax: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileColumnsConfig {
    pub neutrons: Option<String>,
    #[serde(rename = "x-ray")]
    pub xray: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileTableConfig {
    pub sheet: Option<String>,
    #[serde(rename = "skip-rows")]
    pub skip_rows: Option<usize>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(rename = "color-range")]
    pub color_range: Option<FileColorRangeConfig>,
    pub columns: Option<FileColumnsConfig>,
    pub table: Option<FileTableConfig>,
    #[serde(rename = "label-precision")]
    pub label_precision: Option<usize>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }
}
