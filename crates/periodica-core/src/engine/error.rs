use thiserror::Error;

use super::config::ConfigError;
use crate::core::models::selection::Modality;

#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
    #[error("Field '{field}' does not exist in the element table")]
    FieldNotFound { field: String },

    #[error("Element table has no '{column}' column for the {modality} modality")]
    MissingModalityColumn { modality: Modality, column: String },

    #[error("Invalid render configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error(
        "Hover fields of element '{symbol}' do not line up with the template: expected {expected:?}, found {found:?}"
    )]
    HoverArity {
        symbol: String,
        expected: Vec<String>,
        found: Vec<String>,
    },
}
