use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableLoadError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Workbook parsing error: {0}")]
    Xlsx(#[from] calamine::XlsxError),

    #[error("Worksheet '{0}' not found in workbook")]
    MissingSheet(String),

    #[error("Required column '{0}' is missing from the table header")]
    MissingColumn(&'static str),

    #[error("Row {row}: column '{column}' must be an integer, found '{value}'")]
    InvalidCoordinate {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("The table contains no element records")]
    Empty,

    #[error("Unsupported table format for '{}'. Expected .csv or .xlsx", .path.display())]
    UnsupportedFormat { path: PathBuf },
}
