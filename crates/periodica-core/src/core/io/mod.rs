//! Loading element tables from disk.
//!
//! Every format implements [`traits::TableFile`]; [`load_table`] picks the
//! implementation from the file extension.

pub mod delimited;
pub mod error;
mod rows;
pub mod traits;
pub mod workbook;

use crate::core::models::table::ElementTable;
use delimited::CsvTable;
use error::TableLoadError;
use std::path::Path;
use tracing::info;
use traits::{LoadOptions, TableFile};
use workbook::XlsxTable;

/// Loads an element table, choosing the reader from the file extension.
pub fn load_table(path: &Path, options: &LoadOptions) -> Result<ElementTable, TableLoadError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    let table = match extension.as_deref() {
        Some("csv") => CsvTable::read_from_path(path, options)?,
        Some("xlsx") | Some("xlsm") => XlsxTable::read_from_path(path, options)?,
        _ => {
            return Err(TableLoadError::UnsupportedFormat {
                path: path.to_path_buf(),
            });
        }
    };

    info!(
        "Loaded {} elements with {} columns from {:?}",
        table.len(),
        table.columns().len(),
        path
    );
    Ok(table)
}
