use super::error::TableLoadError;
use crate::core::models::table::ElementTable;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

/// Options shared by every element table format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    /// Worksheet to read from workbook formats. Ignored by flat formats.
    pub sheet: String,
    /// Number of leading data rows (after the header) to discard.
    ///
    /// Defaults to `0`, so every data row is read. Attenuation workbooks that
    /// keep a units row directly under the header need `skip_rows = 1`;
    /// without it that row fails with [`TableLoadError::InvalidCoordinate`]
    /// because its `Group` cell is blank.
    pub skip_rows: usize,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            sheet: "data".to_string(),
            skip_rows: 0,
        }
    }
}

/// Defines the interface for reading element tables from a file format.
///
/// Implementors handle format-specific parsing and hand the header and cells
/// to a shared assembler, so every format produces identically shaped tables.
pub trait TableFile {
    /// Reads an element table from a seekable reader.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails, a required column is missing,
    /// or a group/period cell is not an integer.
    fn read_from<R: Read + Seek>(
        reader: R,
        options: &LoadOptions,
    ) -> Result<ElementTable, TableLoadError>;

    /// Reads an element table from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(
        path: P,
        options: &LoadOptions,
    ) -> Result<ElementTable, TableLoadError> {
        let file = File::open(path)?;
        Self::read_from(BufReader::new(file), options)
    }
}
