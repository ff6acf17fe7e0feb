use super::error::TableLoadError;
use super::rows::RowAssembler;
use super::traits::{LoadOptions, TableFile};
use crate::core::models::element::FieldValue;
use crate::core::models::table::ElementTable;
use std::io::{Read, Seek};
use tracing::debug;

/// Comma-separated element tables with a header row.
pub struct CsvTable;

impl TableFile for CsvTable {
    fn read_from<R: Read + Seek>(
        reader: R,
        options: &LoadOptions,
    ) -> Result<ElementTable, TableLoadError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        debug!("CSV header has {} columns", headers.len());
        let mut assembler = RowAssembler::new(headers, options.skip_rows)?;

        for (idx, result) in reader.records().enumerate() {
            let record = result?;
            assembler.push(idx + 1, record.iter().map(FieldValue::parse).collect())?;
        }
        assembler.finish()
    }
}
