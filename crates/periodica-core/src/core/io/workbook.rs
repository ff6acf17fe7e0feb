use super::error::TableLoadError;
use super::rows::RowAssembler;
use super::traits::{LoadOptions, TableFile};
use crate::core::models::element::FieldValue;
use crate::core::models::table::ElementTable;
use calamine::{Data, Reader, Xlsx};
use std::io::{Read, Seek};
use tracing::debug;

/// Excel workbooks. The table lives on a single named worksheet whose first row is the header.
pub struct XlsxTable;

impl TableFile for XlsxTable {
    fn read_from<R: Read + Seek>(
        reader: R,
        options: &LoadOptions,
    ) -> Result<ElementTable, TableLoadError> {
        let mut workbook: Xlsx<R> = Xlsx::new(reader)?;
        if !workbook.sheet_names().iter().any(|s| s == &options.sheet) {
            return Err(TableLoadError::MissingSheet(options.sheet.clone()));
        }

        let range = workbook.worksheet_range(&options.sheet)?;
        debug!(
            "Worksheet '{}' spans {:?} cells",
            options.sheet,
            range.get_size()
        );

        let mut rows = range.rows();
        let headers: Vec<String> = rows
            .next()
            .ok_or(TableLoadError::Empty)?
            .iter()
            .map(|cell| cell_value(cell).to_string())
            .collect();
        let mut assembler = RowAssembler::new(headers, options.skip_rows)?;

        for (idx, row) in rows.enumerate() {
            assembler.push(idx + 1, row.iter().map(cell_value).collect())?;
        }
        assembler.finish()
    }
}

fn cell_value(cell: &Data) -> FieldValue {
    match cell {
        Data::Empty | Data::Error(_) => FieldValue::Missing,
        Data::Int(value) => FieldValue::Number(*value as f64),
        Data::Float(value) => FieldValue::Number(*value),
        Data::String(text) => FieldValue::parse(text),
        Data::Bool(flag) => FieldValue::Text(flag.to_string()),
        other => FieldValue::parse(&other.to_string()),
    }
}
