use super::error::TableLoadError;
use crate::core::models::element::{
    ElementRecord, FieldValue, GROUP_COLUMN, NAME_COLUMN, PERIOD_COLUMN, REQUIRED_COLUMNS,
    SYMBOL_COLUMN,
};
use crate::core::models::table::ElementTable;
use std::collections::HashMap;
use tracing::{debug, trace};

/// Turns header + row cells, whatever their source format, into an [`ElementTable`].
pub(crate) struct RowAssembler {
    columns: Vec<String>,
    name_idx: usize,
    symbol_idx: usize,
    group_idx: usize,
    period_idx: usize,
    skip_rows: usize,
    seen_rows: usize,
    records: Vec<ElementRecord>,
}

impl RowAssembler {
    pub fn new(columns: Vec<String>, skip_rows: usize) -> Result<Self, TableLoadError> {
        let columns: Vec<String> = columns.into_iter().map(|c| c.trim().to_string()).collect();
        let position = |name: &'static str| {
            columns
                .iter()
                .position(|c| c == name)
                .ok_or(TableLoadError::MissingColumn(name))
        };

        for required in REQUIRED_COLUMNS {
            position(required)?;
        }

        Ok(Self {
            name_idx: position(NAME_COLUMN)?,
            symbol_idx: position(SYMBOL_COLUMN)?,
            group_idx: position(GROUP_COLUMN)?,
            period_idx: position(PERIOD_COLUMN)?,
            columns,
            skip_rows,
            seen_rows: 0,
            records: Vec::new(),
        })
    }

    /// Adds one data row. `row` is the 1-based data row number used in error messages.
    pub fn push(&mut self, row: usize, cells: Vec<FieldValue>) -> Result<(), TableLoadError> {
        self.seen_rows += 1;
        if self.seen_rows <= self.skip_rows {
            trace!("Skipping leading data row {}", row);
            return Ok(());
        }
        if cells.iter().all(FieldValue::is_missing) {
            trace!("Ignoring blank data row {}", row);
            return Ok(());
        }

        let cell = |idx: usize| cells.get(idx).cloned().unwrap_or(FieldValue::Missing);
        let coordinate = |idx: usize, column: &'static str| {
            let value = cell(idx);
            match value.as_number() {
                Some(n) if n.is_finite() && n.fract() == 0.0 => Ok(n as i32),
                _ => Err(TableLoadError::InvalidCoordinate {
                    row,
                    column,
                    value: value.to_string(),
                }),
            }
        };

        let group = coordinate(self.group_idx, GROUP_COLUMN)?;
        let period = coordinate(self.period_idx, PERIOD_COLUMN)?;

        let mut fields = HashMap::with_capacity(self.columns.len());
        for (idx, column) in self.columns.iter().enumerate() {
            if REQUIRED_COLUMNS.contains(&column.as_str()) {
                continue;
            }
            fields.insert(column.clone(), cell(idx));
        }

        self.records.push(ElementRecord {
            name: cell(self.name_idx).to_string(),
            symbol: cell(self.symbol_idx).to_string(),
            group,
            period,
            fields,
        });
        Ok(())
    }

    pub fn finish(self) -> Result<ElementTable, TableLoadError> {
        debug!(
            "Assembled {} element records across {} columns",
            self.records.len(),
            self.columns.len()
        );
        ElementTable::new(self.columns, self.records).map_err(|_| TableLoadError::Empty)
    }
}
