use super::element::ElementRecord;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum TableError {
    #[error("An element table must contain at least one record")]
    Empty,
}

/// The immutable element table, loaded once and shared by every render.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementTable {
    columns: Vec<String>,
    records: Vec<ElementRecord>,
}

impl ElementTable {
    pub fn new(columns: Vec<String>, records: Vec<ElementRecord>) -> Result<Self, TableError> {
        if records.is_empty() {
            return Err(TableError::Empty);
        }
        Ok(Self { columns, records })
    }

    pub fn records(&self) -> &[ElementRecord] {
        &self.records
    }

    /// Column names in source order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Columns a user may pick for display.
    ///
    /// The leading column of the source sheet is the row index and is never offered.
    pub fn selectable_columns(&self) -> &[String] {
        self.columns.get(1..).unwrap_or(&[])
    }

    pub fn find_by_symbol(&self, symbol: &str) -> Option<&ElementRecord> {
        self.records
            .iter()
            .find(|r| r.symbol.eq_ignore_ascii_case(symbol))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns() -> Vec<String> {
        ["Z", "Name", "Symbol", "Group", "Period", "Neutrons"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn new_rejects_empty_record_list() {
        assert_eq!(ElementTable::new(columns(), vec![]), Err(TableError::Empty));
    }

    #[test]
    fn selectable_columns_skip_the_index_column() {
        let table =
            ElementTable::new(columns(), vec![ElementRecord::new("Iron", "Fe", 8, 4)]).unwrap();
        assert_eq!(
            table.selectable_columns(),
            &["Name", "Symbol", "Group", "Period", "Neutrons"]
        );
        assert!(table.has_column("Neutrons"));
        assert!(!table.has_column("Bogus"));
    }

    #[test]
    fn find_by_symbol_ignores_case() {
        let table = ElementTable::new(
            columns(),
            vec![
                ElementRecord::new("Hydrogen", "H", 1, 1),
                ElementRecord::new("Iron", "Fe", 8, 4),
            ],
        )
        .unwrap();
        assert_eq!(table.find_by_symbol("fe").map(|r| r.name.as_str()), Some("Iron"));
        assert!(table.find_by_symbol("Xx").is_none());
        assert_eq!(table.len(), 2);
    }
}
