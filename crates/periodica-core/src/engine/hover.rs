use super::error::EngineError;
use super::layout::Cell;
use crate::core::models::element::NAME_COLUMN;
use crate::core::models::selection::Selection;
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// The ordered list of hover fields shared by every cell of a render.
///
/// Position 0 is always `Name`; the selected fields follow in selection order
/// with duplicates dropped. Each cell's `hover_fields` carries the same names
/// at the same positions, which [`HoverTemplate::fill`] verifies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoverTemplate {
    fields: Vec<String>,
}

impl HoverTemplate {
    pub fn for_selection(selection: &Selection) -> Self {
        let mut fields = vec![NAME_COLUMN.to_string()];
        for name in &selection.displayed_fields {
            if !fields.iter().any(|f| f == name) {
                fields.push(name.clone());
            }
        }
        Self { fields }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Renders the placeholder template understood by the drawing surface,
    /// where `customdata[i]` is the value at position `i` of a cell's hover fields.
    pub fn text(&self) -> String {
        let mut template = "<b>%{customdata[0]}</b><br><br>".to_string();
        for (idx, name) in self.fields.iter().enumerate().skip(1) {
            template.push_str(&format!("<b>{}: </b>%{{customdata[{}]}}<br>", name, idx));
        }
        template
    }

    pub fn check(&self, cell: &Cell) -> Result<(), EngineError> {
        let aligned = cell.hover_fields.len() == self.fields.len()
            && cell
                .hover_fields
                .iter()
                .zip(&self.fields)
                .all(|(field, name)| &field.name == name);
        if aligned {
            Ok(())
        } else {
            Err(EngineError::HoverArity {
                symbol: cell.symbol.clone(),
                expected: self.fields.clone(),
                found: cell.hover_fields.iter().map(|f| f.name.clone()).collect(),
            })
        }
    }

    /// Produces the concrete hover text for one cell.
    pub fn fill(&self, cell: &Cell) -> Result<String, EngineError> {
        self.check(cell)?;
        let mut fields = cell.hover_fields.iter();
        let mut text = match fields.next() {
            Some(title) => format!("<b>{}</b><br><br>", title.value),
            None => String::new(),
        };
        for field in fields {
            text.push_str(&format!("<b>{}: </b>{}<br>", field.name, field.value));
        }
        Ok(text)
    }
}

impl Serialize for HoverTemplate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("HoverTemplate", 2)?;
        state.serialize_field("fields", &self.fields)?;
        state.serialize_field("text", &self.text())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::element::FieldValue;
    use crate::core::models::selection::Modality;
    use crate::engine::layout::{CellBounds, HoverField};

    fn cell_with(fields: &[(&str, FieldValue)]) -> Cell {
        Cell {
            symbol: "Fe".to_string(),
            group: 8,
            period: 4,
            x: 0.0,
            y: 5.0,
            bounds: CellBounds::around(0.0, 5.0),
            value: 1.1,
            intensity: 0.78,
            label_text: "Fe\n1.10".to_string(),
            hover_fields: fields
                .iter()
                .map(|(name, value)| HoverField {
                    name: name.to_string(),
                    value: value.clone(),
                })
                .collect(),
        }
    }

    #[test]
    fn name_leads_and_duplicates_are_dropped() {
        let selection = Selection::new(Modality::Neutrons, ["Symbol", "Density", "Symbol", "Name"]);
        let template = HoverTemplate::for_selection(&selection);
        assert_eq!(template.fields(), &["Name", "Symbol", "Density"]);
    }

    #[test]
    fn text_indexes_follow_field_positions() {
        let selection = Selection::new(Modality::Neutrons, ["Symbol", "Density"]);
        let template = HoverTemplate::for_selection(&selection);
        assert_eq!(
            template.text(),
            "<b>%{customdata[0]}</b><br><br>\
             <b>Symbol: </b>%{customdata[1]}<br>\
             <b>Density: </b>%{customdata[2]}<br>"
        );
    }

    #[test]
    fn empty_selection_yields_title_only() {
        let template = HoverTemplate::for_selection(&Selection::default());
        assert_eq!(template.len(), 1);
        assert_eq!(template.text(), "<b>%{customdata[0]}</b><br><br>");
    }

    #[test]
    fn fill_substitutes_cell_values() {
        let template =
            HoverTemplate::for_selection(&Selection::new(Modality::Neutrons, ["Symbol"]));
        let cell = cell_with(&[("Name", "Iron".into()), ("Symbol", "Fe".into())]);
        assert_eq!(
            template.fill(&cell).unwrap(),
            "<b>Iron</b><br><br><b>Symbol: </b>Fe<br>"
        );
    }

    #[test]
    fn fill_rejects_misaligned_cells() {
        let template = HoverTemplate::for_selection(&Selection::new(
            Modality::Neutrons,
            ["Symbol", "Density"],
        ));
        let swapped = cell_with(&[
            ("Name", "Iron".into()),
            ("Density", 7.874.into()),
            ("Symbol", "Fe".into()),
        ]);
        assert!(matches!(
            template.fill(&swapped),
            Err(EngineError::HoverArity { .. })
        ));

        let short = cell_with(&[("Name", "Iron".into())]);
        assert!(matches!(
            template.check(&short),
            Err(EngineError::HoverArity { .. })
        ));
    }
}
