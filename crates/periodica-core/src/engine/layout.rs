use super::color::ColorEncoder;
use super::config::RenderConfig;
use super::error::EngineError;
use super::hover::HoverTemplate;
use crate::core::models::element::{ElementRecord, FieldValue};
use crate::core::models::selection::Selection;
use serde::Serialize;
use tracing::{debug, trace};

/// Placeholder shown instead of a coefficient when there is no data.
pub const NO_DATA_PLACEHOLDER: &str = "-";

/// The unit square a cell occupies on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CellBounds {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl CellBounds {
    pub fn around(x: f64, y: f64) -> Self {
        Self {
            x0: x - 0.5,
            y0: y - 0.5,
            x1: x + 0.5,
            y1: y + 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoverField {
    pub name: String,
    pub value: FieldValue,
}

/// One positioned, annotated element. Built fresh for every render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cell {
    pub symbol: String,
    pub group: i32,
    pub period: i32,
    pub x: f64,
    pub y: f64,
    pub bounds: CellBounds,
    /// Coefficient for the selected modality; `0.0` when there is no data.
    pub value: f64,
    pub intensity: f64,
    pub label_text: String,
    pub hover_fields: Vec<HoverField>,
}

/// Positions element records on the periodic-table grid.
#[derive(Debug, Clone)]
pub struct TableLayoutEngine<'a> {
    config: &'a RenderConfig,
    encoder: ColorEncoder,
}

impl<'a> TableLayoutEngine<'a> {
    pub fn new(config: &'a RenderConfig) -> Self {
        Self {
            config,
            encoder: ColorEncoder::new(config.color_range),
        }
    }

    /// Lays out every record, in input order, for the given selection.
    pub fn layout(
        &self,
        records: &[ElementRecord],
        selection: &Selection,
    ) -> Result<Vec<Cell>, EngineError> {
        let template = HoverTemplate::for_selection(selection);
        self.layout_with_template(records, selection, &template)
    }

    pub(crate) fn layout_with_template(
        &self,
        records: &[ElementRecord],
        selection: &Selection,
        template: &HoverTemplate,
    ) -> Result<Vec<Cell>, EngineError> {
        let column = self.config.modality_columns.column_for(selection.modality);
        self.validate(records, selection, template, column)?;
        debug!(
            "Laying out {} records for {} using column '{}'",
            records.len(),
            selection.modality,
            column
        );

        records
            .iter()
            .map(|record| self.build_cell(record, template, column))
            .collect()
    }

    /// Checks the whole selection up front so a bad field never yields a partial layout.
    fn validate(
        &self,
        records: &[ElementRecord],
        selection: &Selection,
        template: &HoverTemplate,
        column: &str,
    ) -> Result<(), EngineError> {
        for name in template.fields() {
            if records.iter().any(|r| r.field(name).is_none()) {
                return Err(EngineError::FieldNotFound {
                    field: name.clone(),
                });
            }
        }
        if !records.is_empty() && !records.iter().any(|r| r.field(column).is_some()) {
            return Err(EngineError::MissingModalityColumn {
                modality: selection.modality,
                column: column.to_string(),
            });
        }
        Ok(())
    }

    fn build_cell(
        &self,
        record: &ElementRecord,
        template: &HoverTemplate,
        column: &str,
    ) -> Result<Cell, EngineError> {
        let (x, y) = self.config.geometry.center(record.group, record.period);
        let value = record
            .field(column)
            .map(|v| v.as_coefficient())
            .unwrap_or(0.0);

        let hover_fields = template
            .fields()
            .iter()
            .map(|name| {
                record
                    .field(name)
                    .map(|value| HoverField {
                        name: name.clone(),
                        value,
                    })
                    .ok_or_else(|| EngineError::FieldNotFound {
                        field: name.clone(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        trace!("Placed {} at ({}, {}) with value {}", record.symbol, x, y, value);

        Ok(Cell {
            symbol: record.symbol.clone(),
            group: record.group,
            period: record.period,
            x,
            y,
            bounds: CellBounds::around(x, y),
            value,
            intensity: self.encoder.encode(value).intensity,
            label_text: label_text(&record.symbol, value, self.config.label_precision),
            hover_fields,
        })
    }
}

/// `"{symbol}\n{value}"`, with the placeholder dash when the coefficient is exactly zero.
pub fn label_text(symbol: &str, value: f64, precision: usize) -> String {
    if value == 0.0 || value.is_nan() {
        format!("{}\n{}", symbol, NO_DATA_PLACEHOLDER)
    } else {
        format!("{}\n{:.*}", symbol, precision, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::selection::Modality;

    const NEUTRONS: &str = "Attenuation coef [1/cm] (Sears)";
    const XRAY: &str = "X-ray 150kV";

    fn iron() -> ElementRecord {
        ElementRecord::new("Iron", "Fe", 8, 4)
            .with_field(NEUTRONS, 1.1)
            .with_field(XRAY, 8.2)
            .with_field("Density", 7.874)
    }

    fn records() -> Vec<ElementRecord> {
        vec![
            ElementRecord::new("Hydrogen", "H", 1, 1)
                .with_field(NEUTRONS, 3.44)
                .with_field(XRAY, 0.02)
                .with_field("Density", 0.00009),
            iron(),
            ElementRecord::new("Helium", "He", 18, 1)
                .with_field(NEUTRONS, FieldValue::Missing)
                .with_field(XRAY, f64::NAN)
                .with_field("Density", 0.0002),
        ]
    }

    #[test]
    fn iron_example_with_neutrons() {
        let config = RenderConfig::default();
        let engine = TableLayoutEngine::new(&config);
        let selection = Selection::new(Modality::Neutrons, ["Symbol"]);

        let cells = engine.layout(&[iron()], &selection).unwrap();
        let cell = &cells[0];
        assert_eq!(cell.value, 1.1);
        assert_eq!(cell.label_text, "Fe\n1.10");
        assert!((cell.intensity - 0.78).abs() < 1e-12);
        assert_eq!((cell.x, cell.y), (0.0, 5.0));
        assert_eq!(
            cell.hover_fields,
            vec![
                HoverField {
                    name: "Name".into(),
                    value: FieldValue::Text("Iron".into())
                },
                HoverField {
                    name: "Symbol".into(),
                    value: FieldValue::Text("Fe".into())
                },
            ]
        );
    }

    #[test]
    fn absent_coefficient_renders_placeholder() {
        let config = RenderConfig::default();
        let engine = TableLayoutEngine::new(&config);
        let record = ElementRecord::new("Iron", "Fe", 8, 4)
            .with_field(NEUTRONS, FieldValue::Missing)
            .with_field(XRAY, 8.2);

        let cells = engine
            .layout(&[record], &Selection::new(Modality::Neutrons, ["Symbol"]))
            .unwrap();
        assert_eq!(cells[0].value, 0.0);
        assert_eq!(cells[0].label_text, "Fe\n-");
        assert_eq!(cells[0].intensity, 1.0);
    }

    #[test]
    fn zero_and_nan_never_render_numeric_labels() {
        let config = RenderConfig::default();
        let engine = TableLayoutEngine::new(&config);
        for modality in Modality::ALL {
            let cells = engine
                .layout(&records(), &Selection::new(modality, Vec::<String>::new()))
                .unwrap();
            for cell in cells.iter().filter(|c| c.value == 0.0) {
                assert!(cell.label_text.ends_with("\n-"), "{:?}", cell.label_text);
                assert!(!cell.label_text.contains("0.00"));
            }
        }
    }

    #[test]
    fn near_zero_is_distinct_from_no_data() {
        assert_eq!(label_text("H", 0.001, 2), "H\n0.00");
        assert_eq!(label_text("H", 0.0, 2), "H\n-");
        assert_eq!(label_text("H", f64::NAN, 2), "H\n-");
        assert_eq!(label_text("Fe", 1.1, 3), "Fe\n1.100");
    }

    #[test]
    fn output_preserves_length_and_order() {
        let config = RenderConfig::default();
        let engine = TableLayoutEngine::new(&config);
        let input = records();
        let cells = engine
            .layout(&input, &Selection::new(Modality::XRay, ["Density"]))
            .unwrap();

        assert_eq!(cells.len(), input.len());
        let symbols: Vec<_> = cells.iter().map(|c| c.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["H", "Fe", "He"]);
    }

    #[test]
    fn modality_selects_its_own_column() {
        let config = RenderConfig::default();
        let engine = TableLayoutEngine::new(&config);
        let neutrons = engine
            .layout(&[iron()], &Selection::new(Modality::Neutrons, ["Symbol"]))
            .unwrap();
        let xray = engine
            .layout(&[iron()], &Selection::new(Modality::XRay, ["Symbol"]))
            .unwrap();
        assert_eq!(neutrons[0].value, 1.1);
        assert_eq!(xray[0].value, 8.2);
        assert_eq!(xray[0].label_text, "Fe\n8.20");
        assert_eq!(xray[0].intensity, 0.0);
    }

    #[test]
    fn unknown_field_fails_before_any_cell() {
        let config = RenderConfig::default();
        let engine = TableLayoutEngine::new(&config);
        let result = engine.layout(
            &records(),
            &Selection::new(Modality::Neutrons, ["Symbol", "Bogus"]),
        );
        assert_eq!(
            result,
            Err(EngineError::FieldNotFound {
                field: "Bogus".to_string()
            })
        );
    }

    #[test]
    fn missing_modality_column_is_fatal() {
        let config = RenderConfig::default();
        let engine = TableLayoutEngine::new(&config);
        let bare = vec![ElementRecord::new("Iron", "Fe", 8, 4)];
        let result = engine.layout(&bare, &Selection::new(Modality::XRay, ["Symbol"]));
        assert_eq!(
            result,
            Err(EngineError::MissingModalityColumn {
                modality: Modality::XRay,
                column: XRAY.to_string()
            })
        );
    }

    #[test]
    fn hover_fields_align_with_template_for_every_cell() {
        let config = RenderConfig::default();
        let engine = TableLayoutEngine::new(&config);
        let selection = Selection::new(Modality::Neutrons, ["Density", "Symbol", "Group"]);
        let template = HoverTemplate::for_selection(&selection);
        let cells = engine.layout(&records(), &selection).unwrap();

        for cell in &cells {
            assert_eq!(cell.hover_fields.len(), template.len());
            for (idx, field) in cell.hover_fields.iter().enumerate() {
                assert_eq!(field.name, template.fields()[idx]);
            }
        }
    }

    #[test]
    fn bounds_are_unit_square_around_center() {
        let bounds = CellBounds::around(-7.0, 8.0);
        assert_eq!(
            bounds,
            CellBounds {
                x0: -7.5,
                y0: 7.5,
                x1: -6.5,
                y1: 8.5
            }
        );
    }
}
