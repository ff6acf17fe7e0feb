use crate::core::models::selection::{Modality, Selection};
use crate::core::models::table::ElementTable;
use crate::engine::color::{FontColor, GrayShade, Rgb};
use crate::engine::config::{ColorRange, GridGeometry, RenderConfig};
use crate::engine::error::EngineError;
use crate::engine::hover::HoverTemplate;
use crate::engine::layout::{Cell, TableLayoutEngine};
use serde::Serialize;
use tracing::{debug, info, instrument};

pub const LANTHANIDES: &str = "Lanthanides";
pub const ACTINIDES: &str = "Actinides";

/// A cell together with everything the drawing surface needs to paint it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedCell {
    #[serde(flatten)]
    pub cell: Cell,
    pub fill: Rgb,
    pub font_color: FontColor,
    pub hover_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisLabel {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

/// Group numbers above the grid and period numbers to its left.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisLabelSet {
    pub groups: Vec<AxisLabel>,
    pub periods: Vec<AxisLabel>,
}

impl AxisLabelSet {
    pub fn for_geometry(geometry: &GridGeometry) -> Self {
        let top = geometry.base_row + 1.0;
        let left = -(geometry.x_offset + 1.0);

        let groups = GridGeometry::GROUPS
            .map(|group| {
                let (x, _) = geometry.center(group, 0);
                AxisLabel {
                    text: group.to_string(),
                    x,
                    y: top,
                }
            })
            .collect();
        let periods = GridGeometry::PERIODS
            .map(|period| {
                let (_, y) = geometry.center(0, period);
                AxisLabel {
                    text: period.to_string(),
                    x: left,
                    y,
                }
            })
            .collect();

        Self { groups, periods }
    }
}

/// A fixed text label placed in normalized figure coordinates (`0..1` on both axes).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    pub text: &'static str,
    pub x: f64,
    pub y: f64,
    pub anchor: &'static str,
    pub font_size: u32,
}

impl Annotation {
    pub fn category_labels() -> Vec<Annotation> {
        vec![
            Annotation {
                text: LANTHANIDES,
                x: 0.25,
                y: 0.14,
                anchor: "left",
                font_size: 18,
            },
            Annotation {
                text: ACTINIDES,
                x: 0.25,
                y: 0.06,
                anchor: "left",
                font_size: 18,
            },
        ]
    }
}

/// Size and typography hints for the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FigureLayout {
    pub width: u32,
    pub height: u32,
    pub label_font_size: u32,
    pub axis_font_size: u32,
    pub marker_size: u32,
    pub equal_aspect: bool,
}

impl Default for FigureLayout {
    fn default() -> Self {
        Self {
            width: 2200,
            height: 800,
            label_font_size: 14,
            axis_font_size: 18,
            marker_size: 30,
            equal_aspect: true,
        }
    }
}

/// Everything produced by one render pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderModel {
    pub modality: Modality,
    pub value_column: String,
    pub color_range: ColorRange,
    pub cells: Vec<RenderedCell>,
    pub hover_template: HoverTemplate,
    pub axis_labels: AxisLabelSet,
    pub annotations: Vec<Annotation>,
    pub figure: FigureLayout,
}

impl RenderModel {
    pub fn cell(&self, symbol: &str) -> Option<&RenderedCell> {
        self.cells
            .iter()
            .find(|c| c.cell.symbol.eq_ignore_ascii_case(symbol))
    }
}

/// Renders the periodic table for any number of selections over one immutable table.
///
/// Holds no state that a render could change, so calls are independent and reproducible.
#[derive(Debug, Clone)]
pub struct PeriodicTableRenderer<'a> {
    table: &'a ElementTable,
    config: RenderConfig,
}

impl<'a> PeriodicTableRenderer<'a> {
    pub fn new(table: &'a ElementTable, config: RenderConfig) -> Self {
        Self { table, config }
    }

    pub fn table(&self) -> &ElementTable {
        self.table
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    #[instrument(skip_all, name = "render", fields(modality = %selection.modality))]
    pub fn render(&self, selection: &Selection) -> Result<RenderModel, EngineError> {
        let column = self.config.modality_columns.column_for(selection.modality);
        if !self.table.has_column(column) {
            return Err(EngineError::MissingModalityColumn {
                modality: selection.modality,
                column: column.to_string(),
            });
        }

        // === Phase 1: Resolve the shared hover template ===
        let template = HoverTemplate::for_selection(selection);
        for name in template.fields() {
            if !self.table.has_column(name) {
                return Err(EngineError::FieldNotFound {
                    field: name.clone(),
                });
            }
        }
        debug!("Hover template fields: {:?}", template.fields());

        // === Phase 2: Lay out and shade every element ===
        let engine = TableLayoutEngine::new(&self.config);
        let cells = engine.layout_with_template(self.table.records(), selection, &template)?;

        let cells = cells
            .into_iter()
            .map(|cell| {
                let hover_text = template.fill(&cell)?;
                let shade = GrayShade::from_intensity(cell.intensity);
                Ok(RenderedCell {
                    fill: shade.fill(),
                    font_color: shade.font_color(),
                    hover_text,
                    cell,
                })
            })
            .collect::<Result<Vec<_>, EngineError>>()?;

        // === Phase 3: Static decorations ===
        let model = RenderModel {
            modality: selection.modality,
            value_column: column.to_string(),
            color_range: self.config.color_range,
            cells,
            hover_template: template,
            axis_labels: AxisLabelSet::for_geometry(&self.config.geometry),
            annotations: Annotation::category_labels(),
            figure: FigureLayout::default(),
        };

        info!(
            "Rendered {} cells with {} hover field(s).",
            model.cells.len(),
            model.hover_template.len()
        );
        Ok(model)
    }
}

/// Convenience entry point: render one selection over a table with the given configuration.
pub fn run(
    table: &ElementTable,
    selection: &Selection,
    config: &RenderConfig,
) -> Result<RenderModel, EngineError> {
    PeriodicTableRenderer::new(table, config.clone()).render(selection)
}
