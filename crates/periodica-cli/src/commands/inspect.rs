use super::load_element_table;
use crate::cli::InspectArgs;
use crate::config::{RangeOverrides, build_config};
use crate::error::{CliError, Result};
use periodica::core::models::selection::Selection;
use periodica::workflows::render::{PeriodicTableRenderer, RenderedCell};

pub fn run(args: InspectArgs) -> Result<()> {
    let app_config = build_config(&args.table, RangeOverrides::default())?;
    let table = load_element_table(&app_config)?;

    let selection = Selection::new(args.modality, args.fields.iter().cloned());
    let model = PeriodicTableRenderer::new(&table, app_config.render_config).render(&selection)?;

    let rendered = model.cell(&args.symbol).ok_or_else(|| {
        CliError::Argument(format!(
            "Element '{}' is not present in the table",
            args.symbol
        ))
    })?;
    println!("{}", describe_cell(rendered, &model.value_column));
    Ok(())
}

fn describe_cell(rendered: &RenderedCell, value_column: &str) -> String {
    let cell = &rendered.cell;
    let mut lines = vec![
        format!(
            "{} (group {}, period {}) at ({}, {})",
            cell.symbol, cell.group, cell.period, cell.x, cell.y
        ),
        format!("{}: {}", value_column, cell.value),
        format!("label: {}", cell.label_text.replace('\n', " / ")),
        format!("fill: {} with {:?} text", rendered.fill, rendered.font_color),
    ];
    for field in &cell.hover_fields {
        lines.push(format!("  {}: {}", field.name, field.value));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use periodica::core::models::element::ElementRecord;
    use periodica::core::models::selection::Modality;
    use periodica::core::models::table::ElementTable;
    use periodica::engine::config::RenderConfig;

    #[test]
    fn describe_cell_lists_label_fill_and_hover_fields() {
        let columns = ["Name", "Symbol", "Group", "Period", "X-ray 150kV"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let table = ElementTable::new(
            columns,
            vec![ElementRecord::new("Iron", "Fe", 8, 4).with_field("X-ray 150kV", 2.5)],
        )
        .unwrap();
        let model = PeriodicTableRenderer::new(&table, RenderConfig::default())
            .render(&Selection::new(Modality::XRay, ["Symbol"]))
            .unwrap();

        let text = describe_cell(model.cell("fe").unwrap(), &model.value_column);
        assert!(text.starts_with("Fe (group 8, period 4) at (0, 5)"));
        assert!(text.contains("X-ray 150kV: 2.5"));
        assert!(text.contains("label: Fe / 2.50"));
        assert!(text.contains("fill: rgb(127, 127, 127) with Dark text"));
        assert!(text.contains("  Name: Iron"));
        assert!(text.contains("  Symbol: Fe"));
    }
}
