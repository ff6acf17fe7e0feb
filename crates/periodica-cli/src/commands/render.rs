use super::load_element_table;
use crate::cli::RenderArgs;
use crate::config::{RangeOverrides, build_config};
use crate::error::Result;
use periodica::core::models::selection::Selection;
use periodica::workflows::render::{PeriodicTableRenderer, RenderModel};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use tracing::info;

pub fn run(args: RenderArgs) -> Result<()> {
    let app_config = build_config(
        &args.table,
        RangeOverrides {
            vmin: args.vmin,
            vmax: args.vmax,
        },
    )?;
    let table = load_element_table(&app_config)?;

    let selection = Selection::new(args.modality, args.fields.iter().cloned());
    info!(
        "Rendering {} elements for {} with fields {:?}",
        table.len(),
        selection.modality,
        selection.displayed_fields
    );

    let renderer = PeriodicTableRenderer::new(&table, app_config.render_config);
    let model = renderer.render(&selection)?;

    match &args.output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            write_model(&model, &mut writer, args.compact)?;
            writer.flush()?;
            println!(
                "✓ Render model with {} cells written to: {}",
                model.cells.len(),
                path.display()
            );
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_model(&model, &mut handle, args.compact)?;
            writeln!(handle)?;
        }
    }
    Ok(())
}

fn write_model(model: &RenderModel, writer: &mut impl Write, compact: bool) -> Result<()> {
    if compact {
        serde_json::to_writer(writer, model)?;
    } else {
        serde_json::to_writer_pretty(writer, model)?;
    }
    Ok(())
}
