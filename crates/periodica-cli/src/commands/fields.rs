use super::load_element_table;
use crate::cli::FieldsArgs;
use crate::config::{RangeOverrides, build_config};
use crate::error::Result;
use periodica::core::models::selection::Modality;
use periodica::core::models::table::ElementTable;

pub fn run(args: FieldsArgs) -> Result<()> {
    let app_config = build_config(&args.table, RangeOverrides::default())?;
    let table = load_element_table(&app_config)?;

    let columns = &app_config.render_config.modality_columns;
    for line in describe_fields(&table, |name| {
        Modality::ALL
            .into_iter()
            .find(|m| columns.column_for(*m) == name)
    }) {
        println!("{}", line);
    }
    Ok(())
}

/// One line per selectable column, tagging the columns that feed a modality.
fn describe_fields(
    table: &ElementTable,
    modality_of: impl Fn(&str) -> Option<Modality>,
) -> Vec<String> {
    table
        .selectable_columns()
        .iter()
        .map(|name| match modality_of(name.as_str()) {
            Some(modality) => format!("{}  [{}]", name, modality),
            None => name.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use periodica::core::models::element::ElementRecord;

    #[test]
    fn describe_fields_skips_index_and_tags_modalities() {
        let columns = ["Z", "Name", "Symbol", "Group", "Period", "Sears", "X150"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let table =
            ElementTable::new(columns, vec![ElementRecord::new("Iron", "Fe", 8, 4)]).unwrap();

        let lines = describe_fields(&table, |name| match name {
            "Sears" => Some(Modality::Neutrons),
            "X150" => Some(Modality::XRay),
            _ => None,
        });
        assert_eq!(
            lines,
            vec![
                "Name",
                "Symbol",
                "Group",
                "Period",
                "Sears  [Neutrons]",
                "X150  [X-ray]"
            ]
        );
    }
}
