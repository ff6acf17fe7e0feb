use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::TableArgs;
use crate::error::{CliError, Result};
use crate::utils::parser::{self, SetKey};
use periodica::core::io::traits::LoadOptions;
use periodica::engine::config::RenderConfigBuilder;
use std::str::FromStr;
use tracing::debug;

/// Color range bounds given directly on the command line.
#[derive(Debug, Default, Clone, Copy)]
pub struct RangeOverrides {
    pub vmin: Option<f64>,
    pub vmax: Option<f64>,
}

pub fn build_config(args: &TableArgs, range: RangeOverrides) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let mut file_config = apply_set_values(file_config, &args.set_values)?;
    debug!("Effective file configuration: {:?}", file_config);

    let range_file = file_config.color_range.take().unwrap_or_default();
    let vmin = range.vmin.or(range_file.vmin).unwrap_or(defaults.vmin);
    let vmax = range.vmax.or(range_file.vmax).unwrap_or(defaults.vmax);

    let columns_file = file_config.columns.take().unwrap_or_default();
    let neutron_column = columns_file.neutrons.unwrap_or(defaults.neutron_column);
    let xray_column = columns_file.xray.unwrap_or(defaults.xray_column);

    let table_file = file_config.table.take().unwrap_or_default();
    let load_options = LoadOptions {
        sheet: args
            .sheet
            .clone()
            .or(table_file.sheet)
            .unwrap_or(defaults.sheet),
        skip_rows: args
            .skip_rows
            .or(table_file.skip_rows)
            .unwrap_or(defaults.skip_rows),
    };

    let render_config = RenderConfigBuilder::new()
        .vmin(vmin)
        .vmax(vmax)
        .neutron_column(neutron_column)
        .xray_column(xray_column)
        .label_precision(
            file_config
                .label_precision
                .unwrap_or(defaults.label_precision),
        )
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(AppConfig {
        table_path: args.input.clone(),
        load_options,
        render_config,
    })
}

fn parse_number<T: FromStr>(key: SetKey, value: &str) -> Result<T> {
    value.parse().map_err(|_| {
        CliError::Config(format!(
            "Invalid numeric value for {}: {}",
            key.as_str(),
            value
        ))
    })
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let (key, value) =
            parser::parse_set_value(kv_pair).map_err(|e| CliError::Config(e.to_string()))?;

        match key {
            SetKey::ColorRangeVmin => {
                config
                    .color_range
                    .get_or_insert_with(Default::default)
                    .vmin = Some(parse_number(key, value)?);
            }
            SetKey::ColorRangeVmax => {
                config
                    .color_range
                    .get_or_insert_with(Default::default)
                    .vmax = Some(parse_number(key, value)?);
            }
            SetKey::ColumnsNeutrons => {
                config.columns.get_or_insert_with(Default::default).neutrons =
                    Some(value.to_string());
            }
            SetKey::ColumnsXRay => {
                config.columns.get_or_insert_with(Default::default).xray = Some(value.to_string());
            }
            SetKey::TableSheet => {
                config.table.get_or_insert_with(Default::default).sheet = Some(value.to_string());
            }
            SetKey::TableSkipRows => {
                config.table.get_or_insert_with(Default::default).skip_rows =
                    Some(parse_number(key, value)?);
            }
            SetKey::LabelPrecision => {
                config.label_precision = Some(parse_number(key, value)?);
            }
        }
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use periodica::core::models::selection::Modality;
    use periodica::engine::config::ColorRange;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::{TempDir, tempdir};

    fn base_table_args() -> TableArgs {
        TableArgs {
            input: PathBuf::from("elements.xlsx"),
            config: None,
            sheet: None,
            skip_rows: None,
            set_values: vec![],
        }
    }

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("periodica.toml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn build_config_uses_defaults_without_file() {
        let app = build_config(&base_table_args(), RangeOverrides::default()).expect("build ok");

        assert_eq!(app.table_path, Path::new("elements.xlsx"));
        assert_eq!(app.load_options, LoadOptions::default());
        assert_eq!(app.render_config.color_range, ColorRange::new(0.0, 5.0).unwrap());
        assert_eq!(
            app.render_config.modality_columns.column_for(Modality::XRay),
            "X-ray 150kV"
        );
        assert_eq!(app.render_config.label_precision, 2);
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempdir().unwrap();
        let path = write_config(
            &dir,
            r#"
            [color-range]
            vmax = 8.0

            [columns]
            neutrons = "Sigma total"

            [table]
            sheet = "elements"
            skip-rows = 1
            "#,
        );
        let mut args = base_table_args();
        args.config = Some(path);

        let app = build_config(&args, RangeOverrides::default()).unwrap();
        assert_eq!(app.render_config.color_range, ColorRange::new(0.0, 8.0).unwrap());
        assert_eq!(
            app.render_config
                .modality_columns
                .column_for(Modality::Neutrons),
            "Sigma total"
        );
        assert_eq!(app.load_options.sheet, "elements");
        assert_eq!(app.load_options.skip_rows, 1);
    }

    #[test]
    fn cli_args_override_set_values_and_file() {
        let dir = tempdir().unwrap();
        let path = write_config(&dir, "[color-range]\nvmin = 1.0\nvmax = 4.0\n[table]\nskip-rows = 2\n");
        let mut args = base_table_args();
        args.config = Some(path);
        args.skip_rows = Some(0);
        args.set_values = vec!["color-range.vmax=6".to_string()];

        let app = build_config(
            &args,
            RangeOverrides {
                vmin: Some(0.5),
                vmax: None,
            },
        )
        .unwrap();

        assert_eq!(app.render_config.color_range, ColorRange::new(0.5, 6.0).unwrap());
        assert_eq!(app.load_options.skip_rows, 0);
    }

    #[test]
    fn set_values_cover_every_key() {
        let mut args = base_table_args();
        args.set_values = vec![
            "color-range.vmin=-1".to_string(),
            "color-range.vmax=3".to_string(),
            "columns.neutrons=N".to_string(),
            "columns.x-ray=X".to_string(),
            "table.sheet=Sheet1".to_string(),
            "table.skip-rows=4".to_string(),
            "label-precision=1".to_string(),
        ];

        let app = build_config(&args, RangeOverrides::default()).unwrap();
        let render = &app.render_config;
        assert_eq!(render.color_range, ColorRange::new(-1.0, 3.0).unwrap());
        assert_eq!(render.modality_columns.column_for(Modality::Neutrons), "N");
        assert_eq!(render.modality_columns.column_for(Modality::XRay), "X");
        assert_eq!(render.label_precision, 1);
        assert_eq!(app.load_options.sheet, "Sheet1");
        assert_eq!(app.load_options.skip_rows, 4);
    }

    #[test]
    fn degenerate_range_is_a_config_error() {
        let result = build_config(
            &base_table_args(),
            RangeOverrides {
                vmin: Some(2.0),
                vmax: Some(2.0),
            },
        );
        match result {
            Err(CliError::Config(msg)) => assert!(msg.contains("Degenerate")),
            Err(other) => panic!("Expected config error, got {:?}", other),
            Ok(_) => panic!("Expected config error"),
        }
    }

    #[test]
    fn oversized_label_precision_is_a_config_error() {
        let mut args = base_table_args();
        args.set_values = vec!["label-precision=1000000000".to_string()];
        let result = build_config(&args, RangeOverrides::default());
        assert!(matches!(result, Err(CliError::Config(msg)) if msg.contains("exceeds the maximum")));
    }

    #[test]
    fn invalid_set_value_is_reported() {
        let mut args = base_table_args();
        args.set_values = vec!["table.skip-rows=many".to_string()];
        let result = build_config(&args, RangeOverrides::default());
        assert!(matches!(result, Err(CliError::Config(msg)) if msg.contains("table.skip-rows")));

        let mut args = base_table_args();
        args.set_values = vec!["color-range".to_string()];
        assert!(matches!(
            build_config(&args, RangeOverrides::default()),
            Err(CliError::Config(_))
        ));
    }
}
