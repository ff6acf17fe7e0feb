pub mod fields;
pub mod inspect;
pub mod render;

use crate::config::AppConfig;
use crate::error::{CliError, Result};
use periodica::core::io::load_table;
use periodica::core::models::table::ElementTable;
use tracing::info;

fn load_element_table(config: &AppConfig) -> Result<ElementTable> {
    info!("Loading element table from {:?}", &config.table_path);
    load_table(&config.table_path, &config.load_options).map_err(|e| CliError::TableLoading {
        path: config.table_path.clone(),
        source: e,
    })
}
