use periodica::core::io::traits::LoadOptions;
use periodica::engine::config::RenderConfig;
use std::path::PathBuf;

pub struct AppConfig {
    pub table_path: PathBuf,
    pub load_options: LoadOptions,
    pub render_config: RenderConfig,
}
