mod builder;
mod defaults;
mod file;
mod models;

pub use builder::{RangeOverrides, build_config};
pub use models::AppConfig;
