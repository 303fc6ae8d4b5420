mod catalog;
mod config;
mod loader;

pub use catalog::{Catalogs, PartDefinition};
pub use config::GameConfig;
pub use loader::{load_catalogs, load_catalogs_from_path, load_config_from_path};
