//! TOML config file loading and creation.

mod loader;
mod paths;
mod template;


pub use loader::{load_default, load_from_path, load_from_str};
pub use paths::{create_default_config, default_config_path};
pub use template::default_config_toml;
