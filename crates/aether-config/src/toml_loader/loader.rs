//! Core TOML config loading: read from a path, a string, or the platform default.

use crate::schema::AetherConfig;
use crate::validation;
use aether_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// Parse a config from TOML text.
///
/// Missing sections and fields fall back to serde defaults. Validation
/// failures are logged but do not reject the config; callers that need a
/// hard check run [`validation::validate`] themselves.
pub fn load_from_str(content: &str) -> Result<AetherConfig, ConfigError> {
    let config: AetherConfig = toml::from_str(content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}");
    }

    Ok(config)
}

/// Load config from a specific TOML file path.
pub fn load_from_path(path: &Path) -> Result<AetherConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config = load_from_str(&content)?;
    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// If the file does not exist, writes the commented default template and
/// returns defaults.
pub fn load_default() -> Result<AetherConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(&path)?;
            Ok(AetherConfig::default())
        }
        Err(e) => Err(e),
    }
}
