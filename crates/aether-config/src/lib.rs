//! Aether configuration system.
//!
//! Provides TOML-based configuration for the scene, the camera, the
//! waitlist delivery path, and logging. All config sections use sensible
//! defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use aether_config::{load_config, config_to_json};
//!
//! let config = load_config(None).expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

// Re-export core types for convenience
pub use schema::{AetherConfig, CONFIG_SCHEMA_VERSION};

use aether_common::ConfigError;
use std::path::Path;

/// Load and validate the config.
///
/// With an explicit path the file must exist. Without one, `config.toml`
/// is read from the OS config directory and a commented default is
/// created if none exists.
pub fn load_config(path: Option<&Path>) -> Result<AetherConfig, ConfigError> {
    let config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };

    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &AetherConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let config = AetherConfig::default();
        let json = config_to_json(&config);
        assert!(json.contains("\"window\""));
        assert!(json.contains("\"camera\""));
        assert!(json.contains("\"stars\""));
        assert!(json.contains("\"dust\""));
        assert!(json.contains("\"shooting_star\""));
        assert!(json.contains("\"waitlist\""));
        assert!(json.contains("\"logging\""));
    }

    #[test]
    fn config_to_json_tags_shape_kind() {
        let config = AetherConfig::default();
        let json = config_to_json(&config);
        assert!(json.contains("\"kind\": \"volume\""));
    }

    #[test]
    fn load_config_with_explicit_path_validates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[stars]\ncount = 0\n").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn load_config_with_missing_path_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn load_config_accepts_drift_preset() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../presets/drift.toml");
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.stars.count, 5000);
    }
}
