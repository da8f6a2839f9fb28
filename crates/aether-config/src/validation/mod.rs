//! Full configuration validation.
//!
//! Validates numeric ranges, geometry consistency, and color formats.
//! Each domain has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;
mod scene;
mod waitlist;

#[cfg(test)]
mod tests;

use crate::schema::AetherConfig;
use aether_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &AetherConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    scene::validate_window(&mut errors, config);
    scene::validate_camera(&mut errors, config);
    scene::validate_stars(&mut errors, config);
    scene::validate_dust(&mut errors, config);
    scene::validate_shooting_star(&mut errors, config);
    scene::validate_pointer(&mut errors, config);
    waitlist::validate_waitlist(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
