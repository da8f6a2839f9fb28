//! Configuration schema types for Aether.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults of the colored-nebula scene.

mod layers;
mod system;
mod waitlist;
mod window;

pub use layers::*;
pub use system::*;
pub use waitlist::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Aether.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct AetherConfig {
    /// Fixed RNG seed for reproducible clouds; random when unset.
    pub seed: Option<u64>,
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub stars: StarsConfig,
    pub dust: DustConfig,
    pub shooting_star: ShootingStarConfig,
    pub pointer: PointerConfig,
    pub waitlist: WaitlistConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_correct_window() {
        let config = AetherConfig::default();
        assert_eq!(config.window.title, "Aether");
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.window.height, 800);
        assert_eq!(config.window.background, "#000000");
        assert_eq!(config.window.startup_mode, StartupMode::Windowed);
    }

    #[test]
    fn default_config_has_correct_camera() {
        let config = AetherConfig::default();
        assert!((config.camera.fov_degrees - 75.0).abs() < f64::EPSILON);
        assert!((config.camera.distance - 50.0).abs() < f64::EPSILON);
        assert!((config.camera.fog_density - 0.001).abs() < f64::EPSILON);
    }

    #[test]
    fn default_config_has_correct_stars() {
        let config = AetherConfig::default();
        assert_eq!(config.stars.count, 4000);
        assert_eq!(
            config.stars.shape,
            CloudShapeConfig::Volume { radius: 400.0 }
        );
        assert_eq!(config.stars.palette.len(), 3);
        assert_eq!(config.stars.palette[0].color, "#ffffff");
        assert!((config.stars.palette[1].threshold - 0.6).abs() < f64::EPSILON);
        assert!((config.stars.motion.pointer_coupling - 0.5).abs() < f64::EPSILON);
        assert!((config.stars.motion.easing - 0.01).abs() < f64::EPSILON);
        assert!((config.stars.motion.breathing_amplitude - 0.05).abs() < f64::EPSILON);
    }

    #[test]
    fn default_config_has_correct_dust() {
        let config = AetherConfig::default();
        assert!(config.dust.enabled);
        assert_eq!(config.dust.count, 100);
        assert!((config.dust.half_extent - 25.0).abs() < f64::EPSILON);
        assert_eq!(config.dust.color, "#6366f1");
    }

    #[test]
    fn default_config_has_shooting_star_disabled() {
        let config = AetherConfig::default();
        assert!(!config.shooting_star.enabled);
        assert!((config.shooting_star.period - 10.0).abs() < f64::EPSILON);
        assert_eq!(config.shooting_star.start, [5.0, 2.0, 0.0]);
        assert_eq!(config.shooting_star.end, [-5.0, -2.0, 0.0]);
    }

    #[test]
    fn default_config_has_correct_waitlist() {
        let config = AetherConfig::default();
        assert_eq!(config.waitlist.delivery, DeliveryMode::Csv);
        assert_eq!(config.waitlist.relay.subject_prefix, "AETHER WAITLIST");
        assert_eq!(config.waitlist.relay.template, "table");
        assert!(!config.waitlist.relay.captcha);
        assert_eq!(config.waitlist.csv.simulated_latency_ms, 1500);
    }

    #[test]
    fn partial_toml_keeps_section_defaults() {
        let config: AetherConfig = toml::from_str(
            r##"
[dust]
count = 50
"##,
        )
        .unwrap();
        assert_eq!(config.dust.count, 50);
        assert_eq!(config.dust.color, "#6366f1");
        assert_eq!(config.stars.count, 4000);
    }

    #[test]
    fn shape_parses_from_tagged_table() {
        let config: AetherConfig = toml::from_str(
            r#"
[stars.shape]
kind = "shell"
inner_radius = 1.2
outer_radius = 2.7
"#,
        )
        .unwrap();
        assert_eq!(
            config.stars.shape,
            CloudShapeConfig::Shell {
                inner_radius: 1.2,
                outer_radius: 2.7
            }
        );
    }

    #[test]
    fn palette_parses_from_array_of_tables() {
        let config: AetherConfig = toml::from_str(
            r##"
[[stars.palette]]
threshold = 0.5
color = "#ff0000"

[[stars.palette]]
threshold = 0.0
color = "#00ff00"
"##,
        )
        .unwrap();
        assert_eq!(config.stars.palette.len(), 2);
        assert_eq!(config.stars.palette[1].color, "#00ff00");
    }

    #[test]
    fn log_level_directive() {
        assert_eq!(LogLevel::Debug.directive(), "aether=debug");
        assert_eq!(LogLevel::default().directive(), "aether=info");
    }

    #[test]
    fn spin_only_motion_disables_parallax_and_breathing() {
        let motion = MotionConfig::spin_only([0.1, 0.2, 0.0]);
        assert_eq!(motion.pointer_coupling, 0.0);
        assert_eq!(motion.breathing_amplitude, 0.0);
        assert_eq!(motion.spin, [0.1, 0.2, 0.0]);
    }
}
